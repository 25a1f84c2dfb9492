//! Client state and request lifecycle.
//!
//! Every request moves the page `Idle -> Loading -> Idle`. While loading,
//! [`CatalogState::begin_request`] refuses to start another one, so at most
//! one request is in flight at a time.

use thiserror::Error;

use crate::{
    api::{ApiError, Product, ProductPayload},
    form::{FormIntent, ProductForm},
};

/// Whether a request is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading,
}

/// The user-facing operations, each with its own failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Load => "Could not load products",
            Self::Create => "Could not create product",
            Self::Update => "Could not update product",
            Self::Delete => "Could not delete product",
        }
    }
}

impl From<FormIntent> for Operation {
    fn from(intent: FormIntent) -> Self {
        match intent {
            FormIntent::Create => Self::Create,
            FormIntent::Edit { .. } => Self::Update,
        }
    }
}

/// How a mutation followed by its list re-fetch can fail.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The mutation itself failed; nothing changed on the server.
    #[error("mutation failed: {0}")]
    Rejected(#[source] ApiError),

    /// The mutation went through but the list could not be re-fetched.
    #[error("could not refresh products: {0}")]
    Refresh(#[source] ApiError),
}

/// A validated form, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub intent: FormIntent,
    pub payload: ProductPayload,
}

/// Everything the catalog page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub form: ProductForm,
    pub intent: FormIntent,
    pub phase: RequestPhase,
    pub error: Option<String>,
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        self.phase == RequestPhase::Loading
    }

    /// Enter `Loading` and clear the previous error. Returns `false`, changing
    /// nothing, when a request is already in flight.
    pub fn begin_request(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }

        self.phase = RequestPhase::Loading;
        self.error = None;

        true
    }

    /// Validate the form and start the request it implies.
    ///
    /// An invalid form sets the error and starts nothing.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_loading() {
            return None;
        }

        match self.form.to_payload() {
            Ok(payload) => {
                self.begin_request();

                Some(Submission {
                    intent: self.intent,
                    payload,
                })
            }
            Err(form_error) => {
                self.error = Some(form_error.to_string());

                None
            }
        }
    }

    pub fn finish_refresh(&mut self, result: Result<Vec<Product>, ApiError>) {
        self.phase = RequestPhase::Idle;

        match result {
            Ok(products) => self.products = products,
            Err(_) => self.error = Some(Operation::Load.failure_message().to_string()),
        }
    }

    /// Apply the outcome of a create, update or delete.
    ///
    /// A rejected mutation keeps the form so the user can retry. Once the
    /// server accepted it the form is reset, even if the re-fetch failed.
    pub fn finish_mutation(
        &mut self,
        operation: Operation,
        result: Result<Vec<Product>, ClientError>,
    ) {
        self.phase = RequestPhase::Idle;

        match result {
            Ok(products) => {
                self.products = products;
                self.reset_form_after(operation);
            }
            Err(ClientError::Refresh(_)) => {
                self.error = Some(Operation::Load.failure_message().to_string());
                self.reset_form_after(operation);
            }
            Err(ClientError::Rejected(_)) => {
                self.error = Some(operation.failure_message().to_string());
            }
        }
    }

    /// Load `product` into the form for editing.
    pub fn begin_edit(&mut self, product: &Product) {
        if self.is_loading() {
            return;
        }

        self.form = ProductForm::from(product);
        self.intent = FormIntent::Edit { id: product.id };
    }

    pub fn cancel_edit(&mut self) {
        self.form = ProductForm::default();
        self.intent = FormIntent::Create;
    }

    fn reset_form_after(&mut self, operation: Operation) {
        if matches!(operation, Operation::Create | Operation::Update) {
            self.cancel_edit();
        }
    }
}

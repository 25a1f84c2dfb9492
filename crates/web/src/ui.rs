//! Catalog page components.

use leptos::{ev::SubmitEvent, logging, prelude::*, task::spawn_local};

use crate::{
    actions,
    api::{HttpCatalogApi, Product},
    form::FormIntent,
    format::{format_created_date, format_price},
    state::{CatalogState, Operation},
};

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";

fn refresh_products(state: RwSignal<CatalogState>) {
    if !state.try_update(CatalogState::begin_request).unwrap_or(false) {
        return;
    }

    spawn_local(async move {
        let api = HttpCatalogApi::from_build_env();
        let result = actions::refresh(&api).await;

        if let Err(error) = &result {
            logging::error!("failed to load products: {error}");
        }

        state.update(|catalog| catalog.finish_refresh(result));
    });
}

fn submit_form(state: RwSignal<CatalogState>) {
    let Some(submission) = state.try_update(CatalogState::begin_submit).flatten() else {
        return;
    };

    spawn_local(async move {
        let api = HttpCatalogApi::from_build_env();
        let operation = Operation::from(submission.intent);
        let result = actions::submit(&api, &submission).await;

        if let Err(error) = &result {
            logging::error!("failed to save product: {error}");
        }

        state.update(|catalog| catalog.finish_mutation(operation, result));
    });
}

fn confirm_delete() -> bool {
    window()
        .confirm_with_message(DELETE_CONFIRMATION)
        .unwrap_or(false)
}

fn delete_product(state: RwSignal<CatalogState>, id: i64) {
    if state.with_untracked(CatalogState::is_loading) {
        return;
    }

    spawn_local(async move {
        let api = HttpCatalogApi::from_build_env();

        let confirm = || {
            confirm_delete()
                && state
                    .try_update(CatalogState::begin_request)
                    .unwrap_or(false)
        };

        let Some(result) = actions::delete(&api, id, confirm).await else {
            return;
        };

        if let Err(error) = &result {
            logging::error!("failed to delete product {id}: {error}");
        }

        state.update(|catalog| catalog.finish_mutation(Operation::Delete, result));
    });
}

#[component]
fn ErrorBanner(state: RwSignal<CatalogState>) -> impl IntoView {
    move || {
        state.with(|catalog| catalog.error.clone()).map(|message| {
            view! {
                <div class="error-message" role="alert">
                    {message}
                </div>
            }
        })
    }
}

#[component]
fn ProductFormSection(state: RwSignal<CatalogState>) -> impl IntoView {
    let editing =
        move || state.with(|catalog| matches!(catalog.intent, FormIntent::Edit { .. }));
    let loading = move || state.with(CatalogState::is_loading);

    let submit_label = move || {
        if loading() {
            "Working..."
        } else if editing() {
            "Save changes"
        } else {
            "Add product"
        }
    };

    view! {
        <section class="form-section">
            <h2>{move || if editing() { "Edit product" } else { "Add product" }}</h2>
            <form on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                submit_form(state);
            }>
                <div class="form-group">
                    <label for="product-name">"Name"</label>
                    <input
                        id="product-name"
                        type="text"
                        required
                        placeholder="Product name"
                        prop:value=move || state.with(|catalog| catalog.form.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|catalog| catalog.form.name = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="product-price">"Price"</label>
                    <input
                        id="product-price"
                        type="number"
                        step="0.01"
                        min="0"
                        required
                        placeholder="0.00"
                        prop:value=move || state.with(|catalog| catalog.form.price.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|catalog| catalog.form.price = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="product-description">"Description"</label>
                    <textarea
                        id="product-description"
                        rows="3"
                        placeholder="Optional description"
                        prop:value=move || state.with(|catalog| catalog.form.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|catalog| catalog.form.description = value);
                        }
                    ></textarea>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=loading>
                        {submit_label}
                    </button>
                    <Show when=editing>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| state.update(CatalogState::cancel_edit)
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}

#[component]
fn ProductCard(product: Product, state: RwSignal<CatalogState>) -> impl IntoView {
    let id = product.id;
    let loading = move || state.with(CatalogState::is_loading);
    let description = product
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_string());
    let price = format_price(product.price);
    let created = format_created_date(product.created_at);
    let name = product.name.clone();

    view! {
        <li class="product-card">
            <div class="product-header">
                <h3>{name}</h3>
                <span class="product-price">{price}</span>
            </div>
            <p class="product-description">{description}</p>
            <div class="product-meta">
                <small>{format!("ID: {id}")}</small>
                <small>{format!("Created: {created}")}</small>
            </div>
            <div class="product-actions">
                <button
                    type="button"
                    class="btn btn-edit"
                    disabled=loading
                    on:click=move |_| state.update(|catalog| catalog.begin_edit(&product))
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="btn btn-delete"
                    disabled=loading
                    on:click=move |_| delete_product(state, id)
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[component]
fn ProductList(state: RwSignal<CatalogState>) -> impl IntoView {
    let loading = move || state.with(CatalogState::is_loading);
    let empty =
        move || state.with(|catalog| !catalog.is_loading() && catalog.products.is_empty());

    view! {
        <section class="products-section">
            <div class="section-header">
                <h2>"Products"</h2>
                <button
                    type="button"
                    class="btn btn-refresh"
                    disabled=loading
                    on:click=move |_| refresh_products(state)
                >
                    "Refresh"
                </button>
            </div>
            <Show when=loading>
                <div class="loading" aria-live="polite">"Loading..."</div>
            </Show>
            <ul class="products-grid">
                <For
                    each=move || state.with(|catalog| catalog.products.clone())
                    key=Product::row_key
                    let:product
                >
                    <ProductCard product=product state=state />
                </For>
            </ul>
            <Show when=empty>
                <div class="empty-state">
                    <p>"No products yet. Add the first one above."</p>
                </div>
            </Show>
        </section>
    }
}

/// The catalog page: form, product list and error banner.
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(CatalogState::default());

    refresh_products(state);

    view! {
        <main class="product-manager">
            <h1>"Product Catalog"</h1>
            <ErrorBanner state=state />
            <ProductFormSection state=state />
            <ProductList state=state />
        </main>
    }
}

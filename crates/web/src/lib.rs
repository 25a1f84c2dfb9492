//! Catalog single-page client.
//!
//! [`state::CatalogState`] holds everything the page shows and owns the
//! request lifecycle, [`actions`] performs the HTTP round trips through a
//! [`api::CatalogApi`], and [`ui`] wires both to Leptos signals.

pub mod actions;
pub mod api;
pub mod form;
pub mod format;
pub mod state;
pub mod ui;

//! Catalog client entry point

/// Mount the catalog page onto `<body>`.
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(catalog_web::ui::App);
}

//! Menagerie
//!
//! Single-page client for three GraphQL endpoints.
//!
//! # Routes
//! - `/documents`: data documents from the documents endpoint
//! - `/clients`: clients from the clients endpoint
//! - `/pets`: pets and their owners from the pets endpoint
//!
//! Each route wraps its page in a `GraphqlProvider` bound to that endpoint
//! only, so every page has its own transport and response cache.

mod app;
mod config;
mod endpoints;
mod pages;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(app::App);
}

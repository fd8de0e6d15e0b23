//! # Menagerie Client
//!
//! Reactive GraphQL client library with Leptos integration.
//!
//! Each GraphQL endpoint the application talks to gets one [`GraphqlContext`]:
//! a [`Transport`] bound to a single URL plus its own [`ResponseCache`]. A
//! [`GraphqlProvider`] scopes a context to a subtree, and [`use_query`] inside
//! that subtree executes an operation once and exposes its [`QueryState`].
//!
//! ## Features
//!
//! - **Endpoint isolation**: every context owns its transport and cache; a
//!   cache hit on one endpoint never answers a query for another
//! - **Cache-first reads**: repeated executions of the same query and
//!   variables are served from memory
//! - **Run-once queries**: a view's query fires when it mounts, with no
//!   polling, re-fetch or retry
//! - **Type safety**: operations are typed through `menagerie_common::GraphqlOperation`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use leptos::prelude::*;
//! use menagerie_client::{query_list, GraphqlContext, GraphqlProvider, HttpTransport, RowView};
//! use menagerie_common::{AllPets, Pet};
//!
//! fn pet_row(pet: &Pet) -> RowView {
//!     RowView::new(&pet.name).line(format!("Species: {}", pet.species))
//! }
//!
//! #[component]
//! fn PetsPage() -> impl IntoView {
//!     query_list::<AllPets>("Pets", pet_row)
//! }
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let pets = GraphqlContext::new(
//!         "pets",
//!         Arc::new(HttpTransport::new("http://localhost:8000/pets/")),
//!     );
//!
//!     view! {
//!         <GraphqlProvider context=pets>
//!             <PetsPage/>
//!         </GraphqlProvider>
//!     }
//! }
//! ```

// Module declarations
mod cache;
mod components;
mod context;
mod error;
mod hooks;
mod provider;
mod render;
mod state;
mod traits;
mod transport;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Re-exports
pub use cache::{CacheKey, ResponseCache};
pub use components::query_list;
pub use context::GraphqlContext;
pub use error::QueryError;
pub use hooks::{use_graphql_context, use_list_view, use_query};
pub use provider::GraphqlProvider;
pub use render::{error_text, ListView, RowView, LOADING_TEXT};
pub use state::QueryState;
pub use traits::Transport;
pub use transport::HttpTransport;

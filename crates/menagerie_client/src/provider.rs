use leptos::prelude::*;

use crate::context::GraphqlContext;

/// Provider component that scopes a [`GraphqlContext`] to its children.
///
/// Every `use_query` below this component talks to `context`'s endpoint and
/// reads and writes `context`'s cache. Wrap each view in the provider for the
/// endpoint it belongs to.
///
/// # Example
///
/// ```rust,ignore
/// use menagerie_client::{GraphqlContext, GraphqlProvider, HttpTransport};
/// use std::sync::Arc;
///
/// #[component]
/// pub fn PetsRoute() -> impl IntoView {
///     let pets = GraphqlContext::new(
///         "pets",
///         Arc::new(HttpTransport::new("http://localhost:8000/pets/")),
///     );
///
///     view! {
///         <GraphqlProvider context=pets>
///             <PetsPage />
///         </GraphqlProvider>
///     }
/// }
/// ```
#[component]
pub fn GraphqlProvider(
    /// Endpoint binding made available to the children
    context: GraphqlContext,
    /// Child components
    children: Children,
) -> impl IntoView {
    log::debug!(
        "[GraphqlProvider] scoping {} -> {}",
        context.name(),
        context.endpoint()
    );

    provide_context(context);

    children()
}

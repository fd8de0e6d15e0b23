use leptos::prelude::*;
use menagerie_common::{GraphqlOperation, ListQuery};

use crate::context::GraphqlContext;
use crate::render::{ListView, RowView};
use crate::state::QueryState;

/// Hook to access the enclosing endpoint's [`GraphqlContext`].
///
/// # Panics
///
/// Panics if called outside of a `GraphqlProvider`.
pub fn use_graphql_context() -> GraphqlContext {
    expect_context::<GraphqlContext>()
}

/// Hook that executes a GraphQL operation once and tracks its state.
///
/// The query is started when the hook is called, i.e. when the calling
/// component is created, against the transport of the nearest
/// `GraphqlProvider`. The returned signal starts as `Pending` and changes
/// exactly once, to `Succeeded` or `Failed`. Nothing is re-fetched when the
/// component re-renders.
///
/// If the component is disposed while the request is in flight, the result is
/// dropped on arrival.
///
/// # Panics
///
/// Panics if called outside of a `GraphqlProvider`.
///
/// # Example
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use menagerie_client::{use_query, QueryState};
/// use menagerie_common::{AllClients, NoVariables};
///
/// #[component]
/// fn ClientCount() -> impl IntoView {
///     let clients = use_query::<AllClients>(NoVariables::default());
///
///     move || match clients.get() {
///         QueryState::Pending => "Loading...".to_string(),
///         QueryState::Failed(message) => format!("Error: {message}"),
///         QueryState::Succeeded(data) => format!("{} clients", data.all_clients.len()),
///     }
/// }
/// ```
pub fn use_query<O: GraphqlOperation>(variables: O::Variables) -> ReadSignal<QueryState<O::ResponseData>> {
    let ctx = use_graphql_context();
    let state = RwSignal::new(QueryState::Pending);

    log::debug!("[use_query] {} on {}", O::OPERATION_NAME, ctx.name());

    leptos::task::spawn_local(async move {
        let outcome = ctx.execute::<O>(&variables).await;
        if state.try_set(QueryState::from(outcome)).is_some() {
            log::debug!(
                "[use_query] {} finished after its view was disposed",
                O::OPERATION_NAME
            );
        }
    });

    state.read_only()
}

/// Hook that runs list query `O` once and maps its state to a [`ListView`].
///
/// This is what [`query_list`](crate::query_list) renders; each entity becomes
/// one row through `row`.
///
/// # Panics
///
/// Panics if called outside of a `GraphqlProvider`.
pub fn use_list_view<O: ListQuery>(row: fn(&O::Item) -> RowView) -> Signal<ListView> {
    let state = use_query::<O>(O::Variables::default());

    Signal::derive(move || state.with(|state| ListView::from_state::<O>(state, row)))
}

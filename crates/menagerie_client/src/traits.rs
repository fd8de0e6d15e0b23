use async_trait::async_trait;
use menagerie_common::GraphqlRequest;

use crate::error::QueryError;

/// The HTTP link between a [`GraphqlContext`](crate::GraphqlContext) and one
/// GraphQL endpoint.
///
/// A transport is bound to exactly one URL for its whole life. It sends the
/// request body and hands back whatever JSON the server answered with; turning
/// that JSON into data or errors is the context's job.
///
/// The returned future is not `Send` because on `wasm32` it wraps a browser
/// `fetch` promise. All queries run on the single UI thread.
///
/// # Example
///
/// ```rust,ignore
/// use menagerie_client::{HttpTransport, GraphqlContext};
/// use std::sync::Arc;
///
/// let transport = Arc::new(HttpTransport::new("http://localhost:8000/pets/"));
/// let pets = GraphqlContext::new("pets", transport);
/// ```
#[async_trait(?Send)]
pub trait Transport: Send + Sync + 'static {
    /// URL every request is POSTed to.
    fn endpoint(&self) -> &str;

    /// POST `request` and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Network` when no JSON body could be obtained.
    async fn post(&self, request: &GraphqlRequest) -> Result<serde_json::Value, QueryError>;
}

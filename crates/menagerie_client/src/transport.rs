use async_trait::async_trait;
use menagerie_common::GraphqlRequest;

use crate::error::QueryError;
use crate::traits::Transport;

/// [`Transport`] that POSTs JSON over HTTP(S) with `reqwest`.
///
/// No authentication headers and no retries. On `wasm32` reqwest goes through
/// the browser's `fetch`, natively through hyper.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default `reqwest::Client`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Create a transport around an existing `reqwest::Client`.
    pub fn with_client(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// A non-2xx answer whose body is still JSON (e.g. a 400 carrying an
    /// `errors` array) is returned as-is, so the view shows the server's
    /// GraphQL message rather than `Received status code 400`. Only non-JSON
    /// error bodies become the status-code message.
    async fn post(&self, request: &GraphqlRequest) -> Result<serde_json::Value, QueryError> {
        log::debug!(
            "[HttpTransport] POST {} operation={:?}",
            self.endpoint,
            request.operation_name
        );

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // GraphQL servers answer 400 with a JSON `errors` body; keep those.
        match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(QueryError::Network {
                message: format!(
                    "Response not successful: Received status code {}",
                    status.as_u16()
                ),
            }),
            Err(err) => Err(QueryError::Network {
                message: err.to_string(),
            }),
        }
    }
}

use std::sync::Arc;

use menagerie_common::{GraphqlOperation, GraphqlResponse};

use crate::cache::{CacheKey, ResponseCache};
use crate::error::QueryError;
use crate::traits::Transport;

/// One endpoint's transport and response cache.
///
/// This context is provided by `GraphqlProvider` and consumed by `use_query`.
/// Cloning it is cheap and every clone shares the same transport and cache.
/// Two contexts built with separate `new` calls share nothing, so a cache hit
/// on one endpoint can never answer a query meant for another.
#[derive(Clone)]
pub struct GraphqlContext {
    /// Short endpoint label used in log lines ("clients", "pets", ...)
    name: &'static str,
    /// Link to the endpoint
    transport: Arc<dyn Transport>,
    /// Successful `data` payloads keyed by query and variables
    cache: ResponseCache,
}

impl GraphqlContext {
    /// Bind `transport` to a fresh, empty cache.
    pub fn new(name: &'static str, transport: Arc<dyn Transport>) -> Self {
        Self {
            name,
            transport,
            cache: ResponseCache::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// URL of the bound endpoint.
    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Execute `O` against this endpoint.
    ///
    /// Cache-first: if a previous execution with the same query and variables
    /// succeeded, its data is decoded again and no request is sent. Otherwise
    /// the request is POSTed once; successful data is cached, failures are not.
    ///
    /// # Errors
    ///
    /// - `QueryError::Network` if the transport produced no JSON body.
    /// - `QueryError::Graphql` if the server returned any `errors`.
    /// - `QueryError::Json` if `data` is missing or has the wrong shape.
    pub async fn execute<O: GraphqlOperation>(
        &self,
        variables: &O::Variables,
    ) -> Result<O::ResponseData, QueryError> {
        let request = O::request(variables)?;
        let key = CacheKey::for_request(&request);

        if let Some(data) = self.cache.get(&key) {
            log::debug!(
                "[GraphqlContext:{}] cache hit for {}",
                self.name,
                O::OPERATION_NAME
            );
            return Ok(serde_json::from_value(data)?);
        }

        log::debug!(
            "[GraphqlContext:{}] sending {} to {}",
            self.name,
            O::OPERATION_NAME,
            self.transport.endpoint()
        );

        let body = match self.transport.post(&request).await {
            Ok(body) => body,
            Err(err) => {
                log::warn!(
                    "[GraphqlContext:{}] {} failed: {}",
                    self.name,
                    O::OPERATION_NAME,
                    err
                );
                return Err(err);
            }
        };

        let response: GraphqlResponse<serde_json::Value> = serde_json::from_value(body)?;
        if !response.is_ok() {
            log::warn!(
                "[GraphqlContext:{}] {} returned {} GraphQL error(s)",
                self.name,
                O::OPERATION_NAME,
                response.errors.len()
            );
            return Err(QueryError::Graphql {
                errors: response.errors,
            });
        }

        let data = response.data.ok_or_else(|| QueryError::Json {
            message: "response carried neither data nor errors".to_string(),
        })?;
        let decoded: O::ResponseData = serde_json::from_value(data.clone())?;

        self.cache.insert(key, data);
        Ok(decoded)
    }
}

impl std::fmt::Debug for GraphqlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlContext")
            .field("name", &self.name)
            .field("endpoint", &self.transport.endpoint())
            .field("cached_entries", &self.cache.len())
            .finish()
    }
}

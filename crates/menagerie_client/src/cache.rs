use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use menagerie_common::GraphqlRequest;

/// Key of a cached response: the query text plus its variables as JSON text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub variables: String,
}

impl CacheKey {
    /// Derive the key for a request body.
    pub fn for_request(request: &GraphqlRequest) -> Self {
        Self {
            query: request.query.clone(),
            variables: request.variables.to_string(),
        }
    }
}

/// In-memory store of successful `data` payloads for one endpoint.
///
/// Cloning a cache yields another handle to the same storage. Each
/// [`GraphqlContext`](crate::GraphqlContext) creates its own, so entries never
/// cross endpoints. The mutex is only there because Leptos context values must
/// be `Send + Sync`; every access happens on the UI thread.
#[derive(Clone, Debug, Default)]
pub struct ResponseCache {
    entries: Arc<Mutex<HashMap<CacheKey, serde_json::Value>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, serde_json::Value>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up the `data` payload stored for `key`.
    pub fn get(&self, key: &CacheKey) -> Option<serde_json::Value> {
        self.lock().get(key).cloned()
    }

    /// Store a successful `data` payload, replacing any previous one.
    pub fn insert(&self, key: CacheKey, data: serde_json::Value) {
        self.lock().insert(key, data);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

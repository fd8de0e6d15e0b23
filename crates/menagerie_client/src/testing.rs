//! In-memory [`Transport`] for tests.
//!
//! Available to this crate's unit tests and, with the `test-support` feature,
//! to other crates' tests.

use std::sync::{Arc, Mutex, PoisonError};

use any_spawner::Executor;
use async_trait::async_trait;
use leptos::prelude::*;
use menagerie_common::{GraphqlRequest, ListQuery};

use crate::context::GraphqlContext;
use crate::error::QueryError;
use crate::hooks::use_list_view;
use crate::render::{ListView, RowView};
use crate::traits::Transport;

/// Install the `futures` executor behind `spawn_local`.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_executor() {
    _ = Executor::init_futures_executor();
}

/// Run spawned tasks on this thread until none can make progress.
pub fn settle() {
    Executor::poll_local();
}

/// Mount the list view for `O` against `transport` and return what it shows
/// once every spawned task has settled.
pub fn settled_list_view<O: ListQuery>(
    transport: Arc<dyn Transport>,
    row: fn(&O::Item) -> RowView,
) -> ListView {
    init_executor();
    let owner = Owner::new();

    let view = owner.with(|| {
        provide_context(GraphqlContext::new("test", transport));
        use_list_view::<O>(row)
    });
    settle();

    view.get_untracked()
}

/// What a [`StubTransport`] answers with.
#[derive(Clone, Debug)]
pub enum StubReply {
    /// Resolve with this JSON body.
    Json(serde_json::Value),
    /// Reject with `QueryError::Network` carrying this message.
    Fail(String),
    /// Never resolve.
    Never,
}

/// Transport that records every request and replies with a fixed answer.
#[derive(Debug)]
pub struct StubTransport {
    endpoint: String,
    reply: StubReply,
    requests: Mutex<Vec<GraphqlRequest>>,
}

impl StubTransport {
    pub fn new(endpoint: impl Into<String>, reply: StubReply) -> Self {
        Self {
            endpoint: endpoint.into(),
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn json(endpoint: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(endpoint, StubReply::Json(body))
    }

    pub fn failing(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(endpoint, StubReply::Fail(message.into()))
    }

    pub fn never(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, StubReply::Never)
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<GraphqlRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &GraphqlRequest) -> Result<serde_json::Value, QueryError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        match &self.reply {
            StubReply::Json(body) => Ok(body.clone()),
            StubReply::Fail(message) => Err(QueryError::Network {
                message: message.clone(),
            }),
            StubReply::Never => std::future::pending().await,
        }
    }
}

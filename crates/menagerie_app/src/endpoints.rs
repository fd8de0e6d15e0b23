use std::sync::Arc;

use menagerie_client::{GraphqlContext, HttpTransport};

use crate::config::ApiConfig;
use crate::pages::Page;

/// The three endpoint bindings, created once at startup.
///
/// Every binding has its own transport and its own response cache.
#[derive(Clone, Debug)]
pub struct Endpoints {
    documents: GraphqlContext,
    clients: GraphqlContext,
    pets: GraphqlContext,
}

impl Endpoints {
    pub fn new(documents: GraphqlContext, clients: GraphqlContext, pets: GraphqlContext) -> Self {
        Self {
            documents,
            clients,
            pets,
        }
    }

    /// One HTTP transport per page, each pointed at its own URL.
    pub fn from_config(config: &ApiConfig) -> Self {
        let http = |page: Page| {
            GraphqlContext::new(
                page.name(),
                Arc::new(HttpTransport::new(config.endpoint_url(page))),
            )
        };

        Self::new(http(Page::Documents), http(Page::Clients), http(Page::Pets))
    }

    /// The binding a page must be rendered with.
    pub fn context_for(&self, page: Page) -> GraphqlContext {
        match page {
            Page::Documents => self.documents.clone(),
            Page::Clients => self.clients.clone(),
            Page::Pets => self.pets.clone(),
        }
    }
}

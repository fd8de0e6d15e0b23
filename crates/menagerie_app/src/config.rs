use crate::pages::Page;

/// Default origin of the GraphQL backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the GraphQL endpoints live.
///
/// Each page's endpoint is `{base_url}/{name}/`, matching the
/// backend's URL configuration (`/documents/`, `/clients/`, `/pets/`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the endpoint serving `page`.
    pub fn endpoint_url(&self, page: Page) -> String {
        format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            page.name()
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

//! Application root component.

use leptos::prelude::*;
use leptos_router::components::Router;

use crate::config::ApiConfig;
use crate::endpoints::Endpoints;
use crate::pages::AppRoutes;

/// Root application component.
///
/// Builds the three endpoint bindings once and keeps them in context for the
/// lifetime of the page.
#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::default();
    let endpoints = Endpoints::from_config(&config);

    log::info!("[App] API base {}", config.base_url);
    provide_context(endpoints);

    view! {
        <Router>
            <AppRoutes/>
        </Router>
    }
}

//! Application pages (routes).

mod clients;
mod documents;
mod pets;

pub use clients::ClientsPage;
pub use documents::DocumentsPage;
pub use pets::PetsPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::StaticSegment;
use menagerie_client::GraphqlProvider;

use crate::endpoints::Endpoints;

/// The routed pages. Each one is served by exactly one endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Documents,
    Clients,
    Pets,
}

impl Page {
    /// Route segment of the page, also the name of its backend endpoint.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Clients => "clients",
            Self::Pets => "pets",
        }
    }
}

/// Route table: `/documents`, `/clients` and `/pets`. Unmapped paths render
/// nothing.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| ()>
            <Route
                path=StaticSegment(Page::Documents.name())
                view=|| view! { <PageRoute page=Page::Documents/> }
            />
            <Route
                path=StaticSegment(Page::Clients.name())
                view=|| view! { <PageRoute page=Page::Clients/> }
            />
            <Route
                path=StaticSegment(Page::Pets.name())
                view=|| view! { <PageRoute page=Page::Pets/> }
            />
        </Routes>
    }
}

/// Render `page` inside a provider bound to its own endpoint.
#[component]
fn PageRoute(page: Page) -> impl IntoView {
    let endpoints = expect_context::<Endpoints>();

    view! {
        <GraphqlProvider context=endpoints.context_for(page)>
            {page_view(page)}
        </GraphqlProvider>
    }
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Documents => view! { <DocumentsPage/> }.into_any(),
        Page::Clients => view! { <ClientsPage/> }.into_any(),
        Page::Pets => view! { <PetsPage/> }.into_any(),
    }
}

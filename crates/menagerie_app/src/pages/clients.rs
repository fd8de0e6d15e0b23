//! Clients page.

use leptos::prelude::*;
use menagerie_client::{query_list, RowView};
use menagerie_common::{AllClients, Client};

/// Lists every client from the clients endpoint.
#[component]
pub fn ClientsPage() -> impl IntoView {
    query_list::<AllClients>("Clients", client_row)
}

/// Fields are interpolated verbatim; `isActive` prints as `true`/`false`.
fn client_row(client: &Client) -> RowView {
    RowView::new(format!("{} {}", client.first_name, client.last_name))
        .line(&client.email)
        .line(format!("Is Active: {}", client.is_active))
        .line(format!("Registered At: {}", client.registered_at))
}

//! Documents page.

use leptos::prelude::*;
use menagerie_client::{query_list, RowView};
use menagerie_common::{AllDataDocuments, DataDocument};

/// Lists every data document from the documents endpoint.
#[component]
pub fn DocumentsPage() -> impl IntoView {
    query_list::<AllDataDocuments>("Documents", document_row)
}

fn document_row(document: &DataDocument) -> RowView {
    RowView::new(&document.title)
        .line(&document.description)
        .line(format!("Created At: {}", document.created_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support::first_render;
    use menagerie_client::testing::StubTransport;
    use menagerie_client::ListView;
    use serde_json::json;

    const URL: &str = "http://localhost:8000/documents/";

    #[test]
    fn test_document_rows_in_order() {
        let body = json!({
            "data": {
                "allDataDocuments": [
                    { "title": "Q2", "description": "Second quarter", "createdAt": "2024-07-01T00:00:00+00:00" },
                    { "title": "Q1", "description": "First quarter", "createdAt": "2024-04-01T00:00:00+00:00" }
                ]
            }
        });

        let view = first_render::<AllDataDocuments>(StubTransport::json(URL, body), document_row);

        assert_eq!(
            view,
            ListView::Rows(vec![
                RowView::new("Q2")
                    .line("Second quarter")
                    .line("Created At: 2024-07-01T00:00:00+00:00"),
                RowView::new("Q1")
                    .line("First quarter")
                    .line("Created At: 2024-04-01T00:00:00+00:00"),
            ])
        );
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let body = json!({ "data": { "allDataDocuments": [] } });

        let view = first_render::<AllDataDocuments>(StubTransport::json(URL, body), document_row);

        assert_eq!(view, ListView::Rows(Vec::new()));
    }

    #[test]
    fn test_failure_renders_message() {
        let view = first_render::<AllDataDocuments>(StubTransport::failing(URL, "timeout"), document_row);

        assert_eq!(view, ListView::Failed("Error: timeout".to_string()));
    }

    #[test]
    fn test_unanswered_query_keeps_loading() {
        let view = first_render::<AllDataDocuments>(StubTransport::never(URL), document_row);

        assert_eq!(view, ListView::Loading);
    }
}

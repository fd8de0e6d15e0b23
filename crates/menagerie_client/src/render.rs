//! Plain-data description of what a list view shows.
//!
//! The components in `components.rs` turn these into DOM nodes; keeping the
//! text here means the exact rendered strings can be checked without a
//! browser.

use menagerie_common::ListQuery;

use crate::state::QueryState;

/// Placeholder shown while a query is pending.
pub const LOADING_TEXT: &str = "Loading...";

/// Text shown for a failed query: `"Error: "` followed by the message verbatim.
pub fn error_text(message: &str) -> String {
    format!("Error: {message}")
}

/// One `<li>`: a heading and the paragraph lines under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub heading: String,
    pub lines: Vec<String>,
}

impl RowView {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    /// Append a paragraph line.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }
}

/// The three mutually exclusive things a list view can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    /// `<p>Loading...</p>`
    Loading,
    /// `<p>Error: ...</p>`, text already prefixed.
    Failed(String),
    /// Title plus `<ul>`; an empty vector is an empty list, not an error.
    Rows(Vec<RowView>),
}

impl ListView {
    /// Map a query state to what should be on screen, one row per entity in
    /// server order.
    pub fn from_state<O: ListQuery>(
        state: &QueryState<O::ResponseData>,
        row: impl Fn(&O::Item) -> RowView,
    ) -> Self {
        match state {
            QueryState::Pending => Self::Loading,
            QueryState::Failed(message) => Self::Failed(error_text(message)),
            QueryState::Succeeded(data) => Self::Rows(O::items(data).iter().map(row).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_common::{AllDataDocuments, AllDataDocumentsData, DataDocument};

    fn document_row(document: &DataDocument) -> RowView {
        RowView::new(&document.title).line(&document.description)
    }

    #[test]
    fn test_pending_is_loading() {
        let view = ListView::from_state::<AllDataDocuments>(&QueryState::Pending, document_row);

        assert_eq!(view, ListView::Loading);
        assert_eq!(LOADING_TEXT, "Loading...");
    }

    #[test]
    fn test_failed_prefixes_error() {
        let state = QueryState::Failed("Failed to fetch".to_string());
        let view = ListView::from_state::<AllDataDocuments>(&state, document_row);

        assert_eq!(view, ListView::Failed("Error: Failed to fetch".to_string()));
    }

    #[test]
    fn test_empty_success_is_empty_list() {
        let state = QueryState::Succeeded(AllDataDocumentsData {
            all_data_documents: Vec::new(),
        });
        let view = ListView::from_state::<AllDataDocuments>(&state, document_row);

        assert_eq!(view, ListView::Rows(Vec::new()));
    }

    #[test]
    fn test_rows_follow_server_order() {
        let doc = |title: &str| DataDocument {
            id: None,
            title: title.to_string(),
            description: format!("about {title}"),
            created_at: String::new(),
        };
        let state = QueryState::Succeeded(AllDataDocumentsData {
            all_data_documents: vec![doc("zeta"), doc("alpha")],
        });

        let view = ListView::from_state::<AllDataDocuments>(&state, document_row);

        assert_eq!(
            view,
            ListView::Rows(vec![
                RowView::new("zeta").line("about zeta"),
                RowView::new("alpha").line("about alpha"),
            ])
        );
    }
}

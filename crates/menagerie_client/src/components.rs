//! Ready-to-use list view.
//!
//! This module turns the [`ListView`] signal from `use_list_view` into the
//! markup every page of the application shares.

use leptos::prelude::*;
use menagerie_common::ListQuery;

use crate::hooks::use_list_view;
use crate::render::{ListView, RowView, LOADING_TEXT};

/// Query `O` once and render it as a titled list.
///
/// Renders `<p>Loading...</p>` while pending, `<p>Error: ...</p>` on failure,
/// and otherwise
///
/// ```html
/// <div>
///   <h1>{title}</h1>
///   <ul>
///     <li><h3>{heading}</h3><p>{line}</p>...</li>
///   </ul>
/// </div>
/// ```
///
/// with one `<li>` per entity, mapped by `row`.
///
/// # Panics
///
/// Panics if called outside of a `GraphqlProvider`.
///
/// # Example
///
/// ```rust,ignore
/// use menagerie_client::{query_list, RowView};
/// use menagerie_common::{AllDataDocuments, DataDocument};
///
/// fn document_row(document: &DataDocument) -> RowView {
///     RowView::new(&document.title).line(&document.description)
/// }
///
/// #[component]
/// pub fn DocumentsPage() -> impl IntoView {
///     query_list::<AllDataDocuments>("Documents", document_row)
/// }
/// ```
pub fn query_list<O: ListQuery>(title: &'static str, row: fn(&O::Item) -> RowView) -> impl IntoView {
    let list = use_list_view::<O>(row);

    move || match list.get() {
        ListView::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
        ListView::Failed(text) => view! { <p>{text}</p> }.into_any(),
        ListView::Rows(rows) => view! {
            <div>
                <h1>{title}</h1>
                <ul>
                    {rows.into_iter().map(list_item).collect_view()}
                </ul>
            </div>
        }
        .into_any(),
    }
}

fn list_item(row: RowView) -> impl IntoView {
    view! {
        <li>
            <h3>{row.heading}</h3>
            {row.lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
        </li>
    }
}

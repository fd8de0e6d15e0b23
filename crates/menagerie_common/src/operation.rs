use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A typed GraphQL operation bound to one fixed query document.
///
/// Implement this once per query. The associated `ResponseData` is the shape of
/// the `data` member of a successful response, so `allClients { ... }` decodes
/// into a struct with an `all_clients` field.
///
/// ## Example
///
/// ```rust
/// use menagerie_common::{GraphqlOperation, NoVariables};
/// use serde::Deserialize;
///
/// #[derive(Clone, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct ViewerData {
///     viewer_name: String,
/// }
///
/// struct Viewer;
///
/// impl GraphqlOperation for Viewer {
///     type Variables = NoVariables;
///     type ResponseData = ViewerData;
///
///     const QUERY: &'static str = "query Viewer { viewerName }";
///     const OPERATION_NAME: &'static str = "Viewer";
/// }
///
/// let request = Viewer::request(&NoVariables::default()).unwrap();
/// assert_eq!(request.operation_name.as_deref(), Some("Viewer"));
/// ```
pub trait GraphqlOperation: 'static {
    /// Variables sent alongside the query document.
    type Variables: Serialize + Default + Send + Sync + 'static;
    /// Decoded `data` payload of a successful response.
    type ResponseData: DeserializeOwned + Clone + Send + Sync + 'static;

    /// GraphQL query text.
    const QUERY: &'static str;
    /// Operation name, sent as `operationName` and used in log lines.
    const OPERATION_NAME: &'static str;

    /// Build the request body for this operation.
    fn request(variables: &Self::Variables) -> Result<GraphqlRequest, serde_json::Error> {
        Ok(GraphqlRequest {
            query: Self::QUERY.to_string(),
            variables: serde_json::to_value(variables)?,
            operation_name: Some(Self::OPERATION_NAME.to_string()),
        })
    }
}

/// An operation whose response is one ordered list of entities.
///
/// Every view in the application renders one of these.
pub trait ListQuery: GraphqlOperation {
    /// Entity type of a single row.
    type Item: Clone + Send + Sync + 'static;

    /// Borrow the rows out of the decoded response, in server order.
    fn items(data: &Self::ResponseData) -> &[Self::Item];
}

/// Variables for operations that take none. Serializes to `{}`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoVariables {}

/// JSON body POSTed to a GraphQL endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    /// Query document text.
    pub query: String,
    /// Variables object.
    pub variables: serde_json::Value,
    /// Optional operation name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

/// Response envelope: `{ "data": ... }` and/or `{ "errors": [...] }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphqlResponse<T> {
    /// Response data; `null` and absent both decode to `None`.
    #[serde(default)]
    pub data: Option<T>,
    /// GraphQL errors reported by the server.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Returns `true` if the server reported no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A single entry of the `errors` array.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GraphqlError {
    /// Human-readable message.
    pub message: String,
    /// Positions in the query document the error refers to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphqlErrorLocation>,
    /// Response path of the failing field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<GraphqlPathSegment>,
}

/// Line/column of a GraphQL error (both 1-based).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphqlErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// One step in a GraphQL error path.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum GraphqlPathSegment {
    /// Field name.
    Key(String),
    /// List index.
    Index(i64),
}

use menagerie_common::GraphqlError;
use thiserror::Error;

/// Errors that can fail a single query execution.
///
/// Every variant ends up in the same place: the view's failed state, which
/// shows [`QueryError::message`] verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The request did not produce a JSON body (connection refused, DNS,
    /// CORS, non-JSON error page, ...).
    #[error("{message}")]
    Network {
        /// Message from the HTTP layer
        message: String,
    },

    /// The server answered with a non-empty `errors` array.
    #[error("{}", join_messages(.errors))]
    Graphql {
        /// Errors as reported by the server
        errors: Vec<GraphqlError>,
    },

    /// A JSON body arrived but did not have the expected shape.
    #[error("{message}")]
    Json {
        /// Message from the (de)serializer
        message: String,
    },
}

impl QueryError {
    /// The human-readable message shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graphql_error(message: &str) -> GraphqlError {
        GraphqlError {
            message: message.to_string(),
            locations: Vec::new(),
            path: Vec::new(),
        }
    }

    #[test]
    fn test_network_message_is_verbatim() {
        let err = QueryError::Network {
            message: "Failed to fetch".to_string(),
        };

        assert_eq!(err.message(), "Failed to fetch");
    }

    #[test]
    fn test_graphql_messages_joined() {
        let err = QueryError::Graphql {
            errors: vec![graphql_error("first"), graphql_error("second")],
        };

        assert_eq!(err.message(), "first\nsecond");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: QueryError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();

        assert!(matches!(err, QueryError::Json { .. }));
        assert!(!err.message().is_empty());
    }
}

use crate::error::QueryError;

/// Tri-state of one query execution.
///
/// Starts `Pending` and moves to `Failed` or `Succeeded` exactly once. There is
/// no way back to `Pending`: queries are never retried or re-fetched.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    /// Request in flight (or never answered).
    Pending,
    /// Network or GraphQL failure, with the user-facing message.
    Failed(String),
    /// Decoded response data.
    Succeeded(T),
}

impl<T> From<Result<T, QueryError>> for QueryState<T> {
    fn from(outcome: Result<T, QueryError>) -> Self {
        match outcome {
            Ok(data) => Self::Succeeded(data),
            Err(err) => Self::Failed(err.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ok() {
        let state = QueryState::from(Ok::<_, QueryError>(vec![1, 2]));

        assert_eq!(state, QueryState::Succeeded(vec![1, 2]));
    }

    #[test]
    fn test_from_err_keeps_message() {
        let state = QueryState::<()>::from(Err(QueryError::Network {
            message: "connection refused".to_string(),
        }));

        assert_eq!(state, QueryState::Failed("connection refused".to_string()));
    }
}

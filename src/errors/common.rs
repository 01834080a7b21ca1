//! GraphQL conversion for domain errors
//!
//! ```rust,ignore
//! use dynamic_consent::errors::{ConsentError, ToGraphQLError};
//!
//! let err = ConsentError::NotFound("5f0c".to_string());
//! let graphql_err = err.to_graphql_error();
//! ```

#[cfg(feature = "graphql")]
use async_graphql::{Error as GraphQLError, ErrorExtensions};

#[cfg(feature = "graphql")]
use super::ConsentError;

/// Convert domain errors to GraphQL errors with error codes
#[cfg(feature = "graphql")]
pub trait ToGraphQLError {
    /// Convert to GraphQL error with structured extensions
    fn to_graphql_error(&self) -> GraphQLError;
}

#[cfg(feature = "graphql")]
impl ToGraphQLError for ConsentError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        // Storage failures are logged here and not echoed to the client
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        };

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            match self {
                ConsentError::NotFound(id) => {
                    e.set("userId", id.as_str());
                }
                ConsentError::ValueNotFound { list, value } => {
                    e.set("list", list.to_string());
                    e.set("value", value.as_str());
                }
                ConsentError::InvalidArgument { field, .. } => {
                    e.set("field", field.as_str());
                }
                _ => {}
            }
        })
    }
}

//! Domain error types for the consent service
//!
//! Every operation on a user record reports failures through [`ConsentError`],
//! so the GraphQL layer and the CLI see the same error kinds.
//!
//! # Error Kinds
//!
//! - **NotFound**: the referenced user id does not exist
//! - **ValueNotFound**: a revoke named an entry missing from the consent list
//! - **InvalidArgument**: an argument could not be interpreted (date of birth)
//! - **Database** / **Serialization**: store failures
//!
//! # GraphQL Integration
//!
//! When the `graphql` feature is enabled, errors convert into GraphQL errors
//! carrying a `code` extension through the `ToGraphQLError` trait.
//!
//! ```rust
//! use dynamic_consent::errors::ConsentError;
//!
//! let err = ConsentError::NotFound("5f0c".to_string());
//! assert!(err.is_not_found());
//! assert_eq!(err.error_code(), "NOT_FOUND");
//! ```

pub mod common;
pub mod consent;

pub use consent::ConsentError;

#[cfg(feature = "graphql")]
pub use common::ToGraphQLError;

/// Result type alias for consent operations
pub type ConsentResult<T> = Result<T, ConsentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consent_result_alias() {
        let result: ConsentResult<()> = Err(ConsentError::NotFound("missing".to_string()));
        assert!(result.is_err());
    }
}

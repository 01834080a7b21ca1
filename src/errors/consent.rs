//! Errors raised while loading and editing user records

use thiserror::Error;

use crate::user_record::ConsentList;

#[derive(Error, Debug)]
pub enum ConsentError {
    /// No user with this id exists in the store
    #[error("User '{0}' not found")]
    NotFound(String),

    /// A revoke named an entry that is not in the list
    #[error("Value '{value}' not found in {list}")]
    ValueNotFound {
        /// List the removal targeted
        list: ConsentList,
        /// The missing entry, rendered as text
        value: String,
    },

    /// An argument could not be interpreted
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A stored consent list could not be decoded or encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConsentError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        ConsentError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConsentError::NotFound(_))
    }

    /// Check if this is a client error (400-series)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ConsentError::NotFound(_)
                | ConsentError::ValueNotFound { .. }
                | ConsentError::InvalidArgument { .. }
        )
    }

    /// Get error code for GraphQL/API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsentError::NotFound(_) => "NOT_FOUND",
            ConsentError::ValueNotFound { .. } => "VALUE_NOT_FOUND",
            ConsentError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            ConsentError::Database(_) => "DATABASE_ERROR",
            ConsentError::Serialization(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ConsentError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "User 'abc' not found");
        assert!(err.is_not_found());
        assert!(err.is_client_error());
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_value_not_found_error() {
        let err = ConsentError::ValueNotFound {
            list: ConsentList::Orgs,
            value: "2".to_string(),
        };
        assert_eq!(err.to_string(), "Value '2' not found in consent_orgs");
        assert!(!err.is_not_found());
        assert_eq!(err.error_code(), "VALUE_NOT_FOUND");
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = ConsentError::invalid_argument("date_of_birth", "not a number");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'date_of_birth': not a number"
        );
        assert!(err.is_client_error());
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_database_error_is_not_client_error() {
        let err = ConsentError::from(sea_orm::DbErr::Custom("boom".to_string()));
        assert!(!err.is_client_error());
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}

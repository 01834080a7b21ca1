use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::consent_record::ConsentRecord;

#[derive(SimpleObject, Clone, Debug)]
pub struct Consent {
    pub id: ID,
    pub name: String,
    pub purpose: String,
    /// Whether data shared under this consent may be used commercially
    pub commercial: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ConsentRecord> for Consent {
    fn from(record: ConsentRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            name: record.name,
            purpose: record.purpose,
            commercial: record.commercial,
            created_at: record.created_at,
        }
    }
}

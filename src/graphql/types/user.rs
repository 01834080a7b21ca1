use async_graphql::*;
use chrono::{DateTime, NaiveDate, Utc};

use crate::user_record::UserRecord;

#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub consent_orgs: Vec<i32>,
    pub consent_purposes: Vec<String>,
    pub consent_hpos: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: ID(record.id),
            email: record.email,
            first_name: record.first_name,
            last_name: record.last_name,
            date_of_birth: record.date_of_birth,
            consent_orgs: record.consent_orgs,
            consent_purposes: record.consent_purposes,
            consent_hpos: record.consent_hpos,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Result of every user mutation: the record after the edit
#[derive(SimpleObject, Clone, Debug)]
pub struct UserPayload {
    pub user: User,
}

impl From<UserRecord> for UserPayload {
    fn from(record: UserRecord) -> Self {
        Self {
            user: User::from(record),
        }
    }
}

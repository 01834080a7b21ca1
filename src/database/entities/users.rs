use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::user_record::UserRecord;

/// One row per user. Consent lists are stored as JSON arrays in text columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: ChronoDate,
    pub consent_orgs: String,
    pub consent_purposes: String,
    pub consent_hpos: String,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for UserRecord {
    type Error = serde_json::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            consent_orgs: serde_json::from_str(&model.consent_orgs)?,
            consent_purposes: serde_json::from_str(&model.consent_purposes)?,
            consent_hpos: serde_json::from_str(&model.consent_hpos)?,
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl ActiveModel {
    /// Every column set from the record, ready for insert or full replace.
    pub fn from_record(record: &UserRecord) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: Set(record.id.clone()),
            email: Set(record.email.clone()),
            first_name: Set(record.first_name.clone()),
            last_name: Set(record.last_name.clone()),
            date_of_birth: Set(record.date_of_birth),
            consent_orgs: Set(serde_json::to_string(&record.consent_orgs)?),
            consent_purposes: Set(serde_json::to_string(&record.consent_purposes)?),
            consent_hpos: Set(serde_json::to_string(&record.consent_hpos)?),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
        })
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consent_record::ConsentRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "consents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub purpose: String,
    pub commercial: bool,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ConsentRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            purpose: model.purpose,
            commercial: model.commercial,
            created_at: model.created_at,
        }
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use crate::consent_record::{ConsentRecord, NewConsent};
use crate::database::entities::consents;
use crate::errors::ConsentResult;

/// Read and extend the consent catalogue
#[async_trait]
pub trait ConsentRepository: Send + Sync {
    /// Every catalogue entry in id order
    async fn list(&self) -> ConsentResult<Vec<ConsentRecord>>;

    async fn insert(&self, consent: NewConsent) -> ConsentResult<ConsentRecord>;
}

#[derive(Clone)]
pub struct SeaOrmConsentRepository {
    db: DatabaseConnection,
}

impl SeaOrmConsentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConsentRepository for SeaOrmConsentRepository {
    async fn list(&self) -> ConsentResult<Vec<ConsentRecord>> {
        let models = consents::Entity::find()
            .order_by_asc(consents::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(ConsentRecord::from).collect())
    }

    async fn insert(&self, consent: NewConsent) -> ConsentResult<ConsentRecord> {
        let model = consents::ActiveModel {
            name: Set(consent.name),
            purpose: Set(consent.purpose),
            commercial: Set(consent.commercial),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        debug!("Inserted consent {} ({})", model.id, model.name);

        Ok(ConsentRecord::from(model))
    }
}

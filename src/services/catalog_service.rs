use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::consent_record::{ConsentRecord, NewConsent};
use crate::database::{ConsentRepository, SeaOrmConsentRepository};
use crate::errors::ConsentResult;

/// The catalogue of consents that user lists refer to
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn ConsentRepository>,
}

impl CatalogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmConsentRepository::new(db)))
    }

    pub fn with_repository(repository: Arc<dyn ConsentRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_consents(&self) -> ConsentResult<Vec<ConsentRecord>> {
        self.repository.list().await
    }

    pub async fn create_consent(&self, consent: NewConsent) -> ConsentResult<ConsentRecord> {
        let consent = self.repository.insert(consent.normalized()?).await?;

        info!("Created consent {} ({})", consent.id, consent.name);
        Ok(consent)
    }
}

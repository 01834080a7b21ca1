use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::{CatalogService, ConsentService};

#[derive(Clone)]
pub struct GraphQLContext {
    pub consent_service: Arc<ConsentService>,
    pub catalog_service: Arc<CatalogService>,
}

impl GraphQLContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_services(
            Arc::new(ConsentService::new(db.clone())),
            Arc::new(CatalogService::new(db)),
        )
    }

    pub fn with_services(
        consent_service: Arc<ConsentService>,
        catalog_service: Arc<CatalogService>,
    ) -> Self {
        Self {
            consent_service,
            catalog_service,
        }
    }
}

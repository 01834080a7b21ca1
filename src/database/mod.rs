pub mod connection;
pub mod consent_repository;
pub mod entities;
pub mod migrations;
pub mod user_repository;

pub use connection::*;
pub use consent_repository::{ConsentRepository, SeaOrmConsentRepository};
pub use entities::*;
pub use user_repository::{SeaOrmUserRepository, UserRepository};

use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Bring the schema up to date
pub async fn setup_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    migrations::Migrator::up(db, None).await
}

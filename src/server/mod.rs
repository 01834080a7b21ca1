pub mod app;
pub mod handlers;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateDirection {
    Up,
    Down,
    Fresh,
}

use crate::database::{connection::*, migrations::Migrator};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use tracing::info;

/// GraphQL fields served at `/graphql`, with the startup log description
pub const GRAPHQL_OPERATIONS: &[(&str, &str)] = &[
    ("user", "one user by id"),
    ("users", "all users, oldest first"),
    ("consents", "the consent catalogue"),
    ("createUser", "register a user"),
    ("updateUser", "change email or names"),
    ("deleteUser", "remove a user"),
    ("addConsentOrgs", "grant organizations"),
    ("revokeConsentOrgs", "withdraw organizations"),
    ("addConsentPurposes", "grant purposes"),
    ("revokeConsentPurposes", "withdraw purposes"),
    ("addConsentHpos", "grant health provider organizations"),
    ("revokeConsentHpos", "withdraw health provider organizations"),
    ("createConsent", "add a catalogue entry"),
];

pub async fn start_server(port: u16, database_path: &str, cors_origin: Option<&str>) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    apply_pending_migrations(&db).await?;

    let app = app::create_app(db, cors_origin).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Consent service listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn apply_pending_migrations(db: &DatabaseConnection) -> Result<()> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        info!("Database schema is up to date");
        return Ok(());
    }

    for migration in &pending {
        info!("Applying migration {}", migration.name());
    }
    Migrator::up(db, None).await?;

    Ok(())
}

fn log_routes() {
    info!("  GET  /health   - service status");

    #[cfg(feature = "graphql")]
    {
        info!("  GET  /graphql  - playground");
        info!("  POST /graphql  - queries and mutations:");
        for (operation, description) in GRAPHQL_OPERATIONS {
            info!("         {:<22} {}", operation, description);
        }
    }
}

pub async fn migrate_database(database_path: &str, direction: MigrateDirection) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    match direction {
        MigrateDirection::Up => apply_pending_migrations(&db).await?,
        MigrateDirection::Down => {
            info!("Rolling back the users and consents tables in {}", database_path);
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Recreating the users and consents tables in {}", database_path);
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::{consents, users};
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_apply_pending_migrations_is_idempotent() {
        let db = establish_connection(&get_database_url(Some(":memory:")))
            .await
            .unwrap();

        apply_pending_migrations(&db).await.unwrap();
        assert!(Migrator::get_pending_migrations(&db)
            .await
            .unwrap()
            .is_empty());
        apply_pending_migrations(&db).await.unwrap();

        assert!(users::Entity::find().all(&db).await.unwrap().is_empty());
        assert!(consents::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_migrate_fresh_empties_tables() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        migrate_database(&path, MigrateDirection::Up).await.unwrap();
        let db = establish_connection(&get_database_url(Some(&path)))
            .await
            .unwrap();
        crate::services::CatalogService::new(db.clone())
            .create_consent(crate::consent_record::NewConsent {
                name: "Research".to_string(),
                purpose: String::new(),
                commercial: false,
            })
            .await
            .unwrap();

        migrate_database(&path, MigrateDirection::Fresh)
            .await
            .unwrap();
        assert!(consents::Entity::find().all(&db).await.unwrap().is_empty());
    }
}

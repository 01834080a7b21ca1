use sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector,
};
use std::time::Duration;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    if database_url.contains(":memory:") {
        return establish_in_memory_connection(database_url).await;
    }

    let mut opt = ConnectOptions::new(database_url);
    // SQLite serialises writes, so a small pool is enough
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(3600))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    Database::connect(opt).await
}

/// An in-memory database lives and dies with its one connection, so the
/// pool must never reap it: no idle timeout and no lifetime.
async fn establish_in_memory_connection(
    database_url: &str,
) -> Result<DatabaseConnection, DbErr> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await
        .map_err(|e| DbErr::Conn(RuntimeErr::SqlxError(e)))?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

pub fn get_database_url(database_path: Option<&str>) -> String {
    match database_path {
        Some(":memory:") => "sqlite::memory:".to_string(),
        Some(path) => format!("sqlite://{}?mode=rwc", path),
        None => "sqlite://consent.db?mode=rwc".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_database_url() {
        assert_eq!(get_database_url(Some(":memory:")), "sqlite::memory:");
        assert_eq!(
            get_database_url(Some("/tmp/users.db")),
            "sqlite:///tmp/users.db?mode=rwc"
        );
        assert_eq!(get_database_url(None), "sqlite://consent.db?mode=rwc");
    }

    #[tokio::test]
    async fn test_in_memory_connection_keeps_schema() {
        let db = establish_connection(&get_database_url(Some(":memory:")))
            .await
            .unwrap();
        crate::database::setup_database(&db).await.unwrap();

        use sea_orm::EntityTrait;
        let users = crate::database::entities::users::Entity::find()
            .all(&db)
            .await
            .unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_in_memory_pool_never_reaps_its_connection() {
        let db = establish_connection(&get_database_url(Some(":memory:")))
            .await
            .unwrap();

        let options = db.get_sqlite_connection_pool().options();
        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }
}

//! Database functionality tests
//!
//! Migrations, the users entity and the repository contract

use anyhow::Result;
use chrono::NaiveDate;
use dynamic_consent::consent_record::NewConsent;
use dynamic_consent::database::entities::{consents, users};
use dynamic_consent::database::{
    setup_database, ConsentRepository, SeaOrmConsentRepository, SeaOrmUserRepository,
    UserRepository,
};
use dynamic_consent::user_record::NewUser;
use sea_orm::{Database, DatabaseConnection, EntityTrait};
use tempfile::NamedTempFile;

/// Create a test database connection with migrations
async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

fn new_user() -> NewUser {
    NewUser {
        email: "grace@example.org".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1906, 12, 9).unwrap(),
    }
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let users = users::Entity::find().all(&db).await?;
    assert_eq!(users.len(), 0);

    let consents = consents::Entity::find().all(&db).await?;
    assert_eq!(consents.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_consent_lists_are_stored_as_json_arrays() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let repository = SeaOrmUserRepository::new(db.clone());

    let mut user = repository.insert(new_user()).await?;
    user.consent_orgs = vec![10, 20, 10];
    user.consent_hpos = vec!["hpo-a".to_string()];
    repository.save(&user).await?;

    let row = users::Entity::find_by_id(user.id.clone())
        .one(&db)
        .await?
        .expect("row exists");
    assert_eq!(row.consent_orgs, "[10,20,10]");
    assert_eq!(row.consent_purposes, "[]");
    assert_eq!(row.consent_hpos, r#"["hpo-a"]"#);
    assert_eq!(row.date_of_birth, NaiveDate::from_ymd_opt(1906, 12, 9).unwrap());

    Ok(())
}

#[tokio::test]
async fn test_repository_round_trip_and_delete() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let repository = SeaOrmUserRepository::new(db);

    let created = repository.insert(new_user()).await?;
    let loaded = repository.get(&created.id).await?;
    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.email, "grace@example.org");

    repository.delete(&loaded).await?;
    assert!(repository.find(&created.id).await?.is_none());
    assert!(repository.get(&created.id).await.unwrap_err().is_not_found());
    assert!(repository.delete(&loaded).await.unwrap_err().is_not_found());

    Ok(())
}

#[tokio::test]
async fn test_save_after_concurrent_delete_is_not_found() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let repository = SeaOrmUserRepository::new(db);

    let mut user = repository.insert(new_user()).await?;
    repository.delete(&user).await?;

    user.consent_orgs.push(1);
    let err = repository.save(&user).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(repository.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_last_write_wins_between_stale_copies() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let repository = SeaOrmUserRepository::new(db);

    let created = repository.insert(new_user()).await?;
    let mut first = repository.get(&created.id).await?;
    let mut second = repository.get(&created.id).await?;

    first.consent_orgs.push(1);
    repository.save(&first).await?;
    second.consent_orgs.push(2);
    repository.save(&second).await?;

    let stored = repository.get(&created.id).await?;
    assert_eq!(stored.consent_orgs, vec![2]);

    Ok(())
}

#[tokio::test]
async fn test_consent_repository_assigns_ids() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let repository = SeaOrmConsentRepository::new(db.clone());

    let first = repository
        .insert(NewConsent {
            name: "Research".to_string(),
            purpose: "Academic use".to_string(),
            commercial: false,
        })
        .await?;
    let second = repository
        .insert(NewConsent {
            name: "Marketing".to_string(),
            purpose: "Targeted offers".to_string(),
            commercial: true,
        })
        .await?;
    assert!(second.id > first.id);

    let row = consents::Entity::find_by_id(second.id)
        .one(&db)
        .await?
        .expect("row exists");
    assert!(row.commercial);

    let listed: Vec<i32> = repository.list().await?.iter().map(|c| c.id).collect();
    assert_eq!(listed, vec![first.id, second.id]);

    Ok(())
}

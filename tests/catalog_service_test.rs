use dynamic_consent::consent_record::NewConsent;
use dynamic_consent::database::migrations::Migrator;
use dynamic_consent::services::CatalogService;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn consent(name: &str, purpose: &str, commercial: bool) -> NewConsent {
    NewConsent {
        name: name.to_string(),
        purpose: purpose.to_string(),
        commercial,
    }
}

#[tokio::test]
async fn test_empty_catalogue() {
    let service = CatalogService::new(setup_db().await);

    assert!(service.list_consents().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_consents_in_creation_order() {
    let service = CatalogService::new(setup_db().await);

    let research = service
        .create_consent(consent("Research", "Academic genomics study", false))
        .await
        .unwrap();
    let insurer = service
        .create_consent(consent(" Insurer ", "Premium modelling", true))
        .await
        .unwrap();
    assert!(insurer.id > research.id);
    assert_eq!(insurer.name, "Insurer");

    let consents = service.list_consents().await.unwrap();
    let names: Vec<_> = consents.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Research", "Insurer"]);
    assert!(!consents[0].commercial);
    assert!(consents[1].commercial);
    assert_eq!(consents[0].purpose, "Academic genomics study");
}

#[tokio::test]
async fn test_create_consent_rejects_blank_name() {
    let service = CatalogService::new(setup_db().await);

    let err = service
        .create_consent(consent("  ", "Anything", false))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    assert!(service.list_consents().await.unwrap().is_empty());
}

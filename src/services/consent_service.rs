use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{debug, info, warn};

use crate::database::{SeaOrmUserRepository, UserRepository};
use crate::errors::ConsentResult;
use crate::user_record::{
    append_entries, date_of_birth_from_millis, remove_entries, ConsentList, NewUser, UserRecord,
    UserUpdate,
};

/// Arguments of `create_user` as they arrive from the client
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Epoch milliseconds, as a decimal string
    pub date_of_birth: String,
}

/// User and consent-list operations.
///
/// Every edit loads one record, changes it in memory and writes it back
/// once. A failing batch returns before the write, so nothing from that
/// call is persisted.
#[derive(Clone)]
pub struct ConsentService {
    repository: Arc<dyn UserRepository>,
}

impl ConsentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmUserRepository::new(db)))
    }

    pub fn with_repository(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_user(&self, id: &str) -> ConsentResult<Option<UserRecord>> {
        self.repository.find(id).await
    }

    pub async fn list_users(&self) -> ConsentResult<Vec<UserRecord>> {
        self.repository.list().await
    }

    pub async fn create_user(&self, input: CreateUserInput) -> ConsentResult<UserRecord> {
        let date_of_birth = date_of_birth_from_millis(&input.date_of_birth)?;

        let user = self
            .repository
            .insert(NewUser {
                email: input.email,
                first_name: input.first_name,
                last_name: input.last_name,
                date_of_birth,
            })
            .await?;

        info!("Created user {}", user.id);
        Ok(user)
    }

    pub async fn update_user(&self, id: &str, update: UserUpdate) -> ConsentResult<UserRecord> {
        self.edit_user(id, |user| {
            user.apply_update(update);
            Ok(())
        })
        .await
    }

    pub async fn delete_user(&self, id: &str) -> ConsentResult<UserRecord> {
        let user = self.repository.get(id).await?;
        self.repository.delete(&user).await?;

        info!("Deleted user {}", user.id);
        Ok(user)
    }

    pub async fn add_consent_orgs(
        &self,
        user_id: &str,
        org_ids: &[i32],
    ) -> ConsentResult<UserRecord> {
        debug!("Adding {} consent orgs to user {}", org_ids.len(), user_id);
        self.edit_user(user_id, |user| {
            append_entries(&mut user.consent_orgs, org_ids);
            Ok(())
        })
        .await
    }

    pub async fn revoke_consent_orgs(
        &self,
        user_id: &str,
        org_ids: &[i32],
    ) -> ConsentResult<UserRecord> {
        debug!("Revoking {} consent orgs from user {}", org_ids.len(), user_id);
        self.edit_user(user_id, |user| {
            remove_entries(&mut user.consent_orgs, org_ids, ConsentList::Orgs)
        })
        .await
    }

    pub async fn add_consent_purposes(
        &self,
        user_id: &str,
        purpose_ids: &[String],
    ) -> ConsentResult<UserRecord> {
        debug!("Adding {} consent purposes to user {}", purpose_ids.len(), user_id);
        self.edit_user(user_id, |user| {
            append_entries(&mut user.consent_purposes, purpose_ids);
            Ok(())
        })
        .await
    }

    pub async fn revoke_consent_purposes(
        &self,
        user_id: &str,
        purpose_ids: &[String],
    ) -> ConsentResult<UserRecord> {
        debug!("Revoking {} consent purposes from user {}", purpose_ids.len(), user_id);
        self.edit_user(user_id, |user| {
            remove_entries(&mut user.consent_purposes, purpose_ids, ConsentList::Purposes)
        })
        .await
    }

    pub async fn add_consent_hpos(
        &self,
        user_id: &str,
        hpo_ids: &[String],
    ) -> ConsentResult<UserRecord> {
        debug!("Adding {} consent HPOs to user {}", hpo_ids.len(), user_id);
        self.edit_user(user_id, |user| {
            append_entries(&mut user.consent_hpos, hpo_ids);
            Ok(())
        })
        .await
    }

    pub async fn revoke_consent_hpos(
        &self,
        user_id: &str,
        hpo_ids: &[String],
    ) -> ConsentResult<UserRecord> {
        debug!("Revoking {} consent HPOs from user {}", hpo_ids.len(), user_id);
        self.edit_user(user_id, |user| {
            remove_entries(&mut user.consent_hpos, hpo_ids, ConsentList::Hpos)
        })
        .await
    }

    /// Load, edit in memory, save once
    async fn edit_user<F>(&self, id: &str, edit: F) -> ConsentResult<UserRecord>
    where
        F: FnOnce(&mut UserRecord) -> ConsentResult<()>,
    {
        let mut user = self.repository.get(id).await?;

        if let Err(e) = edit(&mut user) {
            warn!("Edit of user {} rejected: {}", id, e);
            return Err(e);
        }

        self.repository.save(&user).await
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use tracing::debug;
use uuid::Uuid;

use crate::database::entities::users;
use crate::errors::{ConsentError, ConsentResult};
use crate::user_record::{NewUser, UserRecord};

/// Persistence port for user records.
///
/// Each call is atomic on its own; nothing spans a read and a later save.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, id: &str) -> ConsentResult<Option<UserRecord>>;

    async fn list(&self) -> ConsentResult<Vec<UserRecord>>;

    /// Store a new user and assign its id
    async fn insert(&self, user: NewUser) -> ConsentResult<UserRecord>;

    /// Replace the stored record with `user`
    async fn save(&self, user: &UserRecord) -> ConsentResult<UserRecord>;

    async fn delete(&self, user: &UserRecord) -> ConsentResult<()>;

    async fn get(&self, id: &str) -> ConsentResult<UserRecord> {
        self.find(id)
            .await?
            .ok_or_else(|| ConsentError::NotFound(id.to_string()))
    }
}

#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find(&self, id: &str) -> ConsentResult<Option<UserRecord>> {
        let model = users::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(model.map(UserRecord::try_from).transpose()?)
    }

    async fn list(&self) -> ConsentResult<Vec<UserRecord>> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await?;

        models
            .into_iter()
            .map(|model| UserRecord::try_from(model).map_err(ConsentError::from))
            .collect()
    }

    async fn insert(&self, user: NewUser) -> ConsentResult<UserRecord> {
        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            date_of_birth: user.date_of_birth,
            consent_orgs: Vec::new(),
            consent_purposes: Vec::new(),
            consent_hpos: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let model = users::ActiveModel::from_record(&record)?
            .insert(&self.db)
            .await?;
        debug!("Inserted user {}", model.id);

        Ok(UserRecord::try_from(model)?)
    }

    async fn save(&self, user: &UserRecord) -> ConsentResult<UserRecord> {
        let mut active = users::ActiveModel::from_record(user)?;
        active.updated_at = sea_orm::Set(Utc::now());

        let model = active.update(&self.db).await.map_err(|e| match e {
            // The row vanished between load and save
            DbErr::RecordNotUpdated => ConsentError::NotFound(user.id.clone()),
            other => ConsentError::Database(other),
        })?;
        debug!("Saved user {}", model.id);

        Ok(UserRecord::try_from(model)?)
    }

    async fn delete(&self, user: &UserRecord) -> ConsentResult<()> {
        let result = users::Entity::delete_by_id(user.id.clone())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ConsentError::NotFound(user.id.clone()));
        }
        debug!("Deleted user {}", user.id);

        Ok(())
    }
}

use crate::{
    abstract_trait::UserCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateUserData, UpdateProfileRequest},
    errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, data: &CreateUserData) -> Result<User, RepositoryError> {
        info!("📝 Creating user: {}", data.username);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, phone, password, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING user_id, username, email, phone, password, role, created_at, updated_at
            "#,
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.password)
        .bind(&data.role)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create user: {:?}", e);
            RepositoryError::from_sqlx(e, "user")
        })?;

        Ok(user)
    }

    async fn update_profile(
        &self,
        user_id: i32,
        req: &UpdateProfileRequest,
    ) -> Result<User, RepositoryError> {
        info!("✏️ Updating profile for user: {}", user_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2,
                email = $3,
                phone = $4,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING user_id, username, email, phone, password, role, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&req.username)
        .bind(&req.email)
        .bind(&req.phone)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update profile: {:?}", e);
            RepositoryError::from_sqlx(e, "user")
        })?;

        user.ok_or(RepositoryError::NotFound)
    }

    async fn update_password(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<User, RepositoryError> {
        info!("🔑 Updating password for user: {}", user_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password = $2,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING user_id, username, email, phone, password, role, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&password_hash)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update password: {:?}", e);
            RepositoryError::from(e)
        })?;

        user.ok_or(RepositoryError::NotFound)
    }
}

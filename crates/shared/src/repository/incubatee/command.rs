use crate::{
    abstract_trait::IncubateeCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateIncubateeRequest, UpdateIncubateeRequest},
    errors::RepositoryError,
    model::Incubatee,
};
use async_trait::async_trait;
use tracing::{error, info};

const INCUBATEE_COLUMNS: &str = "incubatee_id, first_name, middle_name, last_name, \
     company_name, email, phone, batch, is_approved, logo_path, created_at";

#[derive(Clone)]
pub struct IncubateeCommandRepository {
    db: ConnectionPool,
}

impl IncubateeCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IncubateeCommandRepositoryTrait for IncubateeCommandRepository {
    async fn create(
        &self,
        req: &CreateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<Incubatee, RepositoryError> {
        info!("📝 Creating incubatee: {}", req.company_name);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let incubatee = sqlx::query_as::<_, Incubatee>(&format!(
            r#"
            INSERT INTO incubatees (first_name, middle_name, last_name, company_name,
                                    email, phone, batch, logo_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {INCUBATEE_COLUMNS}
            "#
        ))
        .bind(&req.first_name)
        .bind(&req.middle_name)
        .bind(&req.last_name)
        .bind(&req.company_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.batch)
        .bind(&logo_path)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create incubatee: {:?}", e);
            RepositoryError::from_sqlx(e, "incubatee")
        })?;

        Ok(incubatee)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<Incubatee, RepositoryError> {
        info!("✏️ Updating incubatee: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // COALESCE keeps the stored value for every field the form left out
        let incubatee = sqlx::query_as::<_, Incubatee>(&format!(
            r#"
            UPDATE incubatees
            SET first_name   = COALESCE($2, first_name),
                middle_name  = COALESCE($3, middle_name),
                last_name    = COALESCE($4, last_name),
                company_name = COALESCE($5, company_name),
                email        = COALESCE($6, email),
                phone        = COALESCE($7, phone),
                batch        = COALESCE($8, batch),
                logo_path    = COALESCE($9, logo_path)
            WHERE incubatee_id = $1
            RETURNING {INCUBATEE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.middle_name)
        .bind(&req.last_name)
        .bind(&req.company_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.batch)
        .bind(&logo_path)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update incubatee {}: {:?}", id, e);
            RepositoryError::from_sqlx(e, "incubatee")
        })?;

        incubatee.ok_or(RepositoryError::NotFound)
    }

    async fn toggle_approval(&self, id: i32) -> Result<Incubatee, RepositoryError> {
        info!("🔁 Toggling approval for incubatee: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let incubatee = sqlx::query_as::<_, Incubatee>(&format!(
            r#"
            UPDATE incubatees
            SET is_approved = NOT is_approved
            WHERE incubatee_id = $1
            RETURNING {INCUBATEE_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to toggle approval for incubatee {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        incubatee.ok_or(RepositoryError::NotFound)
    }
}

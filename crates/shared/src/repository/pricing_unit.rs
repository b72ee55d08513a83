use crate::{
    abstract_trait::PricingUnitRepositoryTrait, config::ConnectionPool,
    domain::requests::CreatePricingUnitRequest, errors::RepositoryError, model::PricingUnit,
};
use async_trait::async_trait;
use tracing::{error, info};

const UNIT_COLUMNS: &str = "unit_id, unit_name, unit_description";

#[derive(Clone)]
pub struct PricingUnitRepository {
    db: ConnectionPool,
}

impl PricingUnitRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PricingUnitRepositoryTrait for PricingUnitRepository {
    async fn find_all(&self) -> Result<Vec<PricingUnit>, RepositoryError> {
        info!("🔍 Fetching all pricing units");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, PricingUnit>(&format!(
            "SELECT {UNIT_COLUMNS} FROM pricing_units ORDER BY unit_name ASC"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch pricing units: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_name(&self, name: String) -> Result<Option<PricingUnit>, RepositoryError> {
        info!("🔍 Fetching pricing unit by name: {}", name);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, PricingUnit>(&format!(
            "SELECT {UNIT_COLUMNS} FROM pricing_units WHERE LOWER(unit_name) = LOWER($1)"
        ))
        .bind(&name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn create(
        &self,
        req: &CreatePricingUnitRequest,
    ) -> Result<PricingUnit, RepositoryError> {
        info!("📝 Creating pricing unit: {}", req.unit_name);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let unit = sqlx::query_as::<_, PricingUnit>(&format!(
            r#"
            INSERT INTO pricing_units (unit_name, unit_description)
            VALUES ($1, $2)
            RETURNING {UNIT_COLUMNS}
            "#
        ))
        .bind(&req.unit_name)
        .bind(&req.unit_description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create pricing unit: {:?}", e);
            RepositoryError::from_sqlx(e, "pricing unit")
        })?;

        Ok(unit)
    }
}

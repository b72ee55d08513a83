use crate::{
    abstract_trait::{
        DynIncubateeCommandRepository, DynIncubateeQueryRepository, IncubateeServiceTrait,
    },
    domain::{
        requests::{CreateIncubateeRequest, UpdateIncubateeRequest},
        responses::{
            ApiResponse, ApprovalPayload, IncubateePayload, IncubateeStatsListPayload,
            IncubateeStatsResponse, IncubateeSummariesPayload, IncubateeSummaryResponse,
            LogoPayload,
        },
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct IncubateeService {
    query: DynIncubateeQueryRepository,
    command: DynIncubateeCommandRepository,
}

impl IncubateeService {
    pub fn new(query: DynIncubateeQueryRepository, command: DynIncubateeCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl IncubateeServiceTrait for IncubateeService {
    async fn get_summaries(&self) -> Result<ApiResponse<IncubateeSummariesPayload>, ServiceError> {
        info!("🔍 Listing incubatee summaries");

        let rows = self.query.find_all().await?;
        let incubatees = rows.into_iter().map(IncubateeSummaryResponse::from).collect();

        Ok(ApiResponse::ok(IncubateeSummariesPayload { incubatees }))
    }

    async fn get_list_with_stats(
        &self,
    ) -> Result<ApiResponse<IncubateeStatsListPayload>, ServiceError> {
        info!("📊 Listing incubatees with stats");

        let rows = self.query.find_with_stats().await?;
        let incubatees = rows.into_iter().map(IncubateeStatsResponse::from).collect();

        Ok(ApiResponse::ok(IncubateeStatsListPayload { incubatees }))
    }

    async fn create(
        &self,
        req: &CreateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<ApiResponse<IncubateePayload>, ServiceError> {
        info!("📝 Creating incubatee: {}", req.company_name);

        req.validate().map_err(ServiceError::from_validation)?;

        if self.query.find_by_email(req.email.clone()).await?.is_some() {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "An incubatee with this email already exists".into(),
            )));
        }

        let incubatee = self.command.create(req, logo_path).await?;

        Ok(ApiResponse::with_message(
            "Incubatee added successfully",
            IncubateePayload {
                incubatee: incubatee.into(),
            },
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<ApiResponse<IncubateePayload>, ServiceError> {
        info!("✏️ Updating incubatee: {}", id);

        req.validate().map_err(ServiceError::from_validation)?;

        if let Some(email) = &req.email
            && let Some(existing) = self.query.find_by_email(email.clone()).await?
            && existing.incubatee_id != id
        {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "An incubatee with this email already exists".into(),
            )));
        }

        let incubatee = self.command.update(id, req, logo_path).await?;

        Ok(ApiResponse::with_message(
            "Incubatee updated successfully",
            IncubateePayload {
                incubatee: incubatee.into(),
            },
        ))
    }

    async fn toggle_approval(&self, id: i32) -> Result<ApiResponse<ApprovalPayload>, ServiceError> {
        info!("🔁 Toggling approval for incubatee: {}", id);

        let incubatee = self.command.toggle_approval(id).await?;

        Ok(ApiResponse::with_message(
            if incubatee.is_approved {
                "Incubatee approved"
            } else {
                "Incubatee approval revoked"
            },
            ApprovalPayload {
                is_approved: incubatee.is_approved,
            },
        ))
    }

    async fn get_logo(&self, id: i32) -> Result<ApiResponse<LogoPayload>, ServiceError> {
        info!("🔍 Fetching logo for incubatee: {}", id);

        let incubatee = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::ok(LogoPayload {
            logo_path: incubatee.logo_path,
        }))
    }

    async fn get_details(&self, id: i32) -> Result<ApiResponse<IncubateePayload>, ServiceError> {
        info!("🆔 Fetching incubatee details: {}", id);

        let incubatee = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::ok(IncubateePayload {
            incubatee: incubatee.into(),
        }))
    }
}

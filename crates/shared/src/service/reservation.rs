use crate::{
    abstract_trait::{
        DynProductQueryRepository, DynReservationCommandRepository,
        DynReservationQueryRepository, ReservationServiceTrait,
    },
    domain::{
        requests::{
            CheckOverdueRequest, CreateReservationRequest, UpdateReservationStatusRequest,
        },
        responses::{
            ApiResponse, ApprovedCountPayload, RejectedCountPayload, ReservationPayload,
            ReservationResponse, ReservationsPayload, SalesLineResponse, SalesReportPayload,
            SalesReportResponse, is_overdue,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::{STATUS_APPROVED, STATUS_COMPLETED, STATUS_PENDING, STATUS_REJECTED, can_transition},
    utils::{csv_row, format_money},
};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use tracing::info;
use validator::Validate;

pub const CANCELLED_BY_CUSTOMER: &str = "Cancelled by customer";
pub const AUTO_CANCEL_REASON: &str = "Auto-cancelled: pickup window expired";
const DEFAULT_REJECT_REASON: &str = "Rejected by admin";

#[derive(Clone)]
pub struct ReservationService {
    query: DynReservationQueryRepository,
    command: DynReservationCommandRepository,
    product_query: DynProductQueryRepository,
    pickup_timeout_ms: i64,
}

impl ReservationService {
    pub fn new(
        query: DynReservationQueryRepository,
        command: DynReservationCommandRepository,
        product_query: DynProductQueryRepository,
        pickup_timeout_ms: i64,
    ) -> Self {
        Self {
            query,
            command,
            product_query,
            pickup_timeout_ms,
        }
    }

    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    async fn detail_response(
        &self,
        id: i32,
        message: impl Into<String>,
    ) -> Result<ApiResponse<ReservationPayload>, ServiceError> {
        let detail = self
            .query
            .find_detail_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::with_message(
            message,
            ReservationPayload {
                reservation: ReservationResponse::from_detail(
                    detail,
                    self.pickup_timeout_ms,
                    self.now(),
                ),
            },
        ))
    }
}

#[async_trait]
impl ReservationServiceTrait for ReservationService {
    async fn get_all(&self) -> Result<ApiResponse<ReservationsPayload>, ServiceError> {
        info!("🔍 Listing all reservations");

        let now = self.now();
        let reservations = self
            .query
            .find_all()
            .await?
            .into_iter()
            .map(|detail| ReservationResponse::from_detail(detail, self.pickup_timeout_ms, now))
            .collect();

        Ok(ApiResponse::ok(ReservationsPayload { reservations }))
    }

    async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<ReservationsPayload>, ServiceError> {
        info!("🔍 Listing reservations for user: {}", user_id);

        let now = self.now();
        let reservations = self
            .query
            .find_by_user(user_id)
            .await?
            .into_iter()
            .map(|detail| ReservationResponse::from_detail(detail, self.pickup_timeout_ms, now))
            .collect();

        Ok(ApiResponse::ok(ReservationsPayload { reservations }))
    }

    async fn create(
        &self,
        user_id: i32,
        req: &CreateReservationRequest,
    ) -> Result<ApiResponse<ReservationPayload>, ServiceError> {
        info!(
            "📝 Creating reservation: user {} product {} x{}",
            user_id, req.product_id, req.quantity
        );

        req.validate().map_err(ServiceError::from_validation)?;

        let product = self
            .product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if product.stock_amount < req.quantity {
            return Err(ServiceError::InsufficientStock {
                requested: req.quantity,
                available: product.stock_amount,
            });
        }

        // The repository re-checks the stock under the claim transaction,
        // so a racing reservation surfaces as a conflict.
        let reservation = self
            .command
            .create(user_id, req, product.price_per_stocks)
            .await?;

        self.detail_response(reservation.reservation_id, "Reservation placed successfully")
            .await
    }

    async fn update_status(
        &self,
        id: i32,
        req: &UpdateReservationStatusRequest,
    ) -> Result<ApiResponse<ReservationPayload>, ServiceError> {
        info!("✏️ Updating reservation {} status to '{}'", id, req.status);

        req.validate().map_err(ServiceError::from_validation)?;

        let current = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let target = req.status.as_str();
        if !matches!(target, STATUS_APPROVED | STATUS_REJECTED | STATUS_COMPLETED) {
            return Err(ServiceError::Validation(vec![format!(
                "Unknown status '{target}'"
            )]));
        }

        if !can_transition(&current.status, target) {
            return Err(ServiceError::InvalidTransition(format!(
                "Cannot move reservation from '{}' to '{target}'",
                current.status
            )));
        }

        let updated = match target {
            STATUS_APPROVED => self.command.approve(id).await?,
            STATUS_REJECTED => {
                let reason = req
                    .rejected_reason
                    .clone()
                    .unwrap_or_else(|| DEFAULT_REJECT_REASON.to_string());
                self.command.reject(id, reason).await?
            }
            _ => self.command.complete(id).await?,
        };

        self.detail_response(updated.reservation_id, format!("Reservation {target}"))
            .await
    }

    async fn cancel(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<ApiResponse<ReservationPayload>, ServiceError> {
        info!("🛑 Cancelling reservation {} for user {}", id, user_id);

        let current = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if current.user_id != user_id {
            return Err(ServiceError::Forbidden(
                "You can only cancel your own reservations".into(),
            ));
        }

        if !matches!(current.status.as_str(), STATUS_PENDING | STATUS_APPROVED) {
            return Err(ServiceError::InvalidTransition(format!(
                "Cannot cancel a {} reservation",
                current.status
            )));
        }

        let updated = self
            .command
            .reject(id, CANCELLED_BY_CUSTOMER.to_string())
            .await?;

        self.detail_response(updated.reservation_id, "Reservation cancelled")
            .await
    }

    async fn complete(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<ApiResponse<ReservationPayload>, ServiceError> {
        info!("🏁 Completing reservation {} for user {}", id, user_id);

        let current = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if current.user_id != user_id {
            return Err(ServiceError::Forbidden(
                "You can only complete your own reservations".into(),
            ));
        }

        if current.status != STATUS_APPROVED {
            return Err(ServiceError::InvalidTransition(format!(
                "Cannot complete a {} reservation",
                current.status
            )));
        }

        if is_overdue(
            &current.status,
            current.reserved_at,
            self.pickup_timeout_ms,
            self.now(),
        ) {
            return Err(ServiceError::InvalidTransition(
                "Pickup window has expired".into(),
            ));
        }

        let updated = self.command.complete(id).await?;

        self.detail_response(updated.reservation_id, "Reservation completed")
            .await
    }

    async fn check_overdue(
        &self,
        req: &CheckOverdueRequest,
    ) -> Result<ApiResponse<RejectedCountPayload>, ServiceError> {
        req.validate().map_err(ServiceError::from_validation)?;

        let timeout_ms = req.timeout_ms.unwrap_or(self.pickup_timeout_ms);
        let cutoff = self.now() - Duration::milliseconds(timeout_ms);

        info!("📉 Sweeping approved reservations reserved before {}", cutoff);

        let rejected_count = self
            .command
            .reject_approved_before(cutoff, AUTO_CANCEL_REASON.to_string())
            .await?;

        Ok(ApiResponse::with_message(
            format!("{rejected_count} reservation(s) auto-cancelled"),
            RejectedCountPayload { rejected_count },
        ))
    }

    async fn process_pending(&self) -> Result<ApiResponse<ApprovedCountPayload>, ServiceError> {
        info!("✅ Sweeping pending reservations");

        let approved_count = self.command.approve_all_pending().await?;

        Ok(ApiResponse::with_message(
            format!("{approved_count} reservation(s) approved"),
            ApprovedCountPayload { approved_count },
        ))
    }

    async fn sales_report(
        &self,
        date: NaiveDate,
    ) -> Result<ApiResponse<SalesReportPayload>, ServiceError> {
        info!("📊 Building sales report for {}", date);

        let items: Vec<SalesLineResponse> = self
            .query
            .find_completed_on(date)
            .await?
            .into_iter()
            .map(SalesLineResponse::from)
            .collect();

        let total_sales = items.iter().map(|line| line.subtotal).sum();
        let total_orders = items.len();

        Ok(ApiResponse::ok(SalesReportPayload {
            report: SalesReportResponse {
                date: date.to_string(),
                total_sales,
                total_orders,
                items,
            },
        }))
    }

    async fn sales_report_csv(&self, date: NaiveDate) -> Result<String, ServiceError> {
        info!("📊 Exporting sales report CSV for {}", date);

        let lines = self.query.find_completed_on(date).await?;

        let mut csv = csv_row([
            "Reservation ID",
            "Product",
            "Customer",
            "Quantity",
            "Unit Price",
            "Subtotal",
            "Completed At",
        ]);

        for line in lines {
            let subtotal = line.price_per_stocks * f64::from(line.quantity);
            csv.push_str(&csv_row([
                line.reservation_id.to_string(),
                line.product_name,
                line.username,
                line.quantity.to_string(),
                format_money(line.price_per_stocks),
                format_money(subtotal),
                line.completed_at.map(|dt| dt.to_string()).unwrap_or_default(),
            ]));
        }

        Ok(csv)
    }
}

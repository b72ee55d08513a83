mod api;
mod cart;
mod incubatee;
mod pricing_unit;
mod product;
mod report;
mod reservation;
mod session;
mod user;

pub use self::api::{ApiResponse, MessageResponse};
pub use self::cart::CartCountPayload;
pub use self::incubatee::{
    ApprovalPayload, IncubateePayload, IncubateeResponse, IncubateeStatsListPayload,
    IncubateeStatsResponse, IncubateeSummariesPayload, IncubateeSummaryResponse, LogoPayload,
};
pub use self::pricing_unit::{PricingUnitPayload, PricingUnitResponse, PricingUnitsPayload};
pub use self::product::{
    CRITICAL_STOCK_THRESHOLD, LOW_STOCK_THRESHOLD, LowStockPayload, NotificationPayload,
    ProductPayload, ProductResponse, ProductsPayload, classify_stock,
};
pub use self::report::{
    CategoriesPayload, CategoryBreakdown, IncubateeBreakdown, PreviewPayload, ReportRow,
    ReportTotals, SalesSummaryResponse, SummaryPayload,
};
pub use self::reservation::{
    ApprovedCountPayload, RejectedCountPayload, ReservationPayload, ReservationResponse,
    ReservationsPayload, SalesLineResponse, SalesReportPayload, SalesReportResponse, is_overdue,
};
pub use self::session::{AuthCheckPayload, Session, SessionUserResponse};
pub use self::user::{StatsPayload, UserPayload, UserResponse, UserStatsResponse};

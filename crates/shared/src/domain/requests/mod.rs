mod auth;
mod cart;
mod incubatee;
mod pricing_unit;
mod product;
mod report;
mod reservation;
mod user;

pub use self::auth::{CreateUserData, LoginRequest, RegisterRequest};
pub use self::cart::AddToCartRequest;
pub use self::incubatee::{CreateIncubateeRequest, UpdateIncubateeRequest};
pub use self::pricing_unit::CreatePricingUnitRequest;
pub use self::product::{CreateProductRequest, FindAllProducts};
pub use self::report::ReportQuery;
pub use self::reservation::{
    CheckOverdueRequest, CreateReservationRequest, SalesReportQuery,
    UpdateReservationStatusRequest,
};
pub use self::user::{ChangePasswordRequest, UpdateProfileRequest};

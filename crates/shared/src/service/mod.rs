mod auth;
mod cart;
mod email;
mod incubatee;
mod pricing_unit;
mod product;
mod report;
mod reservation;
mod user;

pub use self::auth::{AuthService, MAX_LOGIN_ATTEMPTS, is_locked_out};
pub use self::cart::CartService;
pub use self::email::EmailService;
pub use self::incubatee::IncubateeService;
pub use self::pricing_unit::PricingUnitService;
pub use self::product::ProductService;
pub use self::report::ReportService;
pub use self::reservation::{
    AUTO_CANCEL_REASON, CANCELLED_BY_CUSTOMER, ReservationService,
};
pub use self::user::UserService;

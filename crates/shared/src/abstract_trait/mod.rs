mod auth;
mod cart;
mod email;
mod hashing;
mod incubatee;
mod jwt;
mod pricing_unit;
mod product;
mod report;
mod reservation;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::cart::{CartRepositoryTrait, CartServiceTrait, DynCartRepository, DynCartService};
pub use self::email::{DynEmailService, EmailServiceTrait, LowStockEmail, LowStockEmailItem};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::incubatee::{
    DynIncubateeCommandRepository, DynIncubateeQueryRepository, DynIncubateeService,
    IncubateeCommandRepositoryTrait, IncubateeQueryRepositoryTrait, IncubateeServiceTrait,
};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::pricing_unit::{
    DynPricingUnitRepository, DynPricingUnitService, PricingUnitRepositoryTrait,
    PricingUnitServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductQueryRepository, DynProductService,
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, ProductServiceTrait,
};
pub use self::report::{
    DynReportRepository, DynReportService, ReportRepositoryTrait, ReportServiceTrait,
};
pub use self::reservation::{
    DynReservationCommandRepository, DynReservationQueryRepository, DynReservationService,
    ReservationCommandRepositoryTrait, ReservationQueryRepositoryTrait, ReservationServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, DynUserService,
    UserCommandRepositoryTrait, UserQueryRepositoryTrait, UserServiceTrait,
};

mod cart;
mod incubatee;
mod pricing_unit;
mod product;
mod report;
mod reservation;
mod user;

pub use self::cart::CartRepository;
pub use self::incubatee::IncubateeRepository;
pub use self::pricing_unit::PricingUnitRepository;
pub use self::product::ProductRepository;
pub use self::report::ReportRepository;
pub use self::reservation::ReservationRepository;
pub use self::user::UserRepository;

mod cart;
mod incubatee;
mod pricing_unit;
mod product;
mod reservation;
mod user;

pub use self::cart::{CartItem, CartItemDetail};
pub use self::incubatee::{Incubatee, IncubateeWithStats};
pub use self::pricing_unit::PricingUnit;
pub use self::product::{Product, ProductWithIncubatee};
pub use self::reservation::{
    Reservation, ReservationDetail, SalesLine, STATUS_APPROVED, STATUS_COMPLETED, STATUS_PENDING,
    STATUS_REJECTED, can_transition,
};
pub use self::user::User;

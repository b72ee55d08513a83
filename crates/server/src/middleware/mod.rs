pub mod jwt;
pub mod metrics;
pub mod session;
pub mod validate;

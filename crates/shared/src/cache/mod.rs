mod cache_store;
mod session;

pub use self::cache_store::CacheStore;
pub use self::session::SessionStore;

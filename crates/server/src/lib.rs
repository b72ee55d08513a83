pub mod handler;
pub mod middleware;
pub mod scheduler;
pub mod state;
pub mod upload;

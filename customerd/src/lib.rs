//! customerd — customer registry HTTP service
//!
//! Long-running service that:
//! - Exposes CRUD-style operations over customer records (fetch, list,
//!   save, remove, block/unblock)
//! - Backs them with a PostgreSQL `customers` table through a shared pool
//! - Returns JSON; store failure detail is logged server-side and never
//!   crosses the HTTP boundary

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;

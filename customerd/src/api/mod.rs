//! API routes for customerd

pub mod customers;
pub mod health;

use axum::Router;
use axum::routing::{any, get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the router
///
/// The customer routes are dot-style action paths and accept any method;
/// parameters arrive via query string, save via form payload.
pub fn create_router(state: AppState) -> Router {
    let customers = Router::new()
        .route("/customers.getById", any(customers::get_by_id))
        .route("/customers.getAll", any(customers::get_all))
        .route("/customers.getAllActive", any(customers::get_all_active))
        .route("/customers.blockById", any(customers::block_by_id))
        .route("/customers.unblockById", any(customers::unblock_by_id))
        .route("/customers.removeById", any(customers::remove_by_id))
        .route("/customers.save", any(customers::save));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(customers)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

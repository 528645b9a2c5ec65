//! Route definitions for the Pharmacy Inventory Management Platform

use axum::routing::{delete, get, post};
use axum::Router;

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Medicine catalogue and sales
        .route(
            "/medicines",
            get(handlers::list_medicines).post(handlers::create_medicine),
        )
        .route("/medicines/:id", delete(handlers::delete_medicine))
        .route("/sell", post(handlers::sell_medicine))
        // Warehouses
        .route(
            "/warehouses",
            get(handlers::list_warehouses).post(handlers::create_warehouse),
        )
        // Stock batches
        .route("/stock-batches", get(handlers::list_stock_batches))
        .route("/import-batch", post(handlers::import_batch))
        .route("/expiring-batches", get(handlers::list_expiring_batches))
        .route("/transfer-batch", post(handlers::transfer_batch))
        // Audit history
        .route("/batches/import", get(handlers::list_import_batches))
        .route("/batches/export", get(handlers::list_export_batches))
        .route("/transfers", get(handlers::list_transfers))
}

//! HTTP handlers for warehouse endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use crate::error::AppResult;
use crate::models::Warehouse;
use crate::services::warehouse::{CreateWarehouseInput, WarehouseService};
use crate::AppState;

/// List all warehouses
pub async fn list_warehouses(State(state): State<AppState>) -> Json<Vec<Warehouse>> {
    let service = WarehouseService::new(state.store.clone());
    Json(service.list())
}

/// Create a warehouse
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(input): Json<CreateWarehouseInput>,
) -> AppResult<(StatusCode, Json<Warehouse>)> {
    let service = WarehouseService::new(state.store.clone());
    let warehouse = service.create(input)?;
    Ok((StatusCode::CREATED, Json(warehouse)))
}

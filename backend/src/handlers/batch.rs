//! HTTP handlers for stock batch endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use crate::error::AppResult;
use crate::models::{StockBatch, TransferRecord};
use crate::services::batch::{BatchService, ExpiringBatch, ImportBatchInput, TransferInput};
use crate::AppState;

/// List all stock batches
pub async fn list_stock_batches(State(state): State<AppState>) -> Json<Vec<StockBatch>> {
    let service = BatchService::new(state.store.clone());
    Json(service.list())
}

/// Import a batch into a warehouse
pub async fn import_batch(
    State(state): State<AppState>,
    Json(input): Json<ImportBatchInput>,
) -> AppResult<(StatusCode, Json<StockBatch>)> {
    let service = BatchService::new(state.store.clone());
    let batch = service.import(input)?;
    Ok((StatusCode::CREATED, Json(batch)))
}

/// List batches close to their expiry date
pub async fn list_expiring_batches(State(state): State<AppState>) -> Json<Vec<ExpiringBatch>> {
    let service = BatchService::new(state.store.clone());
    Json(service.expiring())
}

/// Transfer batch stock to another warehouse
pub async fn transfer_batch(
    State(state): State<AppState>,
    Json(input): Json<TransferInput>,
) -> AppResult<Json<TransferRecord>> {
    let service = BatchService::new(state.store.clone());
    let record = service.transfer(input)?;
    Ok(Json(record))
}

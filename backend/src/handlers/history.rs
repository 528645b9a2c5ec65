//! HTTP handlers for audit history endpoints

use axum::extract::State;
use axum::Json;
use crate::models::{ExportBatch, ImportBatch, TransferRecord};
use crate::services::history::HistoryService;
use crate::AppState;

/// List the import audit log
pub async fn list_import_batches(State(state): State<AppState>) -> Json<Vec<ImportBatch>> {
    let service = HistoryService::new(state.store.clone());
    Json(service.import_batches())
}

/// List the export audit log
pub async fn list_export_batches(State(state): State<AppState>) -> Json<Vec<ExportBatch>> {
    let service = HistoryService::new(state.store.clone());
    Json(service.export_batches())
}

/// List the transfer audit log, most recent first
pub async fn list_transfers(State(state): State<AppState>) -> Json<Vec<TransferRecord>> {
    let service = HistoryService::new(state.store.clone());
    Json(service.transfers())
}

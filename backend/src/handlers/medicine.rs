//! HTTP handlers for medicine endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use crate::error::AppResult;
use crate::models::Medicine;
use crate::services::medicine::{CreateMedicineInput, MedicineService, SellInput};
use crate::AppState;

/// List all medicines
pub async fn list_medicines(State(state): State<AppState>) -> Json<Vec<Medicine>> {
    let service = MedicineService::new(state.store.clone());
    Json(service.list())
}

/// Create a medicine
pub async fn create_medicine(
    State(state): State<AppState>,
    Json(input): Json<CreateMedicineInput>,
) -> AppResult<(StatusCode, Json<Medicine>)> {
    let service = MedicineService::new(state.store.clone());
    let medicine = service.create(input)?;
    Ok((StatusCode::CREATED, Json(medicine)))
}

/// Delete a medicine
pub async fn delete_medicine(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<()>> {
    let service = MedicineService::new(state.store.clone());
    service.delete(id)?;
    Ok(Json(()))
}

/// Sell stock of a medicine
pub async fn sell_medicine(
    State(state): State<AppState>,
    Json(input): Json<SellInput>,
) -> AppResult<Json<Medicine>> {
    let service = MedicineService::new(state.store.clone());
    let medicine = service.sell(input)?;
    Ok(Json(medicine))
}

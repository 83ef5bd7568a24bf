//! Maintenance API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{MaintenanceLog, MaintenanceRequest},
};

/// Log a maintenance event; the equipment becomes active
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    request_body = MaintenanceRequest,
    responses(
        (status = 201, description = "Maintenance logged", body = MaintenanceLog),
        (status = 400, description = "Missing or malformed field", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_maintenance(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<MaintenanceRequest>, AppError>,
) -> AppResult<(StatusCode, Json<MaintenanceLog>)> {
    let entry = data.into_entry()?;
    let log = state.services.maintenance.add(&entry).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// Maintenance history of one equipment, newest first
#[utoipa::path(
    get,
    path = "/equipment/{id}/maintenance",
    tag = "maintenance",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Maintenance history", body = Vec<MaintenanceLog>),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<MaintenanceLog>>> {
    let logs = state.services.maintenance.list_for_equipment(id).await?;
    Ok(Json(logs))
}

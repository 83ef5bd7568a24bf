//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipment, EquipmentQuery, EquipmentRequest, EquipmentType},
};

/// List equipment, newest first
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>),
        (status = 400, description = "Unknown status filter", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let filter = query.into_filter()?;
    let equipment = state.services.equipment.list(&filter).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = EquipmentRequest,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Missing or malformed field", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment type not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Active-status rule violated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<EquipmentRequest>, AppError>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let draft = data.into_draft()?;
    let equipment = state.services.equipment.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Replace equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = EquipmentRequest,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 400, description = "Missing or malformed field", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment or type not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Active-status rule violated", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(data), _): WithRejection<Json<EquipmentRequest>, AppError>,
) -> AppResult<Json<Equipment>> {
    let draft = data.into_draft()?;
    let equipment = state.services.equipment.update(id, &draft).await?;
    Ok(Json(equipment))
}

/// Delete equipment and its maintenance history
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List equipment types
#[utoipa::path(
    get,
    path = "/equipment/types",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment types", body = Vec<EquipmentType>)
    )
)]
pub async fn list_equipment_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentType>>> {
    let types = state.services.equipment.list_types().await?;
    Ok(Json(types))
}

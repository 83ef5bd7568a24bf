//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, maintenance};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipment Tracker API",
        version = "1.0.0",
        description = "Equipment cleaning and maintenance tracking REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::list_equipment_types,
        // Maintenance
        maintenance::add_maintenance,
        maintenance::list_maintenance,
    ),
    components(
        schemas(
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentType,
            crate::models::equipment::EquipmentRequest,
            crate::models::equipment::EquipmentQuery,
            crate::models::enums::EquipmentStatus,
            crate::models::maintenance::MaintenanceLog,
            crate::models::maintenance::MaintenanceRequest,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment management"),
        (name = "maintenance", description = "Maintenance history")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

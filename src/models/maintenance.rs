//! Maintenance log model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::parse_date;
use crate::error::{AppError, AppResult};

/// Maintenance log entry (append-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLog {
    pub id: i64,
    pub equipment_id: i64,
    pub maintenance_date: NaiveDate,
    pub notes: Option<String>,
    pub performed_by: Option<String>,
}

/// Add maintenance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    #[validate(required(message = "Equipment is required"))]
    pub equipment_id: Option<i64>,
    /// Date of the maintenance (YYYY-MM-DD)
    #[validate(required(message = "Maintenance date is required"))]
    pub maintenance_date: Option<String>,
    pub notes: Option<String>,
    pub performed_by: Option<String>,
}

impl MaintenanceRequest {
    pub fn into_entry(self) -> AppResult<NewMaintenanceLog> {
        self.validate()?;

        let equipment_id = self
            .equipment_id
            .ok_or_else(|| AppError::Validation("Equipment is required".to_string()))?;
        let maintenance_date = self
            .maintenance_date
            .as_deref()
            .map(|s| parse_date("maintenanceDate", s))
            .transpose()?
            .ok_or_else(|| AppError::Validation("Maintenance date is required".to_string()))?;

        Ok(NewMaintenanceLog {
            equipment_id,
            maintenance_date,
            notes: self.notes,
            performed_by: self.performed_by,
        })
    }
}

/// Validated maintenance entry, not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMaintenanceLog {
    pub equipment_id: i64,
    pub maintenance_date: NaiveDate,
    pub notes: Option<String>,
    pub performed_by: Option<String>,
}

//! Equipment and equipment type models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{enums::EquipmentStatus, parse_date};
use crate::error::{AppError, AppResult};

/// Equipment classification (reference data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentType {
    pub id: i64,
    pub name: String,
}

/// Equipment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub status: EquipmentStatus,
    /// Date of the last cleaning (YYYY-MM-DD)
    pub last_cleaned_date: Option<NaiveDate>,
}

impl Equipment {
    /// Apply a logged maintenance: the equipment becomes active and clean as of `date`.
    pub fn record_cleaning(&mut self, date: NaiveDate) {
        self.status = EquipmentStatus::Active;
        self.last_cleaned_date = Some(date);
    }
}

/// Row shape of `equipment` joined with `equipment_types`
#[derive(Debug, FromRow)]
pub struct EquipmentRow {
    pub id: i64,
    pub name: String,
    pub type_id: i64,
    pub type_name: String,
    pub status: EquipmentStatus,
    pub last_cleaned_date: Option<NaiveDate>,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            equipment_type: EquipmentType {
                id: row.type_id,
                name: row.type_name,
            },
            status: row.status,
            last_cleaned_date: row.last_cleaned_date,
        }
    }
}

/// Create / update equipment request.
///
/// Updates replace every field; nothing is merged with the stored record.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRequest {
    #[validate(
        required(message = "Equipment name is required"),
        length(min = 1, message = "Equipment name is required")
    )]
    pub name: Option<String>,
    #[validate(required(message = "Equipment type is required"))]
    pub type_id: Option<i64>,
    /// ACTIVE, INACTIVE or MAINTENANCE
    #[validate(required(message = "Status is required"))]
    pub status: Option<String>,
    /// Date of the last cleaning (YYYY-MM-DD)
    pub last_cleaned_date: Option<String>,
}

impl EquipmentRequest {
    /// Check required fields and parse typed values.
    pub fn into_draft(self) -> AppResult<EquipmentDraft> {
        self.validate()?;

        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            return Err(AppError::Validation("Equipment name is required".to_string()));
        }
        let type_id = self
            .type_id
            .ok_or_else(|| AppError::Validation("Equipment type is required".to_string()))?;
        let status = self
            .status
            .ok_or_else(|| AppError::Validation("Status is required".to_string()))?
            .parse::<EquipmentStatus>()
            .map_err(AppError::BadRequest)?;
        let last_cleaned_date = self
            .last_cleaned_date
            .as_deref()
            .map(|s| parse_date("lastCleanedDate", s))
            .transpose()?;

        Ok(EquipmentDraft {
            name,
            type_id,
            status,
            last_cleaned_date,
        })
    }
}

/// Validated equipment fields, ready for the rule engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentDraft {
    pub name: String,
    pub type_id: i64,
    pub status: EquipmentStatus,
    pub last_cleaned_date: Option<NaiveDate>,
}

/// Query parameters for listing equipment
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct EquipmentQuery {
    /// Only return equipment with this status
    pub status: Option<String>,
    /// Case-insensitive name search
    pub search: Option<String>,
}

impl EquipmentQuery {
    /// Blank values count as absent; an unknown status is rejected.
    pub fn into_filter(self) -> AppResult<EquipmentFilter> {
        let status = match self.status.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => {
                Some(s.parse::<EquipmentStatus>().map_err(AppError::BadRequest)?)
            }
            _ => None,
        };
        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(EquipmentFilter { status, search })
    }
}

/// Filter applied by the equipment store when listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentFilter {
    pub status: Option<EquipmentStatus>,
    pub search: Option<String>,
}

//! Data models for the equipment tracker

pub mod enums;
pub mod equipment;
pub mod maintenance;

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use enums::EquipmentStatus;
pub use equipment::{Equipment, EquipmentDraft, EquipmentFilter, EquipmentType};
pub use maintenance::{MaintenanceLog, NewMaintenanceLog};

/// Parse a `YYYY-MM-DD` request field
pub(crate) fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid {} format, expected YYYY-MM-DD", field)))
}

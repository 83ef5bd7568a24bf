//! Maintenance service

use std::sync::Arc;

use super::equipment::equipment_not_found;
use crate::{
    error::AppResult,
    models::{MaintenanceLog, NewMaintenanceLog},
    repository::{EquipmentStore, MaintenanceStore},
};

#[derive(Clone)]
pub struct MaintenanceService {
    equipment: Arc<dyn EquipmentStore>,
    logs: Arc<dyn MaintenanceStore>,
}

impl MaintenanceService {
    pub fn new(equipment: Arc<dyn EquipmentStore>, logs: Arc<dyn MaintenanceStore>) -> Self {
        Self { equipment, logs }
    }

    /// Log a maintenance event.
    ///
    /// The equipment becomes ACTIVE with `maintenance_date` as its last
    /// cleaned date, whatever its prior status and however old the date is:
    /// the active-status rule does not apply on this path. Both writes
    /// happen in one transaction.
    pub async fn add(&self, entry: &NewMaintenanceLog) -> AppResult<MaintenanceLog> {
        let mut equipment = self
            .equipment
            .find_by_id(entry.equipment_id)
            .await?
            .ok_or_else(|| equipment_not_found(entry.equipment_id))?;

        equipment.record_cleaning(entry.maintenance_date);
        let log = self.logs.record(&equipment, entry).await?;

        tracing::info!(
            equipment_id = equipment.id,
            log_id = log.id,
            date = %log.maintenance_date,
            "Maintenance logged"
        );
        Ok(log)
    }

    /// Maintenance history of one equipment, newest first
    pub async fn list_for_equipment(&self, equipment_id: i64) -> AppResult<Vec<MaintenanceLog>> {
        if !self.equipment.exists(equipment_id).await? {
            return Err(equipment_not_found(equipment_id));
        }
        self.logs.list_for_equipment(equipment_id).await
    }
}

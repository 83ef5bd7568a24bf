//! Business logic services

pub mod equipment;
pub mod maintenance;

use std::sync::Arc;

use crate::{
    clock::{Clock, SystemClock},
    config::RulesConfig,
    repository::{EquipmentStore, MaintenanceStore, Repository},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub maintenance: maintenance::MaintenanceService,
}

impl Services {
    /// Create all services backed by the PostgreSQL repository
    pub fn new(repository: Repository, rules: &RulesConfig) -> Self {
        Self::with_stores(
            Arc::new(repository.equipment),
            Arc::new(repository.maintenance),
            Arc::new(SystemClock),
            rules,
        )
    }

    /// Create all services over arbitrary stores and clock
    pub fn with_stores(
        equipment: Arc<dyn EquipmentStore>,
        maintenance: Arc<dyn MaintenanceStore>,
        clock: Arc<dyn Clock>,
        rules: &RulesConfig,
    ) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(
                equipment.clone(),
                clock,
                rules.cleaning_window_days,
            ),
            maintenance: maintenance::MaintenanceService::new(equipment, maintenance),
        }
    }
}

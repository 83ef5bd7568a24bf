//! Repository layer for database operations
//!
//! The services only see the [`EquipmentStore`] and [`MaintenanceStore`]
//! traits; the PostgreSQL repositories below implement them.

pub mod equipment;
pub mod maintenance;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Equipment, EquipmentDraft, EquipmentFilter, EquipmentType, MaintenanceLog, NewMaintenanceLog},
};

/// Durable storage for equipment and equipment types
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// Equipment matching `filter`, newest (highest id) first
    async fn list(&self, filter: &EquipmentFilter) -> AppResult<Vec<Equipment>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Equipment>>;

    async fn exists(&self, id: i64) -> AppResult<bool>;

    async fn find_type(&self, id: i64) -> AppResult<Option<EquipmentType>>;

    async fn list_types(&self) -> AppResult<Vec<EquipmentType>>;

    async fn insert(&self, draft: &EquipmentDraft) -> AppResult<Equipment>;

    /// Overwrite every field of `id`; `None` when the row is gone
    async fn replace(&self, id: i64, draft: &EquipmentDraft) -> AppResult<Option<Equipment>>;

    /// Remove `id` together with its maintenance logs; `false` when absent
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Round trip to the backing store
    async fn ping(&self) -> AppResult<()>;
}

/// Durable storage for maintenance logs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    /// Logs of one equipment, newest maintenance date first
    async fn list_for_equipment(&self, equipment_id: i64) -> AppResult<Vec<MaintenanceLog>>;

    /// Persist the equipment's new status/date and append the log in one transaction
    async fn record(&self, equipment: &Equipment, entry: &NewMaintenanceLog) -> AppResult<MaintenanceLog>;
}

/// Main repository struct holding the per-table repositories
#[derive(Clone)]
pub struct Repository {
    pub equipment: equipment::EquipmentRepository,
    pub maintenance: maintenance::MaintenanceRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool),
        }
    }
}

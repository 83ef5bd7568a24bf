//! Equipment service: listing, create/update/delete and the active-status rule

use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    models::{Equipment, EquipmentDraft, EquipmentFilter, EquipmentStatus, EquipmentType},
    repository::EquipmentStore,
};

/// Reject ACTIVE equipment that has no cleaning date, or one older than
/// `window_days` before `today`. The boundary day itself is accepted.
pub fn check_active_status(
    status: EquipmentStatus,
    last_cleaned_date: Option<NaiveDate>,
    today: NaiveDate,
    window_days: u32,
) -> AppResult<()> {
    if status != EquipmentStatus::Active {
        return Ok(());
    }

    let Some(cleaned) = last_cleaned_date else {
        return Err(AppError::BusinessRule(
            "Equipment cannot be marked as Active: Last Cleaned Date is required when setting status to Active."
                .to_string(),
        ));
    };

    let oldest_allowed = today - Duration::days(i64::from(window_days));
    if cleaned < oldest_allowed {
        return Err(AppError::BusinessRule(format!(
            "Equipment cannot be marked as Active because the Last Cleaned Date ({}) is older than {} days. \
             Please log a maintenance event to update the equipment status.",
            cleaned, window_days
        )));
    }

    Ok(())
}

#[derive(Clone)]
pub struct EquipmentService {
    store: Arc<dyn EquipmentStore>,
    clock: Arc<dyn Clock>,
    cleaning_window_days: u32,
}

impl EquipmentService {
    pub fn new(store: Arc<dyn EquipmentStore>, clock: Arc<dyn Clock>, cleaning_window_days: u32) -> Self {
        Self {
            store,
            clock,
            cleaning_window_days,
        }
    }

    pub async fn list(&self, filter: &EquipmentFilter) -> AppResult<Vec<Equipment>> {
        self.store.list(filter).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| equipment_not_found(id))
    }

    pub async fn list_types(&self) -> AppResult<Vec<EquipmentType>> {
        self.store.list_types().await
    }

    pub async fn create(&self, draft: &EquipmentDraft) -> AppResult<Equipment> {
        self.require_type(draft.type_id).await?;
        self.check_rule(draft)?;

        let equipment = self.store.insert(draft).await?;
        tracing::info!(id = equipment.id, status = %equipment.status, "Equipment created");
        Ok(equipment)
    }

    /// Full replacement of name, type, status and last cleaned date.
    pub async fn update(&self, id: i64, draft: &EquipmentDraft) -> AppResult<Equipment> {
        if !self.store.exists(id).await? {
            return Err(equipment_not_found(id));
        }
        self.require_type(draft.type_id).await?;
        self.check_rule(draft)?;

        let equipment = self
            .store
            .replace(id, draft)
            .await?
            .ok_or_else(|| equipment_not_found(id))?;
        tracing::info!(id, status = %equipment.status, "Equipment updated");
        Ok(equipment)
    }

    /// Delete equipment; its maintenance logs are removed with it.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(equipment_not_found(id));
        }
        tracing::info!(id, "Equipment deleted");
        Ok(())
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    async fn require_type(&self, type_id: i64) -> AppResult<EquipmentType> {
        self.store
            .find_type(type_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment type not found with id: {}", type_id)))
    }

    fn check_rule(&self, draft: &EquipmentDraft) -> AppResult<()> {
        let today = self.clock.today();
        check_active_status(draft.status, draft.last_cleaned_date, today, self.cleaning_window_days)
            .inspect_err(|e| tracing::warn!(%today, "Rejected equipment write: {}", e))
    }
}

pub(crate) fn equipment_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Equipment not found with id: {}", id))
}

//! Maintenance logs repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::MaintenanceStore;
use crate::{
    error::{AppError, AppResult},
    models::{Equipment, MaintenanceLog, NewMaintenanceLog},
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceStore for MaintenanceRepository {
    async fn list_for_equipment(&self, equipment_id: i64) -> AppResult<Vec<MaintenanceLog>> {
        // Same-day entries fall back to insertion order, newest first
        let rows = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            SELECT id, equipment_id, maintenance_date, notes, performed_by
            FROM maintenance_logs
            WHERE equipment_id = $1
            ORDER BY maintenance_date DESC, id DESC
            "#,
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn record(&self, equipment: &Equipment, entry: &NewMaintenanceLog) -> AppResult<MaintenanceLog> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE equipment SET status = $2, last_cleaned_date = $3 WHERE id = $1",
        )
        .bind(equipment.id)
        .bind(equipment.status)
        .bind(equipment.last_cleaned_date)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound(format!(
                "Equipment not found with id: {}",
                equipment.id
            )));
        }

        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs (equipment_id, maintenance_date, notes, performed_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, equipment_id, maintenance_date, notes, performed_by
            "#,
        )
        .bind(entry.equipment_id)
        .bind(entry.maintenance_date)
        .bind(&entry.notes)
        .bind(&entry.performed_by)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(log)
    }
}

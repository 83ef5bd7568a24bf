//! Equipment repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::EquipmentStore;
use crate::{
    error::AppResult,
    models::{
        equipment::EquipmentRow, Equipment, EquipmentDraft, EquipmentFilter, EquipmentType,
    },
};

const SELECT_EQUIPMENT: &str = r#"
    SELECT e.id, e.name, e.type_id, t.name AS type_name, e.status, e.last_cleaned_date
    FROM equipment e
    JOIN equipment_types t ON t.id = e.type_id
"#;

/// `ILIKE` pattern matching `search` anywhere, with its wildcards taken literally
fn contains_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EquipmentStore for EquipmentRepository {
    async fn list(&self, filter: &EquipmentFilter) -> AppResult<Vec<Equipment>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if filter.status.is_some() {
            conditions.push(format!("e.status = ${}", idx));
            idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!("e.name ILIKE ${} ESCAPE '\\'", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("{} {} ORDER BY e.id DESC", SELECT_EQUIPMENT, where_clause);

        let mut builder = sqlx::query_as::<_, EquipmentRow>(&query);
        if let Some(status) = filter.status {
            builder = builder.bind(status);
        }
        if let Some(ref search) = filter.search {
            builder = builder.bind(contains_pattern(search));
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Equipment>> {
        let query = format!("{} WHERE e.id = $1", SELECT_EQUIPMENT);
        let row = sqlx::query_as::<_, EquipmentRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Equipment::from))
    }

    async fn exists(&self, id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn find_type(&self, id: i64) -> AppResult<Option<EquipmentType>> {
        let row = sqlx::query_as::<_, EquipmentType>("SELECT id, name FROM equipment_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_types(&self) -> AppResult<Vec<EquipmentType>> {
        let rows = sqlx::query_as::<_, EquipmentType>("SELECT id, name FROM equipment_types ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, draft: &EquipmentDraft) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, EquipmentRow>(
            r#"
            WITH inserted AS (
                INSERT INTO equipment (name, type_id, status, last_cleaned_date)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT i.id, i.name, i.type_id, t.name AS type_name, i.status, i.last_cleaned_date
            FROM inserted i
            JOIN equipment_types t ON t.id = i.type_id
            "#,
        )
        .bind(&draft.name)
        .bind(draft.type_id)
        .bind(draft.status)
        .bind(draft.last_cleaned_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn replace(&self, id: i64, draft: &EquipmentDraft) -> AppResult<Option<Equipment>> {
        let row = sqlx::query_as::<_, EquipmentRow>(
            r#"
            WITH updated AS (
                UPDATE equipment
                SET name = $2, type_id = $3, status = $4, last_cleaned_date = $5
                WHERE id = $1
                RETURNING *
            )
            SELECT u.id, u.name, u.type_id, t.name AS type_name, u.status, u.last_cleaned_date
            FROM updated u
            JOIN equipment_types t ON t.id = u.type_id
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.type_id)
        .bind(draft.status)
        .bind(draft.last_cleaned_date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Equipment::from))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM maintenance_logs WHERE equipment_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

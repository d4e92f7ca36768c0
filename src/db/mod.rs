use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Part;

mod memory;

pub use memory::MemoryPartStore;

/// Persistence boundary for parts. Each call is a single round trip.
#[async_trait]
pub trait PartStore: Send + Sync {
    /// Writes one row. A duplicate id surfaces as a persistence error.
    async fn insert_part(&self, part: &Part) -> AppResult<()>;

    /// Returns the row with this id, soft-deleted or not.
    async fn fetch_part_by_id(&self, id: Uuid) -> AppResult<Part>;

    async fn ping(&self) -> AppResult<()>;
}

// ── PostgreSQL ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PgPartStore {
    pool: PgPool,
}

impl PgPartStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PartStore for PgPartStore {
    async fn insert_part(&self, part: &Part) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO parts (part_id, part_name, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(part.id)
        .bind(&part.name)
        .bind(part.created_at)
        .bind(part.updated_at)
        .bind(part.deleted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn fetch_part_by_id(&self, id: Uuid) -> AppResult<Part> {
        sqlx::query_as::<_, Part>(
            "SELECT part_id, part_name, created_at, updated_at, deleted_at
             FROM parts WHERE part_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Part {} not found", id)))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

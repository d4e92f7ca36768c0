use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::PartStore;
use crate::error::{AppError, AppResult};
use crate::models::Part;

/// In-process store with the same contract as the `parts` table: unique ids,
/// no filtering on `deleted_at`.
#[derive(Debug, Default)]
pub struct MemoryPartStore {
    parts: RwLock<HashMap<Uuid, Part>>,
}

impl MemoryPartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.parts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.parts.read().await.is_empty()
    }
}

#[async_trait]
impl PartStore for MemoryPartStore {
    async fn insert_part(&self, part: &Part) -> AppResult<()> {
        match self.parts.write().await.entry(part.id) {
            Entry::Occupied(_) => Err(AppError::Internal(format!(
                "duplicate part_id {}",
                part.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(part.clone());
                Ok(())
            }
        }
    }

    async fn fetch_part_by_id(&self, id: Uuid) -> AppResult<Part> {
        self.parts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Part {} not found", id)))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

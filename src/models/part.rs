use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Names must be strictly shorter than this many characters.
pub const MAX_PART_NAME_LEN: usize = 1024;

/// Storage representation of an inventory part, one row of `parts`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Part {
    #[sqlx(rename = "part_id")]
    pub id: Uuid,
    #[sqlx(rename = "part_name")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker. Never set by the HTTP surface.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Part {
    /// Fresh part with a new v4 id. `created_at` and `updated_at` share one
    /// timestamp, truncated to the microsecond precision of `timestamptz`.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now().trunc_subsecs(6);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

// ── Wire representation ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartResponse {
    pub part_id: Uuid,
    pub part_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Part> for PartResponse {
    fn from(part: &Part) -> Self {
        Self {
            part_id: part.id,
            part_name: part.name.clone(),
            created_at: part.created_at,
            updated_at: part.updated_at,
            deleted_at: part.deleted_at,
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreatePart {
    #[serde(default)]
    pub part_name: Option<String>,
}

impl CreatePart {
    /// Checks the requested name and hands it back on success.
    pub fn into_valid_name(self) -> AppResult<String> {
        let name = self.part_name.unwrap_or_default();
        if name.is_empty() {
            return Err(AppError::BadRequest("missing part name".to_string()));
        }
        if name.chars().count() >= MAX_PART_NAME_LEN {
            return Err(AppError::BadRequest("part name too long".to_string()));
        }
        Ok(name)
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PartQuery {
    pub part_id: Option<String>,
}

impl PartQuery {
    /// Keeps the first `part_id` value when the parameter is repeated.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            part_id: pairs
                .into_iter()
                .find(|(key, _)| key == "part_id")
                .map(|(_, value)| value),
        }
    }

    pub fn part_id(&self) -> AppResult<Uuid> {
        let raw = match self.part_id.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(AppError::BadRequest("missing part_id".to_string())),
        };
        Uuid::parse_str(raw).map_err(|e| AppError::BadRequest(format!("parse partID: {e}")))
    }
}

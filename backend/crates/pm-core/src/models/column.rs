use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A workflow stage on a board.
///
/// `is_done` marks completed work for burn and velocity charts;
/// `is_hidden` columns are left out of cumulative flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: Uuid,
    pub board_id: Uuid,

    pub name: String,
    pub color: Option<String>,
    pub position: i32,

    pub is_done: bool,
    pub is_hidden: bool,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Column {
    pub fn new(board_id: Uuid, name: String, position: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            name,
            color: None,
            position,
            is_done: false,
            is_hidden: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn new_done(board_id: Uuid, name: String, position: i32) -> Self {
        let mut column = Self::new(board_id, name, position);
        column.is_done = true;
        column
    }
}

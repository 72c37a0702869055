use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A card on a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: Uuid,
    pub board_id: Uuid,
    pub column_id: Uuid,
    pub iteration_id: Option<Uuid>,

    pub title: String,
    pub story_points: Option<i32>,
    pub position: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl WorkItem {
    pub fn new(board_id: Uuid, column_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            column_id,
            iteration_id: None,
            title,
            story_points: None,
            position: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

use crate::{IterationDateRange, IterationStatus};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Iteration {
    pub id: Uuid,
    pub board_id: Uuid,

    pub name: String,
    pub goal: Option<String>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    pub status: IterationStatus,
    pub closed_at: Option<DateTime<Utc>>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Iteration {
    pub fn new(
        board_id: Uuid,
        name: String,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            name,
            goal: None,
            start_date,
            end_date,
            status: IterationStatus::Future,
            closed_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Chart x-axis for this iteration.
    ///
    /// A missing start falls back to the creation time; a missing end to
    /// `default_days` after the start.
    pub fn date_range(&self, default_days: i64) -> IterationDateRange {
        let start = self.start_date.unwrap_or(self.created_at);
        let end = self
            .end_date
            .unwrap_or_else(|| start + Duration::days(default_days));
        IterationDateRange::new(start, end)
    }
}

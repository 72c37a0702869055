pub mod burn_calculator;
pub mod flow_aggregator;
pub mod velocity_aggregator;

use crate::{ChartMetrics, MetricsError, MetricsResult, MetricsSettings, MetricsSources, ReplayEvent};

use pm_core::{Column, Iteration, IterationDateRange};

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use log::warn;
use uuid::Uuid;

pub(crate) async fn load_iteration(
    sources: &MetricsSources,
    iteration_id: Uuid,
) -> MetricsResult<Iteration> {
    sources
        .iterations
        .find_iteration(iteration_id)
        .await?
        .ok_or_else(|| MetricsError::not_found("Iteration", iteration_id))
}

/// Ids of columns flagged as done. Ids missing from this set, including
/// columns deleted since, count as not done.
pub(crate) fn done_column_ids(columns: &[Column]) -> BTreeSet<Uuid> {
    columns
        .iter()
        .filter(|column| column.is_done)
        .map(|column| column.id)
        .collect()
}

/// Fetch and decode the board's work item events covering `range` up to now.
///
/// Replay starts from the live state, so the window must reach the present
/// even for iterations that ended long ago.
pub(crate) async fn fetch_replay_events(
    sources: &MetricsSources,
    settings: &MetricsSettings,
    instrumentation: &ChartMetrics,
    board_id: Uuid,
    range: &IterationDateRange,
    now: DateTime<Utc>,
) -> MetricsResult<Vec<ReplayEvent>> {
    let start = range.window_start();
    // Exclusive upper bound, stored timestamps have second precision
    let end = range.window_end().max(now + Duration::seconds(1));

    let events = sources
        .events
        .find_work_item_events(board_id, start, end, settings.max_events)
        .await?;

    if events.len() as i64 >= settings.max_events {
        warn!(
            "Event fetch for board {} hit the cap of {} events, older history is truncated",
            board_id, settings.max_events
        );
        instrumentation.event_cap_reached();
    }
    instrumentation.events_replayed(events.len());

    Ok(ReplayEvent::from_audit_events(&events))
}

use crate::charts::{done_column_ids, fetch_replay_events, load_iteration};
use crate::replay::item_state::current_states;
use crate::{
    ChartMetrics, DaySnapshot, ItemStateMap, MetricsResult, MetricsSettings, MetricsSources,
    StateReconstructor,
};

use pm_core::{BurnDownChart, BurnUpChart, ChartPoint, Iteration, IterationDateRange, MeasurementMode};

use std::collections::BTreeSet;
use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};
use uuid::Uuid;

/// Burndown and burnup series for a single iteration
#[derive(Clone)]
pub struct BurnCalculator {
    sources: MetricsSources,
    settings: MetricsSettings,
    instrumentation: ChartMetrics,
}

/// Everything both burn charts derive their lines from
struct BurnReplay {
    iteration: Iteration,
    range: IterationDateRange,
    done_columns: BTreeSet<Uuid>,
    current: ItemStateMap,
    days: Vec<DaySnapshot>,
}

impl BurnCalculator {
    pub fn new(
        sources: MetricsSources,
        settings: MetricsSettings,
        instrumentation: ChartMetrics,
    ) -> Self {
        Self {
            sources,
            settings,
            instrumentation,
        }
    }

    pub async fn burn_down(
        &self,
        iteration_id: Uuid,
        mode: MeasurementMode,
    ) -> MetricsResult<BurnDownChart> {
        self.burn_down_at(iteration_id, mode, Utc::now()).await
    }

    /// Burndown with `now` as the instant the live item state belongs to
    pub async fn burn_down_at(
        &self,
        iteration_id: Uuid,
        mode: MeasurementMode,
        now: DateTime<Utc>,
    ) -> MetricsResult<BurnDownChart> {
        let started = Instant::now();
        let replay = self.replay(iteration_id, now).await?;

        let total = sum_weights(&replay.current, mode, |_| true);
        let dates: Vec<NaiveDate> = replay.days.iter().map(|snapshot| snapshot.day).collect();

        let actual = replay
            .days
            .iter()
            .map(|snapshot| {
                let remaining = sum_weights(&snapshot.items, mode, |column_id| {
                    !replay.done_columns.contains(&column_id)
                });
                ChartPoint::new(snapshot.day, remaining as f64)
            })
            .collect();

        self.instrumentation
            .chart_computed("burndown", started.elapsed());

        Ok(BurnDownChart {
            iteration_id,
            iteration_name: replay.iteration.name,
            start_date: replay.range.first_day(),
            end_date: replay.range.last_day(),
            mode,
            ideal: ideal_line(&dates, total),
            actual,
        })
    }

    pub async fn burn_up(
        &self,
        iteration_id: Uuid,
        mode: MeasurementMode,
    ) -> MetricsResult<BurnUpChart> {
        self.burn_up_at(iteration_id, mode, Utc::now()).await
    }

    pub async fn burn_up_at(
        &self,
        iteration_id: Uuid,
        mode: MeasurementMode,
        now: DateTime<Utc>,
    ) -> MetricsResult<BurnUpChart> {
        let started = Instant::now();
        let replay = self.replay(iteration_id, now).await?;

        let mut scope = Vec::with_capacity(replay.days.len());
        let mut done = Vec::with_capacity(replay.days.len());
        for snapshot in &replay.days {
            let scoped = sum_weights(&snapshot.items, mode, |_| true);
            let completed = sum_weights(&snapshot.items, mode, |column_id| {
                replay.done_columns.contains(&column_id)
            });
            scope.push(ChartPoint::new(snapshot.day, scoped as f64));
            done.push(ChartPoint::new(snapshot.day, completed as f64));
        }

        self.instrumentation.chart_computed("burnup", started.elapsed());

        Ok(BurnUpChart {
            iteration_id,
            iteration_name: replay.iteration.name,
            start_date: replay.range.first_day(),
            end_date: replay.range.last_day(),
            mode,
            scope,
            done,
        })
    }

    async fn replay(&self, iteration_id: Uuid, now: DateTime<Utc>) -> MetricsResult<BurnReplay> {
        let iteration = load_iteration(&self.sources, iteration_id).await?;
        let range = iteration.date_range(self.settings.default_iteration_days);

        let items = self.sources.work_items.find_by_iteration(iteration_id).await?;
        let columns = self.sources.columns.find_by_board(iteration.board_id).await?;
        let done_columns = done_column_ids(&columns);
        let current = current_states(&items);

        let events = fetch_replay_events(
            &self.sources,
            &self.settings,
            &self.instrumentation,
            iteration.board_id,
            &range,
            now,
        )
        .await?;

        let max_days = self.settings.max_chart_days.max(1) as usize;
        if range.day_count() > max_days {
            warn!(
                "Iteration {} spans {} days, charting only the first {}",
                iteration_id,
                range.day_count(),
                max_days
            );
            self.instrumentation.day_cap_reached();
        }

        let days = StateReconstructor::new(iteration_id).reconstruct_at(
            &current,
            &events,
            &range.first_days(max_days),
        );

        debug!(
            "Replayed {} events over {} days for iteration {} ({} live items)",
            events.len(),
            days.len(),
            iteration_id,
            current.len()
        );

        Ok(BurnReplay {
            iteration,
            range,
            done_columns,
            current,
            days,
        })
    }
}

/// Straight line from `total` on the first day to zero on the last.
/// A single-day range is one point at `total`.
pub fn ideal_line(days: &[NaiveDate], total: i64) -> Vec<ChartPoint> {
    let total = total as f64;
    if days.len() <= 1 {
        return days.iter().map(|day| ChartPoint::new(*day, total)).collect();
    }

    let last = (days.len() - 1) as f64;
    days.iter()
        .enumerate()
        .map(|(i, day)| ChartPoint::new(*day, total * (1.0 - i as f64 / last)))
        .collect()
}

/// Sum in-iteration item weights whose column passes `column_filter`
fn sum_weights(
    items: &ItemStateMap,
    mode: MeasurementMode,
    column_filter: impl Fn(Uuid) -> bool,
) -> i64 {
    items
        .values()
        .filter(|state| state.in_iteration && column_filter(state.column_id))
        .map(|state| state.weight_in(mode))
        .sum()
}

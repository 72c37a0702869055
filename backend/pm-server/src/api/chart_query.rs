use crate::{ApiError, ApiResult};

use pm_config::MAX_VELOCITY_ITERATIONS;
use pm_core::MeasurementMode;

use std::str::FromStr;

use serde::Deserialize;

/// Query parameters shared by the per-iteration charts
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    /// `item_count` (default) or `weighted_points`
    pub mode: Option<String>,
}

impl ChartQuery {
    pub fn measurement_mode(&self) -> ApiResult<MeasurementMode> {
        parse_mode(self.mode.as_deref())
    }
}

/// Query parameters for the board velocity chart
#[derive(Debug, Default, Deserialize)]
pub struct VelocityQuery {
    pub mode: Option<String>,
    /// Number of recently closed iterations to include, checked by `iteration_count`
    pub count: Option<String>,
}

impl VelocityQuery {
    pub fn measurement_mode(&self) -> ApiResult<MeasurementMode> {
        parse_mode(self.mode.as_deref())
    }

    pub fn iteration_count(&self) -> ApiResult<Option<u32>> {
        let Some(raw) = self.count.as_deref() else {
            return Ok(None);
        };

        match raw.trim().parse::<u32>() {
            Ok(count) if (1..=MAX_VELOCITY_ITERATIONS).contains(&count) => Ok(Some(count)),
            _ => Err(ApiError::validation(
                format!(
                    "count must be a whole number between 1 and {}, got '{}'",
                    MAX_VELOCITY_ITERATIONS, raw
                ),
                "count",
            )),
        }
    }
}

fn parse_mode(mode: Option<&str>) -> ApiResult<MeasurementMode> {
    match mode {
        None => Ok(MeasurementMode::default()),
        Some(value) => Ok(MeasurementMode::from_str(value)?),
    }
}

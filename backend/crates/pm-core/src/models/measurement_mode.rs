use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How chart aggregates count work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementMode {
    /// Every item weighs 1
    #[default]
    ItemCount,
    /// Items weigh their story points; unestimated items weigh 0
    WeightedPoints,
}

impl MeasurementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ItemCount => "item_count",
            Self::WeightedPoints => "weighted_points",
        }
    }

    pub fn weight_of(&self, story_points: Option<i32>) -> i64 {
        match self {
            Self::ItemCount => 1,
            Self::WeightedPoints => i64::from(story_points.unwrap_or(0).max(0)),
        }
    }

    /// Pick the count or the points figure of a stored aggregate
    pub fn select(&self, count: i64, points: i64) -> i64 {
        match self {
            Self::ItemCount => count,
            Self::WeightedPoints => points,
        }
    }
}

impl FromStr for MeasurementMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "item_count" | "count" => Ok(Self::ItemCount),
            "weighted_points" | "points" => Ok(Self::WeightedPoints),
            _ => Err(CoreError::InvalidMeasurementMode {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for MeasurementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

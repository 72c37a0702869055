use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of entity an audit event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    WorkItem,
    Column,
    Iteration,
    Board,
    Comment,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkItem => "work_item",
            Self::Column => "column",
            Self::Iteration => "iteration",
            Self::Board => "board",
            Self::Comment => "comment",
        }
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "work_item" => Ok(Self::WorkItem),
            "column" => Ok(Self::Column),
            "iteration" => Ok(Self::Iteration),
            "board" => Ok(Self::Board),
            "comment" => Ok(Self::Comment),
            _ => Err(CoreError::InvalidEntityKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

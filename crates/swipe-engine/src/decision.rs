//! Decision Classifier
//!
//! Maps a finalized drag offset onto exactly one outcome.

use serde::{Deserialize, Serialize};

use crate::gesture::Offset;
use crate::SwipeConfig;

/// Committed swipe direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Dislike,
}

/// Outcome of a completed gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Like,
    Dislike,
    OpenDetails,
    Cancel,
}

impl Decision {
    /// The direction this decision commits, if any.
    pub fn action(self) -> Option<SwipeAction> {
        match self {
            Decision::Like => Some(SwipeAction::Like),
            Decision::Dislike => Some(SwipeAction::Dislike),
            Decision::OpenDetails | Decision::Cancel => None,
        }
    }
}

/// Classify a release offset. Horizontal checks precede the vertical one,
/// so a diagonal fling past both thresholds commits the horizontal decision.
pub fn classify(offset: Offset, config: &SwipeConfig) -> Decision {
    if offset.x > config.decision_threshold_px {
        Decision::Like
    } else if offset.x < -config.decision_threshold_px {
        Decision::Dislike
    } else if offset.y < -config.details_threshold_px {
        Decision::OpenDetails
    } else {
        Decision::Cancel
    }
}

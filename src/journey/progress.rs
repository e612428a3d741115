//! Progress aggregation — summary statistics over a journey and its status
//! map.
//!
//! Everything here is a pure function of `(journey, statuses)`; callers can
//! recompute after any mutation and get the same numbers for the same
//! inputs.

use serde::Serialize;

use super::derive::JourneyStep;
use super::status::StatusStore;

/// Summary statistics for a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressStats {
    /// Number of steps in the journey.
    pub total: usize,
    /// Steps whose status is `Completed`.
    pub completed: usize,
    /// Steps the user has touched at all (`InProgress`, `InReview` or
    /// `Completed`).
    pub progressed: usize,
    /// `progressed / total`, rounded to whole percent; 0 for an empty
    /// journey.
    pub percentage: u8,
    /// Highest journey index with a touched status, if any.
    pub last_progressed_index: Option<usize>,
}

/// Aggregate `statuses` over `journey`.
pub fn progress_stats(journey: &[JourneyStep], statuses: &StatusStore) -> ProgressStats {
    let total = journey.len();
    let mut completed = 0;
    let mut progressed = 0;
    let mut last_progressed_index = None;

    for (index, step) in journey.iter().enumerate() {
        let status = statuses.get(&step.id);
        if status.is_touched() {
            progressed += 1;
            last_progressed_index = Some(index);
        }
        if status.is_completed() {
            completed += 1;
        }
    }

    let percentage = if total == 0 {
        0
    } else {
        ((progressed as f64 / total as f64) * 100.0).round() as u8
    };

    ProgressStats {
        total,
        completed,
        progressed,
        percentage,
        last_progressed_index,
    }
}

/// Fill fraction for the vertical journey timeline.
///
/// `None` means an empty track (no touched step, or a journey too short to
/// have a track). `Some(f)` is the fraction of the distance from the first
/// to the last marker; renderers extend it by half a marker so the fill
/// reaches the center of the last touched marker.
pub fn timeline_fill(stats: &ProgressStats) -> Option<f64> {
    let last = stats.last_progressed_index?;
    if stats.total <= 1 {
        return None;
    }
    Some(last as f64 / (stats.total - 1) as f64)
}

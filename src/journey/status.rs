//! Per-step status — the user-driven lifecycle state of each checklist
//! entry, persisted as a flat id→status map.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::store::traits::read_lenient;
use crate::store::{storage_keys, Storage};

use super::derive::JourneyStep;

/// Lifecycle state of a single journey step.
///
/// Every status is a direct-set target at any time; there is no enforced
/// forward-only chain and no terminal state; `Completed` can be reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    NotStarted,
    InProgress,
    InReview,
    Completed,
}

impl StepStatus {
    /// Whether the user has touched this step at all.
    pub fn is_touched(&self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Default for StepStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "in_review" => Ok(Self::InReview),
            "completed" => Ok(Self::Completed),
            other => Err(format!("Unknown status: {other}")),
        }
    }
}

/// The persisted step-id → status mapping for the current journey.
///
/// Absent keys mean [`StepStatus::NotStarted`]; the map deliberately keeps
/// keys for steps that are no longer in the derived journey (they are
/// harmless and ignored by aggregation). Every mutation writes the whole
/// map back through storage before returning.
pub struct StatusStore {
    storage: Arc<dyn Storage>,
    statuses: BTreeMap<String, StepStatus>,
}

impl StatusStore {
    /// Load the mapping from storage.
    ///
    /// A missing or unparseable mapping is treated as absent; in that case,
    /// journeys of at least three steps are seeded with a demo-friendly
    /// default (first two completed, third in progress). The seed lives in
    /// memory only until the first mutation persists the map.
    pub fn load(storage: Arc<dyn Storage>, journey: &[JourneyStep]) -> Result<Self, StorageError> {
        let statuses = match read_lenient::<BTreeMap<String, StepStatus>>(
            storage.as_ref(),
            storage_keys::JOURNEY_STATUSES,
        )? {
            Some(statuses) => statuses,
            None => Self::seed(journey),
        };
        Ok(Self { storage, statuses })
    }

    fn seed(journey: &[JourneyStep]) -> BTreeMap<String, StepStatus> {
        let mut statuses = BTreeMap::new();
        if journey.len() >= 3 {
            statuses.insert(journey[0].id.clone(), StepStatus::Completed);
            statuses.insert(journey[1].id.clone(), StepStatus::Completed);
            statuses.insert(journey[2].id.clone(), StepStatus::InProgress);
        }
        statuses
    }

    /// Status of `step_id`, defaulting to [`StepStatus::NotStarted`].
    pub fn get(&self, step_id: &str) -> StepStatus {
        self.statuses.get(step_id).copied().unwrap_or_default()
    }

    /// Set the status of `step_id` and persist the whole map.
    ///
    /// Setting [`StepStatus::NotStarted`] removes the key; the reset
    /// action and "never touched" are the same observable state. Unknown
    /// step ids are accepted; nothing validates against the current
    /// journey.
    pub fn set(&mut self, step_id: &str, status: StepStatus) -> Result<(), StorageError> {
        if status == StepStatus::NotStarted {
            self.statuses.remove(step_id);
        } else {
            self.statuses.insert(step_id.to_string(), status);
        }
        self.persist()
    }

    /// Reset `step_id` to untouched. No-op if the key is absent.
    pub fn reset(&mut self, step_id: &str) -> Result<(), StorageError> {
        self.set(step_id, StepStatus::NotStarted)
    }

    /// The raw mapping (absent keys are `NotStarted`).
    pub fn statuses(&self) -> &BTreeMap<String, StepStatus> {
        &self.statuses
    }

    fn persist(&self) -> Result<(), StorageError> {
        let value = serde_json::to_value(&self.statuses)?;
        self.storage.write(storage_keys::JOURNEY_STATUSES, &value)
    }
}

//! The journey engine — derivation, per-step status, progress aggregation.

pub mod derive;
pub mod progress;
pub mod status;

pub use derive::{derive_journey, JourneyStep};
pub use progress::{progress_stats, timeline_fill, ProgressStats};
pub use status::{StatusStore, StepStatus};

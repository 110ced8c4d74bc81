//! Course progress policy — decides the status and completion percentage of
//! each course in a stage.
//!
//! `AppState` carries an `Arc<dyn ProgressPolicy>`, so the shipped
//! positional placeholder can be swapped for a data-backed per-user source
//! without touching the stage or course data shapes.

use serde::{Deserialize, Serialize};

/// The three difficulty-ordered phases of the learning roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Foundation,
    Intermediate,
    Advanced,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Foundation, Stage::Intermediate, Stage::Advanced];

    pub fn description(self) -> &'static str {
        match self {
            Stage::Foundation => "Build your core skills",
            Stage::Intermediate => "Build your intermediate skills",
            Stage::Advanced => "Build your advanced skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    Completed,
    InProgress,
    NotStarted,
    Locked,
}

/// Assigns (status, progress) to the course at `index` within `stage`.
///
/// Implementations must be pure over their inputs so roadmap responses stay
/// derivable from the current catalogue alone.
pub trait ProgressPolicy: Send + Sync {
    fn course_state(&self, stage: Stage, index: usize) -> (CourseStatus, f64);
}

/// Positional placeholder policy: progress is a fixed function of the
/// course's position in its stage, not of any per-user record.
// TODO: replace with a policy backed by persisted per-user course progress
// once that table exists; the trait boundary keeps the swap local.
pub struct PositionalPolicy;

impl ProgressPolicy for PositionalPolicy {
    fn course_state(&self, stage: Stage, index: usize) -> (CourseStatus, f64) {
        match stage {
            Stage::Foundation => match index {
                0..=2 => (CourseStatus::Completed, 100.0),
                3 => (CourseStatus::InProgress, 60.0),
                _ => (CourseStatus::NotStarted, 0.0),
            },
            Stage::Intermediate => match index {
                0 => (CourseStatus::InProgress, 45.0),
                _ => (CourseStatus::NotStarted, 0.0),
            },
            Stage::Advanced => (CourseStatus::Locked, 0.0),
        }
    }
}

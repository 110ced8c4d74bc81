// Learning roadmap: difficulty-staged course catalogue with synthesized
// completion state behind a swappable progress policy.

pub mod handlers;
pub mod progress;
pub mod stager;

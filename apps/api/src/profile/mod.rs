// Profile collaborator: owns the persisted user/skill/preference records.
// The scoring engines only ever see snapshots fetched through `queries`.

pub mod handlers;
pub mod queries;

use serde::Deserialize;
use uuid::Uuid;

/// Caller identity for all user-scoped endpoints. Session issuance is out
/// of scope; callers pass the user id explicitly.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub education: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A declared user skill with self-assessed proficiency in [0, 100].
/// Owned by the profile collaborator; the scoring engines only read it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSkillRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_name: String,
    pub proficiency: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserPreferenceRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub interest: Option<String>,
    pub goal: Option<String>,
    pub created_at: DateTime<Utc>,
}

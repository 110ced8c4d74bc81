#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored snapshot of one career-match computation, recorded every time
/// a user with at least one skill requests their matches.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PredictionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub career_matches: Value,
    pub readiness_score: f64,
    pub skill_gaps: Value,
    pub created_at: DateTime<Utc>,
}

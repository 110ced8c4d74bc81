use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::careers::insights::{self, ActivityDay, CareerTrend, DashboardStats};
use crate::careers::matching::{default_matches, ranked_matches, CareerMatch};
use crate::careers::readiness::{self, overall_score, ReadinessScore};
use crate::errors::AppError;
use crate::profile::{queries, UserIdQuery};
use crate::state::AppState;

/// New users with no skills see this many default role suggestions.
const DEFAULT_MATCH_LIMIT: usize = 5;
/// Users with skills see up to this many ranked matches.
const RANKED_MATCH_LIMIT: usize = 10;

/// Computes the current match list for a user, recording a prediction
/// snapshot whenever the user has at least one declared skill.
async fn load_matches(state: &AppState, user_id: Uuid) -> Result<Vec<CareerMatch>, AppError> {
    let skills = queries::get_user_skills(&state.db, user_id).await?;
    if skills.is_empty() {
        return Ok(default_matches(&state.catalog.roles, DEFAULT_MATCH_LIMIT));
    }

    let skill_names: Vec<String> = skills.iter().map(|s| s.skill_name.clone()).collect();
    let matches = ranked_matches(&state.catalog.roles, &skill_names, RANKED_MATCH_LIMIT);

    let snapshot = serde_json::to_value(&matches).unwrap_or_default();
    queries::insert_prediction(&state.db, user_id, &snapshot, overall_score(skills.len()))
        .await?;

    Ok(matches)
}

/// GET /api/v1/careers/matches
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CareerMatch>>, AppError> {
    let matches = load_matches(&state, params.user_id).await?;
    Ok(Json(matches))
}

/// GET /api/v1/careers/matches/:match_id
///
/// `match_id` is a position in the user's current match list.
pub async fn handle_get_match(
    State(state): State<AppState>,
    Path(match_id): Path<usize>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CareerMatch>, AppError> {
    let mut matches = load_matches(&state, params.user_id).await?;
    if match_id >= matches.len() {
        return Err(AppError::NotFound(format!(
            "Career match {match_id} not found"
        )));
    }
    Ok(Json(matches.swap_remove(match_id)))
}

/// GET /api/v1/careers/readiness
pub async fn handle_readiness(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ReadinessScore>, AppError> {
    let skills = queries::get_user_skills(&state.db, params.user_id).await?;
    let preferences = queries::get_user_preferences(&state.db, params.user_id).await?;
    let user = queries::get_user(&state.db, params.user_id).await?;

    let education = user.as_ref().and_then(|u| u.education.as_deref());
    Ok(Json(readiness::readiness_score(
        &skills,
        &preferences,
        education,
    )))
}

/// GET /api/v1/careers/dashboard-stats
pub async fn handle_dashboard_stats(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DashboardStats>, AppError> {
    let skills = queries::get_user_skills(&state.db, params.user_id).await?;
    let preferences = queries::get_user_preferences(&state.db, params.user_id).await?;
    let user = queries::get_user(&state.db, params.user_id).await?;
    let matches = load_matches(&state, params.user_id).await?;

    let education = user.as_ref().and_then(|u| u.education.as_deref());
    let readiness = readiness::readiness_score(&skills, &preferences, education);

    Ok(Json(insights::dashboard_stats(
        &readiness,
        skills.len(),
        matches.len(),
    )))
}

/// GET /api/v1/careers/trends
pub async fn handle_trends() -> Json<Vec<CareerTrend>> {
    Json(insights::career_trends())
}

/// GET /api/v1/careers/activity
pub async fn handle_activity() -> Json<Vec<ActivityDay>> {
    Json(insights::weekly_activity())
}

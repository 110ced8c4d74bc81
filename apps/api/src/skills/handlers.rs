use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::profile::{queries, UserIdQuery};
use crate::skills::gaps::{self, PrioritySkill, SkillAnalysis, SkillGap};
use crate::state::AppState;

/// GET /api/v1/skills/analysis
pub async fn handle_analysis(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SkillAnalysis>, AppError> {
    let skills = queries::get_user_skills(&state.db, params.user_id).await?;
    Ok(Json(gaps::skill_analysis(&skills)))
}

/// GET /api/v1/skills/gaps
pub async fn handle_gaps(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<SkillGap>>, AppError> {
    let skills = queries::get_user_skills(&state.db, params.user_id).await?;
    Ok(Json(gaps::skill_gaps(&skills)))
}

/// GET /api/v1/skills/priority
pub async fn handle_priority(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<PrioritySkill>>, AppError> {
    let skills = queries::get_user_skills(&state.db, params.user_id).await?;
    let gap_list = gaps::skill_gaps(&skills);
    Ok(Json(gaps::priority_skills(&gap_list)))
}

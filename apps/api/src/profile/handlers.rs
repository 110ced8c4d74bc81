use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{UserPreferenceRow, UserRow, UserSkillRow};
use crate::profile::{queries, UserIdQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillCreate {
    pub skill_name: String,
    pub proficiency: f64,
}

#[derive(Debug, Deserialize)]
pub struct SkillUpdate {
    pub proficiency: f64,
}

#[derive(Debug, Deserialize)]
pub struct PreferenceCreate {
    pub interest: Option<String>,
    pub goal: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserRow,
    pub skills: Vec<UserSkillRow>,
    pub preferences: Vec<UserPreferenceRow>,
}

/// Input validation at the collaborator boundary: the engines assume
/// proficiencies are already within [0, 100].
fn validate_proficiency(proficiency: f64) -> Result<(), AppError> {
    if !(0.0..=100.0).contains(&proficiency) {
        return Err(AppError::Validation(format!(
            "proficiency must be between 0 and 100, got {proficiency}"
        )));
    }
    Ok(())
}

/// GET /api/v1/users/me
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = queries::get_user(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;
    let skills = queries::get_user_skills(&state.db, params.user_id).await?;
    let preferences = queries::get_user_preferences(&state.db, params.user_id).await?;

    Ok(Json(ProfileResponse {
        user,
        skills,
        preferences,
    }))
}

/// PUT /api/v1/users/me
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<ProfileUpdate>,
) -> Result<Json<UserRow>, AppError> {
    let user = queries::update_user(
        &state.db,
        params.user_id,
        req.name.as_deref(),
        req.education.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;
    Ok(Json(user))
}

/// GET /api/v1/users/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<UserSkillRow>>, AppError> {
    let skills = queries::get_user_skills(&state.db, params.user_id).await?;
    Ok(Json(skills))
}

/// POST /api/v1/users/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<SkillCreate>,
) -> Result<(StatusCode, Json<UserSkillRow>), AppError> {
    if req.skill_name.trim().is_empty() {
        return Err(AppError::Validation("skill_name must not be empty".to_string()));
    }
    validate_proficiency(req.proficiency)?;

    let skill = queries::add_skill(
        &state.db,
        params.user_id,
        req.skill_name.trim(),
        req.proficiency,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// PUT /api/v1/users/skills/:skill_id
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path(skill_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<SkillUpdate>,
) -> Result<Json<UserSkillRow>, AppError> {
    validate_proficiency(req.proficiency)?;

    let skill = queries::update_skill(&state.db, params.user_id, skill_id, req.proficiency)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Skill {skill_id} not found")))?;
    Ok(Json(skill))
}

/// DELETE /api/v1/users/skills/:skill_id
pub async fn handle_delete_skill(
    State(state): State<AppState>,
    Path(skill_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let deleted = queries::delete_skill(&state.db, params.user_id, skill_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Skill {skill_id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<UserPreferenceRow>>, AppError> {
    let preferences = queries::get_user_preferences(&state.db, params.user_id).await?;
    Ok(Json(preferences))
}

/// POST /api/v1/users/preferences
pub async fn handle_add_preference(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<PreferenceCreate>,
) -> Result<(StatusCode, Json<UserPreferenceRow>), AppError> {
    let preference = queries::add_preference(
        &state.db,
        params.user_id,
        req.interest.as_deref(),
        req.goal.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(preference)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_bounds() {
        assert!(validate_proficiency(0.0).is_ok());
        assert!(validate_proficiency(100.0).is_ok());
        assert!(validate_proficiency(-0.1).is_err());
        assert!(validate_proficiency(100.1).is_err());
    }
}

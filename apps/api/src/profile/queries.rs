//! Persistence queries for users, skills, preferences, and predictions.
//! Plain runtime-bound sqlx queries; no engine logic lives here.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{UserPreferenceRow, UserRow, UserSkillRow};

pub async fn get_user(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, AppError> {
    let user = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?;
    Ok(user)
}

pub async fn get_user_skills(db: &PgPool, user_id: Uuid) -> Result<Vec<UserSkillRow>, AppError> {
    let skills = sqlx::query_as(
        "SELECT * FROM user_skills WHERE user_id = $1 ORDER BY created_at, id",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(skills)
}

pub async fn get_user_preferences(
    db: &PgPool,
    user_id: Uuid,
) -> Result<Vec<UserPreferenceRow>, AppError> {
    let preferences = sqlx::query_as(
        "SELECT * FROM user_preferences WHERE user_id = $1 ORDER BY created_at, id",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(preferences)
}

pub async fn add_skill(
    db: &PgPool,
    user_id: Uuid,
    skill_name: &str,
    proficiency: f64,
) -> Result<UserSkillRow, AppError> {
    let skill = sqlx::query_as(
        r#"
        INSERT INTO user_skills (id, user_id, skill_name, proficiency, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(skill_name)
    .bind(proficiency)
    .fetch_one(db)
    .await?;
    Ok(skill)
}

pub async fn update_skill(
    db: &PgPool,
    user_id: Uuid,
    skill_id: Uuid,
    proficiency: f64,
) -> Result<Option<UserSkillRow>, AppError> {
    let skill = sqlx::query_as(
        r#"
        UPDATE user_skills
        SET proficiency = $3
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(skill_id)
    .bind(user_id)
    .bind(proficiency)
    .fetch_optional(db)
    .await?;
    Ok(skill)
}

pub async fn delete_skill(db: &PgPool, user_id: Uuid, skill_id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM user_skills WHERE id = $1 AND user_id = $2")
        .bind(skill_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn add_preference(
    db: &PgPool,
    user_id: Uuid,
    interest: Option<&str>,
    goal: Option<&str>,
) -> Result<UserPreferenceRow, AppError> {
    let preference = sqlx::query_as(
        r#"
        INSERT INTO user_preferences (id, user_id, interest, goal, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(interest)
    .bind(goal)
    .fetch_one(db)
    .await?;
    Ok(preference)
}

pub async fn update_user(
    db: &PgPool,
    user_id: Uuid,
    name: Option<&str>,
    education: Option<&str>,
) -> Result<Option<UserRow>, AppError> {
    let user = sqlx::query_as(
        r#"
        UPDATE users
        SET name = COALESCE($2, name),
            education = COALESCE($3, education),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(education)
    .fetch_optional(db)
    .await?;
    Ok(user)
}

/// Records one career-match computation for later trend analysis.
pub async fn insert_prediction(
    db: &PgPool,
    user_id: Uuid,
    career_matches: &Value,
    readiness_score: f64,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO predictions
            (id, user_id, career_matches, readiness_score, skill_gaps, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(career_matches)
    .bind(readiness_score)
    .bind(Value::Array(Vec::new()))
    .execute(db)
    .await?;
    Ok(())
}

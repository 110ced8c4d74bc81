use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::roadmap::progress::CourseStatus;
use crate::roadmap::stager::{
    build_roadmap, course_by_index, recommended_courses, CourseProgress, LearningRoadmap,
    RecommendedCourse,
};
use crate::state::AppState;

/// GET /api/v1/roadmap
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
) -> Result<Json<LearningRoadmap>, AppError> {
    let roadmap = build_roadmap(&state.catalog.courses, state.progress_policy.as_ref());
    Ok(Json(roadmap))
}

/// GET /api/v1/roadmap/recommended
pub async fn handle_recommended() -> Json<Vec<RecommendedCourse>> {
    Json(recommended_courses())
}

/// GET /api/v1/roadmap/courses/:course_id
pub async fn handle_get_course(
    State(state): State<AppState>,
    Path(course_id): Path<usize>,
) -> Result<Json<CourseProgress>, AppError> {
    course_by_index(&state.catalog.courses, course_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Course {course_id} not found")))
}

#[derive(Debug, Deserialize)]
pub struct CourseProgressUpdate {
    pub progress: f64,
    pub status: CourseStatus,
}

/// PUT /api/v1/roadmap/courses/:course_id
///
/// Echoes the course with the submitted status and progress. Per-user
/// course progress is not persisted yet; once it is, this handler writes
/// through to the same store the progress policy reads from.
pub async fn handle_update_course(
    State(state): State<AppState>,
    Path(course_id): Path<usize>,
    Json(req): Json<CourseProgressUpdate>,
) -> Result<Json<CourseProgress>, AppError> {
    if !(0.0..=100.0).contains(&req.progress) {
        return Err(AppError::Validation(format!(
            "progress must be between 0 and 100, got {}",
            req.progress
        )));
    }

    let mut course = course_by_index(&state.catalog.courses, course_id)
        .ok_or_else(|| AppError::NotFound(format!("Course {course_id} not found")))?;
    course.progress = req.progress;
    course.status = req.status;
    Ok(Json(course))
}

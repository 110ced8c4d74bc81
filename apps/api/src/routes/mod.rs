pub mod health;

use axum::{routing::get, Router};

use crate::careers::handlers as careers;
use crate::profile::handlers as profile;
use crate::roadmap::handlers as roadmap;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Careers API
        .route("/api/v1/careers/matches", get(careers::handle_get_matches))
        .route(
            "/api/v1/careers/matches/:match_id",
            get(careers::handle_get_match),
        )
        .route("/api/v1/careers/readiness", get(careers::handle_readiness))
        .route(
            "/api/v1/careers/dashboard-stats",
            get(careers::handle_dashboard_stats),
        )
        .route("/api/v1/careers/trends", get(careers::handle_trends))
        .route("/api/v1/careers/activity", get(careers::handle_activity))
        // Skills API
        .route("/api/v1/skills/analysis", get(skills::handle_analysis))
        .route("/api/v1/skills/gaps", get(skills::handle_gaps))
        .route("/api/v1/skills/priority", get(skills::handle_priority))
        // Roadmap API
        .route("/api/v1/roadmap", get(roadmap::handle_get_roadmap))
        .route(
            "/api/v1/roadmap/recommended",
            get(roadmap::handle_recommended),
        )
        .route(
            "/api/v1/roadmap/courses/:course_id",
            get(roadmap::handle_get_course).put(roadmap::handle_update_course),
        )
        // Profile API
        .route(
            "/api/v1/users/me",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        .route(
            "/api/v1/users/skills",
            get(profile::handle_get_skills).post(profile::handle_add_skill),
        )
        .route(
            "/api/v1/users/skills/:skill_id",
            axum::routing::put(profile::handle_update_skill).delete(profile::handle_delete_skill),
        )
        .route(
            "/api/v1/users/preferences",
            get(profile::handle_get_preferences).post(profile::handle_add_preference),
        )
        .with_state(state)
}

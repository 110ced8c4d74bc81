//! Readiness Scorer — composite job-market readiness score with sub-scores
//! for technical skills, soft skills, and experience.
//!
//! The overall score is an intentionally coarse step function of skill
//! count. The breakpoints are product-defined and must not be smoothed.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::user::{UserPreferenceRow, UserSkillRow};

/// Composite readiness score plus the inputs that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessScore {
    pub overall_score: f64,
    pub technical_skills_score: f64,
    pub soft_skills_score: f64,
    pub experience_score: f64,
    /// Explainability payload: {skills_count, education, interests_count}.
    pub breakdown: Value,
}

/// Step function of skill count. Boundaries belong to the higher band:
/// 0 → 25, 1–4 → 45, 5–9 → 65, 10–14 → 78, 15+ → 85.
pub fn overall_score(skill_count: usize) -> f64 {
    match skill_count {
        0 => 25.0,
        1..=4 => 45.0,
        5..=9 => 65.0,
        10..=14 => 78.0,
        _ => 85.0,
    }
}

/// min(100, 50 + 3 × skill count).
pub fn technical_score(skill_count: usize) -> f64 {
    (50 + 3 * skill_count as u32).min(100) as f64
}

/// min(100, 60 + 10 × interest count). Only preferences with a declared
/// interest count.
pub fn soft_score(interest_count: usize) -> f64 {
    (60 + 10 * interest_count as u32).min(100) as f64
}

/// Maps a free-text education string to a score. Substring match, case
/// sensitive, "Postgraduate" checked first.
pub fn education_score(education: Option<&str>) -> f64 {
    match education {
        Some(e) if e.contains("Postgraduate") => 90.0,
        Some(e) if e.contains("Undergraduate") => 70.0,
        _ => 50.0,
    }
}

/// Mean of education score and technical score.
pub fn experience_score(education: Option<&str>, technical: f64) -> f64 {
    (education_score(education) + technical) / 2.0
}

/// Assembles the full readiness score from a profile snapshot.
pub fn readiness_score(
    skills: &[UserSkillRow],
    preferences: &[UserPreferenceRow],
    education: Option<&str>,
) -> ReadinessScore {
    let skill_count = skills.len();
    let interest_count = preferences.iter().filter(|p| p.interest.is_some()).count();

    let technical = technical_score(skill_count);

    ReadinessScore {
        overall_score: overall_score(skill_count),
        technical_skills_score: technical,
        soft_skills_score: soft_score(interest_count),
        experience_score: experience_score(education, technical),
        breakdown: json!({
            "skills_count": skill_count,
            "education": education.unwrap_or("Not specified"),
            "interests_count": interest_count,
        }),
    }
}

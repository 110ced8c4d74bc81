//! Skill-Gap Analyzer — distance between a user's current proficiencies and
//! a fixed target-skill catalogue, plus the 6-dimension radar snapshot.
//!
//! Two distinct target constants are in play: gap entries aim at 90, the
//! radar aims at 85. The asymmetry is deliberate and both must stay as-is.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::user::UserSkillRow;

/// Target proficiency for every gap entry.
pub const GAP_TARGET_LEVEL: f64 = 90.0;
/// Target proficiency for every radar dimension.
pub const RADAR_TARGET_LEVEL: f64 = 85.0;

/// The canonical 16-skill target list. Catalogue data, not logic: gaps are
/// computed against exactly these skills, in this order.
pub const TARGET_SKILLS: [&str; 16] = [
    "Frontend Dev",
    "Backend",
    "DevOps",
    "System Design",
    "Testing",
    "Cloud",
    "TypeScript",
    "Docker",
    "Kubernetes",
    "React",
    "Node.js",
    "SQL",
    "Python",
    "JavaScript",
    "Machine Learning",
    "Data Analysis",
];

/// Skills treated as High priority; everything else is Medium.
const HIGH_PRIORITY_SKILLS: [&str; 7] = [
    "System Design",
    "DevOps",
    "Cloud",
    "TypeScript",
    "Frontend Dev",
    "Backend",
    "Testing",
];

/// The six competency dimensions shown on the radar chart.
const RADAR_SKILLS: [&str; 6] = [
    "Frontend Dev",
    "Backend",
    "DevOps",
    "System Design",
    "Testing",
    "Cloud",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    /// Reserved tier: no current rule produces it, but the effort mapping
    /// keeps a duration for it.
    Low,
}

impl Priority {
    pub fn estimated_effort(self) -> &'static str {
        match self {
            Priority::High => "4-6 weeks",
            Priority::Medium => "2-3 weeks",
            Priority::Low => "1-2 weeks",
        }
    }
}

/// Gap progress state. `Completed` is never assigned here; it only arrives
/// through the external profile-update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapStatus {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill_name: String,
    pub current_level: f64,
    pub target_level: f64,
    pub priority: Priority,
    pub estimated_effort: String,
    pub gap_score: f64,
    pub status: GapStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarPoint {
    pub skill: String,
    pub current: f64,
    pub target: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub total_skills: usize,
    pub high_priority_count: usize,
    pub in_progress_count: usize,
    pub completed_count: usize,
    pub overall_gap_score: f64,
    pub radar_data: Vec<RadarPoint>,
    pub skill_gaps: Vec<SkillGap>,
}

/// A high-priority gap in summary form for the priority-skills endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritySkill {
    pub skill: String,
    pub priority: Priority,
    pub effort: String,
}

fn proficiency_by_name(user_skills: &[UserSkillRow]) -> HashMap<&str, f64> {
    user_skills
        .iter()
        .map(|s| (s.skill_name.as_str(), s.proficiency))
        .collect()
}

fn priority_for(skill: &str) -> Priority {
    if HIGH_PRIORITY_SKILLS.contains(&skill) {
        Priority::High
    } else {
        Priority::Medium
    }
}

/// One gap entry per target skill, sorted by descending gap score. The sort
/// is stable, so equal gaps keep target-catalogue order.
pub fn skill_gaps(user_skills: &[UserSkillRow]) -> Vec<SkillGap> {
    let proficiency = proficiency_by_name(user_skills);

    let mut gaps: Vec<SkillGap> = TARGET_SKILLS
        .iter()
        .map(|&target| {
            let current = proficiency.get(target).copied().unwrap_or(0.0);
            let priority = priority_for(target);
            SkillGap {
                skill_name: target.to_string(),
                current_level: current,
                target_level: GAP_TARGET_LEVEL,
                priority,
                estimated_effort: priority.estimated_effort().to_string(),
                gap_score: GAP_TARGET_LEVEL - current,
                status: if current == 0.0 {
                    GapStatus::NotStarted
                } else {
                    GapStatus::InProgress
                },
            }
        })
        .collect();

    gaps.sort_by(|a, b| {
        b.gap_score
            .partial_cmp(&a.gap_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    gaps
}

/// Arithmetic mean of all gap scores, rounded to one decimal. 0 for an
/// empty list.
pub fn overall_gap_score(gaps: &[SkillGap]) -> f64 {
    if gaps.is_empty() {
        return 0.0;
    }
    let mean = gaps.iter().map(|g| g.gap_score).sum::<f64>() / gaps.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Current-vs-target values for the six radar dimensions. Always exactly
/// six entries regardless of the user's skill count.
pub fn radar_series(user_skills: &[UserSkillRow]) -> Vec<RadarPoint> {
    let proficiency = proficiency_by_name(user_skills);

    RADAR_SKILLS
        .iter()
        .map(|&skill| RadarPoint {
            skill: skill.to_string(),
            current: proficiency.get(skill).copied().unwrap_or(0.0),
            target: RADAR_TARGET_LEVEL,
        })
        .collect()
}

/// The full analysis bundle served by the skills dashboard.
pub fn skill_analysis(user_skills: &[UserSkillRow]) -> SkillAnalysis {
    let gaps = skill_gaps(user_skills);

    SkillAnalysis {
        total_skills: user_skills.len(),
        high_priority_count: gaps.iter().filter(|g| g.priority == Priority::High).count(),
        in_progress_count: gaps
            .iter()
            .filter(|g| g.status == GapStatus::InProgress)
            .count(),
        completed_count: gaps
            .iter()
            .filter(|g| g.status == GapStatus::Completed)
            .count(),
        overall_gap_score: overall_gap_score(&gaps),
        radar_data: radar_series(user_skills),
        skill_gaps: gaps,
    }
}

/// High-priority gaps only, in summary form.
pub fn priority_skills(gaps: &[SkillGap]) -> Vec<PrioritySkill> {
    gaps.iter()
        .filter(|g| g.priority == Priority::High)
        .map(|g| PrioritySkill {
            skill: g.skill_name.clone(),
            priority: g.priority,
            effort: g.estimated_effort.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn skill_row(name: &str, proficiency: f64) -> UserSkillRow {
        UserSkillRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            skill_name: name.to_string(),
            proficiency,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_gap_list_covers_whole_target_catalogue() {
        let gaps = skill_gaps(&[]);
        assert_eq!(gaps.len(), TARGET_SKILLS.len());
        for gap in &gaps {
            assert_eq!(gap.target_level, 90.0);
            assert_eq!(gap.gap_score, 90.0 - gap.current_level);
        }
    }

    #[test]
    fn test_known_skill_becomes_in_progress() {
        let gaps = skill_gaps(&[skill_row("TypeScript", 80.0)]);
        let ts = gaps.iter().find(|g| g.skill_name == "TypeScript").unwrap();
        assert_eq!(ts.current_level, 80.0);
        assert_eq!(ts.gap_score, 10.0);
        assert_eq!(ts.status, GapStatus::InProgress);

        let docker = gaps.iter().find(|g| g.skill_name == "Docker").unwrap();
        assert_eq!(docker.current_level, 0.0);
        assert_eq!(docker.status, GapStatus::NotStarted);
    }

    #[test]
    fn test_gaps_sorted_descending() {
        let gaps = skill_gaps(&[
            skill_row("TypeScript", 80.0),
            skill_row("Docker", 40.0),
        ]);
        for pair in gaps.windows(2) {
            assert!(pair[0].gap_score >= pair[1].gap_score);
        }
        // The smallest gap is the strongest skill.
        assert_eq!(gaps.last().unwrap().skill_name, "TypeScript");
    }

    #[test]
    fn test_priority_assignment() {
        let gaps = skill_gaps(&[]);
        let priority_of = |name: &str| {
            gaps.iter()
                .find(|g| g.skill_name == name)
                .unwrap()
                .priority
        };
        assert_eq!(priority_of("System Design"), Priority::High);
        assert_eq!(priority_of("Testing"), Priority::High);
        assert_eq!(priority_of("Python"), Priority::Medium);
        assert_eq!(priority_of("React"), Priority::Medium);
    }

    #[test]
    fn test_effort_follows_priority() {
        assert_eq!(Priority::High.estimated_effort(), "4-6 weeks");
        assert_eq!(Priority::Medium.estimated_effort(), "2-3 weeks");
        assert_eq!(Priority::Low.estimated_effort(), "1-2 weeks");
    }

    #[test]
    fn test_overall_gap_score_mean() {
        let gaps = skill_gaps(&[]);
        // Every current level is 0, so every gap is 90.
        assert_eq!(overall_gap_score(&gaps), 90.0);
        assert_eq!(overall_gap_score(&[]), 0.0);
    }

    #[test]
    fn test_radar_always_six_dimensions() {
        assert_eq!(radar_series(&[]).len(), 6);
        let series = radar_series(&[skill_row("Backend", 55.0)]);
        assert_eq!(series.len(), 6);
        for point in &series {
            assert_eq!(point.target, 85.0);
        }
        let backend = series.iter().find(|p| p.skill == "Backend").unwrap();
        assert_eq!(backend.current, 55.0);
    }

    #[test]
    fn test_radar_and_gap_targets_differ() {
        assert_eq!(GAP_TARGET_LEVEL, 90.0);
        assert_eq!(RADAR_TARGET_LEVEL, 85.0);
    }

    #[test]
    fn test_analysis_counts() {
        let analysis = skill_analysis(&[
            skill_row("TypeScript", 80.0),
            skill_row("Rust", 95.0), // not a target skill
        ]);
        assert_eq!(analysis.total_skills, 2);
        assert_eq!(analysis.high_priority_count, 7);
        assert_eq!(analysis.in_progress_count, 1);
        // Completed is never assigned by the analyzer.
        assert_eq!(analysis.completed_count, 0);
        assert_eq!(analysis.skill_gaps.len(), 16);
        assert_eq!(analysis.radar_data.len(), 6);
    }

    #[test]
    fn test_priority_skills_filters_high_only() {
        let gaps = skill_gaps(&[]);
        let priority = priority_skills(&gaps);
        assert_eq!(priority.len(), 7);
        assert!(priority.iter().all(|p| p.priority == Priority::High));
        assert!(priority.iter().all(|p| p.effort == "4-6 weeks"));
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&GapStatus::NotStarted).unwrap(),
            r#""not-started""#
        );
        assert_eq!(
            serde_json::to_string(&GapStatus::InProgress).unwrap(),
            r#""in-progress""#
        );
    }
}

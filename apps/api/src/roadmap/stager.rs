//! Roadmap Stager — partitions the course catalogue into the three
//! difficulty stages and synthesizes per-course and per-stage completion
//! state through the injected `ProgressPolicy`.

use serde::{Deserialize, Serialize};

use crate::catalog::{CourseCatalog, CourseRecord, Difficulty};
use crate::roadmap::progress::{CourseStatus, ProgressPolicy, Stage};

/// Fixed hours-invested figure surfaced in the roadmap stats.
pub const HOURS_INVESTED: u32 = 142;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Position within the stage, 1-based, for display.
    pub id: usize,
    pub title: String,
    pub duration: String,
    pub topics: u32,
    pub status: CourseStatus,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStage {
    pub stage: Stage,
    pub description: String,
    pub progress: f64,
    pub courses: Vec<CourseProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub target_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStats {
    pub courses_completed: usize,
    pub courses_in_progress: usize,
    pub hours_invested: u32,
    pub overall_progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub stages: Vec<RoadmapStage>,
    pub milestones: Vec<Milestone>,
    pub stats: RoadmapStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedCourse {
    pub title: String,
    pub reason: String,
    pub impact: String,
}

/// Difficulty-to-stage mapping. Anything that is not Beginner or
/// Intermediate lands in Advanced.
pub fn stage_for(difficulty: Difficulty) -> Stage {
    match difficulty {
        Difficulty::Beginner => Stage::Foundation,
        Difficulty::Intermediate => Stage::Intermediate,
        Difficulty::Advanced => Stage::Advanced,
    }
}

/// Builds the full staged roadmap from the course catalogue, with course
/// states supplied by the progress policy.
pub fn build_roadmap(catalog: &CourseCatalog, policy: &dyn ProgressPolicy) -> LearningRoadmap {
    let stages: Vec<RoadmapStage> = Stage::ALL
        .into_iter()
        .map(|stage| {
            let courses: Vec<CourseProgress> = catalog
                .all()
                .iter()
                .filter(|c| stage_for(c.difficulty) == stage)
                .enumerate()
                .map(|(idx, course)| {
                    let (status, progress) = policy.course_state(stage, idx);
                    to_course_progress(idx + 1, course, status, progress)
                })
                .collect();

            RoadmapStage {
                stage,
                description: stage.description().to_string(),
                progress: stage_progress(&courses),
                courses,
            }
        })
        .collect();

    let stats = roadmap_stats(&stages);

    LearningRoadmap {
        stages,
        milestones: milestones(),
        stats,
    }
}

/// Fraction of the stage's courses that are completed, as a percentage.
/// An empty stage reports 0 rather than dividing by zero.
fn stage_progress(courses: &[CourseProgress]) -> f64 {
    if courses.is_empty() {
        return 0.0;
    }
    let completed = courses
        .iter()
        .filter(|c| c.status == CourseStatus::Completed)
        .count();
    completed as f64 / courses.len() as f64 * 100.0
}

fn roadmap_stats(stages: &[RoadmapStage]) -> RoadmapStats {
    let total: usize = stages.iter().map(|s| s.courses.len()).sum();
    let completed: usize = stages
        .iter()
        .flat_map(|s| &s.courses)
        .filter(|c| c.status == CourseStatus::Completed)
        .count();
    let in_progress: usize = stages
        .iter()
        .flat_map(|s| &s.courses)
        .filter(|c| c.status == CourseStatus::InProgress)
        .count();

    let overall_progress = if total == 0 {
        0.0
    } else {
        (completed as f64 / total as f64 * 1000.0).round() / 10.0
    };

    RoadmapStats {
        courses_completed: completed,
        courses_in_progress: in_progress,
        hours_invested: HOURS_INVESTED,
        overall_progress,
    }
}

/// Fixed milestone list shown alongside the roadmap.
pub fn milestones() -> Vec<Milestone> {
    vec![
        Milestone {
            id: 1,
            title: "Frontend Developer Ready".to_string(),
            completed: true,
            target_date: "Dec 2025".to_string(),
        },
        Milestone {
            id: 2,
            title: "Full Stack Capable".to_string(),
            completed: false,
            target_date: "Mar 2026".to_string(),
        },
        Milestone {
            id: 3,
            title: "Senior Engineer Level".to_string(),
            completed: false,
            target_date: "Aug 2026".to_string(),
        },
    ]
}

/// Fixed course recommendations for the roadmap sidebar.
pub fn recommended_courses() -> Vec<RecommendedCourse> {
    fn rec(title: &str, reason: &str, impact: &str) -> RecommendedCourse {
        RecommendedCourse {
            title: title.to_string(),
            reason: reason.to_string(),
            impact: impact.to_string(),
        }
    }

    vec![
        rec(
            "TypeScript Advanced",
            "Boosts your technical skills score by 8 points",
            "High",
        ),
        rec(
            "React State Management",
            "Essential for Frontend Developer roles",
            "High",
        ),
        rec(
            "System Design Principles",
            "Frequently asked in senior developer interviews",
            "Medium",
        ),
    ]
}

/// Positional lookup into the flat course catalogue (0-based), presented as
/// an untouched course.
pub fn course_by_index(catalog: &CourseCatalog, index: usize) -> Option<CourseProgress> {
    catalog
        .by_index(index)
        .map(|course| to_course_progress(index, course, CourseStatus::NotStarted, 0.0))
}

fn to_course_progress(
    id: usize,
    course: &CourseRecord,
    status: CourseStatus,
    progress: f64,
) -> CourseProgress {
    CourseProgress {
        id,
        title: course.name.clone(),
        duration: course.duration_label(),
        topics: course.topics,
        status,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::courses::default_courses;
    use crate::roadmap::progress::PositionalPolicy;

    fn default_catalog() -> CourseCatalog {
        CourseCatalog::with_courses(default_courses())
    }

    #[test]
    fn test_stage_mapping() {
        assert_eq!(stage_for(Difficulty::Beginner), Stage::Foundation);
        assert_eq!(stage_for(Difficulty::Intermediate), Stage::Intermediate);
        assert_eq!(stage_for(Difficulty::Advanced), Stage::Advanced);
    }

    #[test]
    fn test_roadmap_partitions_default_catalogue() {
        let roadmap = build_roadmap(&default_catalog(), &PositionalPolicy);
        assert_eq!(roadmap.stages.len(), 3);

        let by_stage = |s: Stage| {
            roadmap
                .stages
                .iter()
                .find(|st| st.stage == s)
                .unwrap()
                .courses
                .len()
        };
        // Default set: 2 beginner, 5 intermediate, 3 advanced.
        assert_eq!(by_stage(Stage::Foundation), 2);
        assert_eq!(by_stage(Stage::Intermediate), 5);
        assert_eq!(by_stage(Stage::Advanced), 3);
    }

    #[test]
    fn test_positional_states_in_roadmap() {
        let roadmap = build_roadmap(&default_catalog(), &PositionalPolicy);

        let foundation = &roadmap.stages[0];
        assert!(foundation
            .courses
            .iter()
            .all(|c| c.status == CourseStatus::Completed));
        assert_eq!(foundation.progress, 100.0);

        let intermediate = &roadmap.stages[1];
        assert_eq!(intermediate.courses[0].status, CourseStatus::InProgress);
        assert_eq!(intermediate.courses[0].progress, 45.0);
        assert_eq!(intermediate.progress, 0.0);

        let advanced = &roadmap.stages[2];
        assert!(advanced
            .courses
            .iter()
            .all(|c| c.status == CourseStatus::Locked));
        assert_eq!(advanced.progress, 0.0);
    }

    #[test]
    fn test_stats_aggregate_across_stages() {
        let roadmap = build_roadmap(&default_catalog(), &PositionalPolicy);
        assert_eq!(roadmap.stats.courses_completed, 2);
        assert_eq!(roadmap.stats.courses_in_progress, 1);
        assert_eq!(roadmap.stats.hours_invested, HOURS_INVESTED);
        // 2 completed of 10 courses.
        assert_eq!(roadmap.stats.overall_progress, 20.0);
    }

    #[test]
    fn test_empty_catalogue_reports_zero_progress() {
        let empty = CourseCatalog::with_courses(Vec::new());
        let roadmap = build_roadmap(&empty, &PositionalPolicy);
        assert_eq!(roadmap.stats.overall_progress, 0.0);
        for stage in &roadmap.stages {
            assert_eq!(stage.progress, 0.0);
            assert!(stage.courses.is_empty());
        }
    }

    #[test]
    fn test_course_ids_are_stage_local_and_one_based() {
        let roadmap = build_roadmap(&default_catalog(), &PositionalPolicy);
        for stage in &roadmap.stages {
            for (idx, course) in stage.courses.iter().enumerate() {
                assert_eq!(course.id, idx + 1);
            }
        }
    }

    #[test]
    fn test_course_by_index() {
        let catalog = default_catalog();
        let course = course_by_index(&catalog, 0).unwrap();
        assert_eq!(course.title, "JavaScript Fundamentals");
        assert_eq!(course.status, CourseStatus::NotStarted);
        assert_eq!(course.duration, "8 hours");
        assert!(course_by_index(&catalog, 999).is_none());
    }

    #[test]
    fn test_milestones_fixed_list() {
        let list = milestones();
        assert_eq!(list.len(), 3);
        assert!(list[0].completed);
        assert!(!list[1].completed);
    }

    #[test]
    fn test_recommended_courses_fixed_list() {
        assert_eq!(recommended_courses().len(), 3);
    }
}

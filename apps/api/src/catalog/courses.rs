#![allow(dead_code)]

//! Course catalogue — learning courses with difficulty, duration, and topic
//! count, loaded from `courses.csv` under the dataset directory.
//!
//! Expected header: `Course Name,Difficulty,Duration,Topics,Category`.
//! The dataset export never quotes fields, so a plain comma split is enough.
//! A missing or malformed file falls back to the built-in default set.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Course difficulty, which also determines the roadmap stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Unknown difficulty labels land in Advanced, mirroring the stager's
    /// catch-all branch. A missing field is treated as Beginner.
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" => Difficulty::Beginner,
            "Beginner" => Difficulty::Beginner,
            "Intermediate" => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub difficulty: Difficulty,
    pub duration_hours: f64,
    pub topics: u32,
    pub category: String,
}

impl CourseRecord {
    /// Human-readable duration, e.g. "8 hours".
    pub fn duration_label(&self) -> String {
        if self.duration_hours.fract() == 0.0 {
            format!("{} hours", self.duration_hours as i64)
        } else {
            format!("{} hours", self.duration_hours)
        }
    }
}

/// Immutable collection of courses.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: Vec<CourseRecord>,
}

impl CourseCatalog {
    /// Loads courses from `<dataset_dir>/courses.csv`, falling back to the
    /// built-in defaults if the file is absent or yields no rows.
    pub fn load(dataset_dir: &Path) -> Self {
        let path = dataset_dir.join("courses.csv");
        let courses = match fs::read_to_string(&path) {
            Ok(raw) => {
                let parsed = parse_csv(&raw);
                if parsed.is_empty() {
                    warn!(
                        "No usable rows in {}; using default courses",
                        path.display()
                    );
                    default_courses()
                } else {
                    parsed
                }
            }
            Err(_) => default_courses(),
        };
        Self { courses }
    }

    pub fn with_courses(courses: Vec<CourseRecord>) -> Self {
        Self { courses }
    }

    pub fn all(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Exact name lookup, case-insensitive.
    pub fn by_name(&self, name: &str) -> Option<&CourseRecord> {
        self.courses
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn by_category(&self, category: &str) -> Vec<&CourseRecord> {
        self.courses
            .iter()
            .filter(|c| c.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Courses whose name contains the given skill, case-insensitive
    /// substring match, same lossy policy as the role catalogue.
    pub fn by_skill(&self, skill: &str) -> Vec<&CourseRecord> {
        let needle = skill.to_lowercase();
        self.courses
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Positional lookup used by the course-by-id endpoints.
    pub fn by_index(&self, index: usize) -> Option<&CourseRecord> {
        self.courses.get(index)
    }
}

fn parse_csv(raw: &str) -> Vec<CourseRecord> {
    let mut lines = raw.lines().filter(|l| !l.trim().is_empty());
    let header: Vec<&str> = match lines.next() {
        Some(h) => h.split(',').map(str::trim).collect(),
        None => return Vec::new(),
    };
    let col = |name: &str| header.iter().position(|h| h.eq_ignore_ascii_case(name));
    let (name_col, diff_col, dur_col, topics_col, cat_col) = match (
        col("Course Name"),
        col("Difficulty"),
        col("Duration"),
        col("Topics"),
        col("Category"),
    ) {
        (Some(n), Some(d), Some(du), Some(t), Some(c)) => (n, d, du, t, c),
        _ => return Vec::new(),
    };

    lines
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let name = fields.get(name_col)?.to_string();
            if name.is_empty() {
                return None;
            }
            Some(CourseRecord {
                name,
                difficulty: Difficulty::parse(fields.get(diff_col).unwrap_or(&"")),
                duration_hours: parse_hours(fields.get(dur_col).unwrap_or(&"")),
                topics: fields
                    .get(topics_col)
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(0),
                category: fields.get(cat_col).unwrap_or(&"").to_string(),
            })
        })
        .collect()
}

/// Parses the leading number out of a duration cell like "8 hours" or "7.5".
fn parse_hours(raw: &str) -> f64 {
    let numeric: String = raw
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().unwrap_or(0.0)
}

/// Built-in default courses used when no dataset file is available.
pub fn default_courses() -> Vec<CourseRecord> {
    fn course(
        name: &str,
        difficulty: Difficulty,
        duration_hours: f64,
        topics: u32,
        category: &str,
    ) -> CourseRecord {
        CourseRecord {
            name: name.to_string(),
            difficulty,
            duration_hours,
            topics,
            category: category.to_string(),
        }
    }
    use Difficulty::{Advanced, Beginner, Intermediate};

    vec![
        course("JavaScript Fundamentals", Beginner, 8.0, 12, "Programming"),
        course("ES6+ Modern JavaScript", Intermediate, 6.0, 10, "Programming"),
        course("React Basics", Beginner, 10.0, 15, "Web Development"),
        course("TypeScript Advanced", Advanced, 12.0, 18, "Programming"),
        course(
            "React State Management",
            Intermediate,
            8.0,
            12,
            "Web Development",
        ),
        course("RESTful API Design", Intermediate, 10.0, 14, "Backend"),
        course("Testing with Jest", Intermediate, 7.0, 10, "Testing"),
        course("Node.js & Express", Intermediate, 15.0, 20, "Backend"),
        course(
            "System Design Principles",
            Advanced,
            20.0,
            25,
            "Architecture",
        ),
        course("Docker & Kubernetes", Advanced, 16.0, 20, "DevOps"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let catalog = CourseCatalog::load(Path::new("/nonexistent/dataset/dir"));
        assert_eq!(catalog.len(), 10);
        assert!(catalog.by_name("React Basics").is_some());
    }

    #[test]
    fn test_load_from_csv() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "Course Name,Difficulty,Duration,Topics,Category\n\
                   Rust Fundamentals,Beginner,9 hours,11,Programming\n\
                   Async Rust,Expert,14 hours,16,Programming\n";
        std::fs::write(dir.path().join("courses.csv"), csv).unwrap();

        let catalog = CourseCatalog::load(dir.path());
        assert_eq!(catalog.len(), 2);
        let rust = catalog.by_name("Rust Fundamentals").unwrap();
        assert_eq!(rust.difficulty, Difficulty::Beginner);
        assert_eq!(rust.duration_hours, 9.0);
        assert_eq!(rust.topics, 11);
        // Unknown difficulty label lands in Advanced.
        assert_eq!(
            catalog.by_name("Async Rust").unwrap().difficulty,
            Difficulty::Advanced
        );
    }

    #[test]
    fn test_csv_without_expected_header_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("courses.csv"), "a,b,c\n1,2,3\n").unwrap();

        let catalog = CourseCatalog::load(dir.path());
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_by_skill_substring_match() {
        let catalog = CourseCatalog::with_courses(default_courses());
        let js = catalog.by_skill("JavaScript");
        assert_eq!(js.len(), 2);
        // "React" matches both React courses via substring.
        assert_eq!(catalog.by_skill("react").len(), 2);
    }

    #[test]
    fn test_duration_label() {
        let course = &default_courses()[0];
        assert_eq!(course.duration_label(), "8 hours");
    }

    #[test]
    fn test_parse_hours_variants() {
        assert_eq!(parse_hours("8 hours"), 8.0);
        assert_eq!(parse_hours("7.5"), 7.5);
        assert_eq!(parse_hours("n/a"), 0.0);
    }
}

#![allow(dead_code)]

//! Role catalogue — job roles with their required-skill strings, demand, and salary band.
//!
//! Loaded once at startup from `job_roles.json` under the dataset directory.
//! A missing or unparseable file falls back to the built-in default set;
//! catalogue problems are never fatal and never surface past this module.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Market demand band for a role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Demand {
    High,
    #[default]
    Medium,
    Low,
}

// Unknown demand strings in the dataset collapse to Medium instead of
// failing the whole catalogue load.
impl<'de> Deserialize<'de> for Demand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "High" => Demand::High,
            "Low" => Demand::Low,
            _ => Demand::Medium,
        })
    }
}

/// One job role as it appears in the dataset. The skills field keeps the
/// source's comma-delimited form; tokenization happens in `skill_tokens`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    #[serde(rename = "Job Role")]
    pub name: String,
    #[serde(rename = "Skills", default)]
    pub skills: String,
    #[serde(rename = "Demand", default)]
    pub demand: Demand,
    #[serde(rename = "Salary Range", default)]
    pub salary_range: String,
}

impl RoleRecord {
    /// Splits the comma-delimited skills string into trimmed, lowercased
    /// tokens. Empty tokens (trailing commas, double commas) are dropped.
    pub fn skill_tokens(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Immutable collection of job roles, shared read-only across requests.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleRecord>,
}

impl RoleCatalog {
    /// Loads roles from `<dataset_dir>/job_roles.json`, falling back to the
    /// built-in defaults if the file is absent or corrupt.
    pub fn load(dataset_dir: &Path) -> Self {
        let path = dataset_dir.join("job_roles.json");
        let roles = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<RoleRecord>>(&raw) {
                Ok(roles) => roles,
                Err(e) => {
                    warn!("Failed to parse {}: {e}; using default roles", path.display());
                    default_roles()
                }
            },
            Err(_) => default_roles(),
        };
        Self { roles }
    }

    pub fn with_roles(roles: Vec<RoleRecord>) -> Self {
        Self { roles }
    }

    pub fn all(&self) -> &[RoleRecord] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Exact name lookup, case-insensitive.
    pub fn by_name(&self, name: &str) -> Option<&RoleRecord> {
        self.roles
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Roles whose skills string contains the given skill, case-insensitive
    /// substring match. Intentionally lossy ("Java" matches "JavaScript"),
    /// kept for compatibility with existing consumers.
    pub fn by_skill(&self, skill: &str) -> Vec<&RoleRecord> {
        let needle = skill.to_lowercase();
        self.roles
            .iter()
            .filter(|r| r.skills.to_lowercase().contains(&needle))
            .collect()
    }

    /// All unique skill tokens across the catalogue, sorted.
    pub fn all_skill_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self
            .roles
            .iter()
            .flat_map(|r| r.skill_tokens())
            .collect();
        tokens.sort();
        tokens.dedup();
        tokens
    }
}

/// Built-in default roles used when no dataset file is available.
pub fn default_roles() -> Vec<RoleRecord> {
    fn role(name: &str, skills: &str, demand: Demand, salary_range: &str) -> RoleRecord {
        RoleRecord {
            name: name.to_string(),
            skills: skills.to_string(),
            demand,
            salary_range: salary_range.to_string(),
        }
    }

    vec![
        role(
            "Frontend Developer",
            "JavaScript, React, CSS, HTML, TypeScript",
            Demand::High,
            "$85k - $120k",
        ),
        role(
            "Full Stack Engineer",
            "JavaScript, Node.js, React, SQL, Docker",
            Demand::High,
            "$95k - $140k",
        ),
        role(
            "UI/UX Designer",
            "Figma, UI Design, Prototyping, User Research",
            Demand::Medium,
            "$70k - $105k",
        ),
        role(
            "Product Manager",
            "Product Strategy, Agile, Data Analysis, Communication",
            Demand::High,
            "$100k - $150k",
        ),
        role(
            "Data Analyst",
            "SQL, Python, Tableau, Excel, Statistics",
            Demand::Medium,
            "$75k - $110k",
        ),
        role(
            "DevOps Engineer",
            "Docker, Kubernetes, AWS, CI/CD, Linux",
            Demand::High,
            "$110k - $160k",
        ),
        role(
            "Data Scientist",
            "Python, Machine Learning, SQL, TensorFlow, Statistics",
            Demand::High,
            "$100k - $150k",
        ),
        role(
            "Cloud Architect",
            "AWS, Azure, Cloud Architecture, DevOps, Security",
            Demand::High,
            "$130k - $180k",
        ),
        role(
            "Mobile Developer",
            "React Native, Swift, Kotlin, Firebase, APIs",
            Demand::Medium,
            "$80k - $125k",
        ),
        role(
            "Machine Learning Engineer",
            "Python, TensorFlow, PyTorch, ML Algorithms, Cloud",
            Demand::High,
            "$120k - $170k",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let catalog = RoleCatalog::load(Path::new("/nonexistent/dataset/dir"));
        assert_eq!(catalog.len(), 10);
        assert!(catalog.by_name("Frontend Developer").is_some());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("job_roles.json")).unwrap();
        f.write_all(b"{ not json ").unwrap();

        let catalog = RoleCatalog::load(dir.path());
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_load_from_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let raw = r#"[
            {"Job Role": "Platform Engineer", "Skills": "Go, Kubernetes", "Demand": "High", "Salary Range": "$120k - $160k"}
        ]"#;
        std::fs::write(dir.path().join("job_roles.json"), raw).unwrap();

        let catalog = RoleCatalog::load(dir.path());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].demand, Demand::High);
    }

    #[test]
    fn test_unknown_demand_maps_to_medium() {
        let raw = r#"{"Job Role": "X", "Skills": "", "Demand": "Explosive", "Salary Range": ""}"#;
        let role: RoleRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(role.demand, Demand::Medium);
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        let catalog = RoleCatalog::with_roles(default_roles());
        assert!(catalog.by_name("devops engineer").is_some());
        assert!(catalog.by_name("DEVOPS ENGINEER").is_some());
        assert!(catalog.by_name("No Such Role").is_none());
    }

    #[test]
    fn test_by_skill_substring_is_lossy() {
        let catalog = RoleCatalog::with_roles(default_roles());
        // "Java" substring-matches every role listing "JavaScript".
        let matches = catalog.by_skill("Java");
        assert!(matches.iter().any(|r| r.name == "Frontend Developer"));
        assert!(matches.iter().any(|r| r.name == "Full Stack Engineer"));
    }

    #[test]
    fn test_skill_tokens_trim_lowercase_and_drop_empties() {
        let role = RoleRecord {
            name: "X".to_string(),
            skills: " React , CSS,, HTML ,".to_string(),
            demand: Demand::Medium,
            salary_range: String::new(),
        };
        assert_eq!(role.skill_tokens(), vec!["react", "css", "html"]);
    }

    #[test]
    fn test_all_skill_tokens_sorted_unique() {
        let catalog = RoleCatalog::with_roles(default_roles());
        let tokens = catalog.all_skill_tokens();
        let mut sorted = tokens.clone();
        sorted.sort();
        assert_eq!(tokens, sorted);
        assert_eq!(
            tokens.iter().filter(|t| t.as_str() == "python").count(),
            1
        );
    }
}

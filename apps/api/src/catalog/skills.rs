#![allow(dead_code)]

//! Skill taxonomy — the built-in catalogue of known skills with category
//! and kind. Fully static; there is no dataset file for skills.

use serde::{Deserialize, Serialize};

/// Broad classification of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Technical,
    Soft,
    Competency,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
}

/// Immutable collection of catalogued skills.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<SkillRecord>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self {
            skills: default_skills(),
        }
    }

    pub fn all(&self) -> &[SkillRecord] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Exact name lookup, case-insensitive.
    pub fn by_name(&self, name: &str) -> Option<&SkillRecord> {
        self.skills
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn by_category(&self, category: &str) -> Vec<&SkillRecord> {
        self.skills
            .iter()
            .filter(|s| s.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn by_kind(&self, kind: SkillKind) -> Vec<&SkillRecord> {
        self.skills.iter().filter(|s| s.kind == kind).collect()
    }

    /// All unique categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.skills.iter().map(|s| s.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

fn default_skills() -> Vec<SkillRecord> {
    fn skill(name: &str, category: &str, kind: SkillKind) -> SkillRecord {
        SkillRecord {
            name: name.to_string(),
            category: category.to_string(),
            kind,
        }
    }
    use SkillKind::{Competency, Soft, Technical};

    vec![
        // Technical skills
        skill("JavaScript", "Programming", Technical),
        skill("Python", "Programming", Technical),
        skill("Java", "Programming", Technical),
        skill("C++", "Programming", Technical),
        skill("TypeScript", "Programming", Technical),
        skill("React", "Web Development", Technical),
        skill("Node.js", "Backend", Technical),
        skill("SQL", "Database", Technical),
        skill("Machine Learning", "AI/ML", Technical),
        skill("Data Analysis", "Data", Technical),
        skill("UI/UX Design", "Design", Technical),
        skill("Cloud Computing", "Cloud", Technical),
        skill("DevOps", "Operations", Technical),
        skill("Mobile Development", "Mobile", Technical),
        skill("Cybersecurity", "Security", Technical),
        // Competency dimensions used by the gap analyzer
        skill("Frontend Dev", "Web Development", Competency),
        skill("Backend", "Backend", Competency),
        skill("DevOps", "Operations", Competency),
        skill("System Design", "Architecture", Competency),
        skill("Testing", "Quality", Competency),
        skill("Cloud", "Cloud", Competency),
        skill("Docker", "DevOps", Technical),
        skill("Kubernetes", "DevOps", Technical),
        skill("AWS", "Cloud", Technical),
        skill("Git", "Tools", Technical),
        skill("RESTful API", "Backend", Technical),
        skill("GraphQL", "Backend", Technical),
        skill("MongoDB", "Database", Technical),
        skill("PostgreSQL", "Database", Technical),
        skill("Redis", "Database", Technical),
        // Soft skills
        skill("Communication", "Soft Skills", Soft),
        skill("Teamwork", "Soft Skills", Soft),
        skill("Problem Solving", "Soft Skills", Soft),
        skill("Time Management", "Soft Skills", Soft),
        skill("Leadership", "Soft Skills", Soft),
    ]
}

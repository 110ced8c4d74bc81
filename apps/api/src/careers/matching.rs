//! Matching Engine — percentage overlap between a user's skill set and each
//! role's required skills, ranked across the whole role catalogue.
//!
//! Pure and deterministic: recomputed from the current skill snapshot on
//! every request, nothing cached.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Demand, RoleCatalog, RoleRecord};

/// One ranked role match, ready for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerMatch {
    pub role: String,
    pub match_percentage: f64,
    pub demand: Demand,
    pub salary_range: String,
    pub skills: String,
}

/// Percentage of the role's required-skill tokens present in the user's
/// skill set. Tokens and user skills are compared trimmed and lowercased;
/// the result is rounded to one decimal. A role listing no skills scores 0.
pub fn match_score(user_skills: &[String], role: &RoleRecord) -> f64 {
    let tokens = role.skill_tokens();
    if tokens.is_empty() {
        return 0.0;
    }

    let user: HashSet<String> = user_skills.iter().map(|s| s.trim().to_lowercase()).collect();
    let matched = tokens.iter().filter(|t| user.contains(*t)).count();

    round1(matched as f64 / tokens.len() as f64 * 100.0)
}

/// Scores every catalogue role, drops zero scores, and returns the top
/// `limit` matches sorted by descending score. The sort is stable, so ties
/// keep catalogue order. An empty user-skill set therefore yields an empty
/// list; callers wanting a non-empty answer use `default_matches`.
pub fn ranked_matches(
    catalog: &RoleCatalog,
    user_skills: &[String],
    limit: usize,
) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = catalog
        .all()
        .iter()
        .filter_map(|role| {
            let score = match_score(user_skills, role);
            (score > 0.0).then(|| to_match(role, score))
        })
        .collect();

    matches.sort_by(|a, b| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);
    matches
}

/// Fallback for users with no declared skills yet: the first `limit`
/// catalogue roles presented as unmatched (0%) suggestions.
pub fn default_matches(catalog: &RoleCatalog, limit: usize) -> Vec<CareerMatch> {
    catalog
        .all()
        .iter()
        .take(limit)
        .map(|role| to_match(role, 0.0))
        .collect()
}

fn to_match(role: &RoleRecord, score: f64) -> CareerMatch {
    CareerMatch {
        role: role.name.clone(),
        match_percentage: score,
        demand: role.demand,
        salary_range: role.salary_range.clone(),
        skills: role.skills.clone(),
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::roles::default_roles;

    fn role(name: &str, skills: &str) -> RoleRecord {
        RoleRecord {
            name: name.to_string(),
            skills: skills.to_string(),
            demand: Demand::Medium,
            salary_range: "$0k - $0k".to_string(),
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_of_three_tokens_scores_66_7() {
        let r = role("Frontend Developer", "JavaScript, React, CSS");
        let score = match_score(&skills(&["JavaScript", "React"]), &r);
        assert_eq!(score, 66.7);
    }

    #[test]
    fn test_full_overlap_scores_100() {
        let r = role("Frontend Developer", "JavaScript, React, CSS");
        let score = match_score(&skills(&["javascript", "REACT", "css"]), &r);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_no_listed_skills_scores_zero() {
        let r = role("Mystery Role", "");
        assert_eq!(match_score(&skills(&["JavaScript"]), &r), 0.0);
    }

    #[test]
    fn test_score_requires_exact_token_match() {
        // Token comparison is exact: "Java" does not count toward a role
        // requiring "JavaScript" (unlike the catalogue's substring search).
        let r = role("Frontend Developer", "JavaScript, React");
        assert_eq!(match_score(&skills(&["Java"]), &r), 0.0);
    }

    #[test]
    fn test_score_is_bounded() {
        let r = role("X", "A, B, C, D, E, F, G");
        let all = skills(&["A", "B", "C", "D", "E", "F", "G"]);
        for n in 0..=all.len() {
            let score = match_score(&all[..n], &r);
            assert!((0.0..=100.0).contains(&score), "score was {score}");
        }
    }

    #[test]
    fn test_ranked_matches_descending_and_truncated() {
        let catalog = RoleCatalog::with_roles(default_roles());
        let user = skills(&["JavaScript", "React", "SQL", "Python"]);
        let matches = ranked_matches(&catalog, &user, 3);

        assert_eq!(matches.len(), 3);
        for pair in matches.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn test_ranked_matches_drops_zero_scores() {
        let catalog = RoleCatalog::with_roles(default_roles());
        let matches = ranked_matches(&catalog, &skills(&["Underwater Basket Weaving"]), 10);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_ranked_matches_ties_keep_catalogue_order() {
        let catalog = RoleCatalog::with_roles(vec![
            role("First", "A, B"),
            role("Second", "A, C"),
            role("Third", "A, D"),
        ]);
        let matches = ranked_matches(&catalog, &skills(&["a"]), 10);
        let names: Vec<&str> = matches.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_user_skills_yield_empty_matches() {
        let catalog = RoleCatalog::with_roles(default_roles());
        assert!(ranked_matches(&catalog, &[], 10).is_empty());
    }

    #[test]
    fn test_default_matches_for_new_users() {
        let catalog = RoleCatalog::with_roles(default_roles());
        let defaults = default_matches(&catalog, 5);
        assert_eq!(defaults.len(), 5);
        assert!(defaults.iter().all(|m| m.match_percentage == 0.0));
        assert_eq!(defaults[0].role, "Frontend Developer");
    }
}

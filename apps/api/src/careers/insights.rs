//! Dashboard insights — headline stats plus the trend and activity series
//! shown on the dashboard.
//!
//! The change deltas and both time series are fixed placeholder values.
// TODO: derive deltas and series from prediction history once enough
// snapshots accumulate per user.

use serde::{Deserialize, Serialize};

use crate::careers::readiness::ReadinessScore;

/// Fixed hours-invested figure shared with the roadmap stats.
pub const LEARNING_HOURS: u32 = 142;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub readiness_score: f64,
    pub readiness_score_change: f64,
    pub skills_acquired: usize,
    pub skills_change: i32,
    pub learning_hours: u32,
    pub hours_change: i32,
    pub career_matches_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerTrend {
    pub month: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDay {
    pub day: String,
    pub hours: f64,
}

pub fn dashboard_stats(
    readiness: &ReadinessScore,
    skill_count: usize,
    match_count: usize,
) -> DashboardStats {
    DashboardStats {
        readiness_score: readiness.overall_score,
        readiness_score_change: 12.0,
        skills_acquired: skill_count,
        skills_change: 6,
        learning_hours: LEARNING_HOURS,
        hours_change: 18,
        career_matches_count: match_count,
    }
}

/// Monthly readiness progression shown on the dashboard chart.
pub fn career_trends() -> Vec<CareerTrend> {
    [
        ("Oct", 45.0),
        ("Nov", 58.0),
        ("Dec", 65.0),
        ("Jan", 72.0),
        ("Feb", 78.0),
    ]
    .into_iter()
    .map(|(month, score)| CareerTrend {
        month: month.to_string(),
        score,
    })
    .collect()
}

/// Weekly learning-hours series shown on the dashboard chart.
pub fn weekly_activity() -> Vec<ActivityDay> {
    [
        ("Mon", 2.5),
        ("Tue", 3.2),
        ("Wed", 1.8),
        ("Thu", 4.1),
        ("Fri", 2.9),
        ("Sat", 3.5),
        ("Sun", 2.2),
    ]
    .into_iter()
    .map(|(day, hours)| ActivityDay {
        day: day.to_string(),
        hours,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::careers::readiness::readiness_score;

    #[test]
    fn test_dashboard_stats_mirror_inputs() {
        let readiness = readiness_score(&[], &[], None);
        let stats = dashboard_stats(&readiness, 3, 5);
        assert_eq!(stats.readiness_score, 25.0);
        assert_eq!(stats.skills_acquired, 3);
        assert_eq!(stats.career_matches_count, 5);
        assert_eq!(stats.learning_hours, LEARNING_HOURS);
    }

    #[test]
    fn test_trend_series_shape() {
        let trends = career_trends();
        assert_eq!(trends.len(), 5);
        assert_eq!(trends[0].month, "Oct");
        for pair in trends.windows(2) {
            assert!(pair[1].score >= pair[0].score);
        }
    }

    #[test]
    fn test_activity_covers_the_week() {
        assert_eq!(weekly_activity().len(), 7);
    }
}

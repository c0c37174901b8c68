//! Aggregate statistics and streak badges.
//!
//! Everything here is derived from task state at read time. Tasks are run
//! through [`decay`] first so a broken chain never counts toward totals or
//! unlocks a badge.

use super::streak::{days_between, decay};
use super::task::Task;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required_streak: u32,
}

pub const BADGES: [Badge; 4] = [
    Badge {
        id: "starter",
        name: "Getting Started",
        description: "Maintain a 3-day streak on any task",
        required_streak: 3,
    },
    Badge {
        id: "consistent",
        name: "Consistent",
        description: "Reach a 7-day streak on any task",
        required_streak: 7,
    },
    Badge {
        id: "focused",
        name: "Focused",
        description: "Keep the momentum for 14 days",
        required_streak: 14,
    },
    Badge {
        id: "unstoppable",
        name: "Unstoppable",
        description: "Achieve a legendary 30-day streak",
        required_streak: 30,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required_streak: u32,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub total_tasks: usize,
    /// Sum of current streaks.
    pub total_completed_days: u64,
    pub best_streak: u32,
    /// Days since creation not covered by the current streak, summed over tasks.
    pub missed_days: u64,
    pub completed_today: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub insights: Insights,
    pub badges: Vec<BadgeStatus>,
}

pub fn compute(tasks: &[Task], today: NaiveDate) -> Insights {
    let mut insights = Insights {
        total_tasks: tasks.len(),
        ..Insights::default()
    };

    for task in tasks.iter().map(|task| decay(task, today)) {
        insights.total_completed_days += u64::from(task.streak);
        insights.best_streak = insights.best_streak.max(task.streak);

        let days_existing = days_between(task.created_at, today) + 1;
        insights.missed_days += (days_existing - i64::from(task.streak)).max(0) as u64;

        if task.completed && task.last_completed_day == Some(today) {
            insights.completed_today += 1;
        }
    }

    insights
}

pub fn badges(best_streak: u32) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| BadgeStatus {
            id: badge.id,
            name: badge.name,
            description: badge.description,
            required_streak: badge.required_streak,
            unlocked: best_streak >= badge.required_streak,
        })
        .collect()
}

pub fn report(tasks: &[Task], today: NaiveDate) -> Report {
    let insights = compute(tasks, today);
    let badges = badges(insights.best_streak);
    Report { insights, badges }
}

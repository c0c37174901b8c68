#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use streaks::libs::insights::{self, BADGES};
    use streaks::libs::task::Task;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn task(id: i64, created: u32, streak: u32, last: Option<u32>, completed: bool) -> Task {
        Task {
            streak,
            completed,
            last_completed_day: last.map(day),
            ..Task::new(id, "alice", "Habit", day(created))
        }
    }

    #[test]
    fn test_empty_task_list() {
        let report = insights::report(&[], day(10));

        assert_eq!(report.insights.total_tasks, 0);
        assert_eq!(report.insights.best_streak, 0);
        assert_eq!(report.insights.missed_days, 0);
        assert!(report.badges.iter().all(|badge| !badge.unlocked));
    }

    #[test]
    fn test_totals() {
        let tasks = vec![
            task(1, 1, 5, Some(10), true),
            task(2, 8, 2, Some(9), false),
            task(3, 10, 0, None, false),
        ];

        let insights = insights::compute(&tasks, day(10));
        assert_eq!(insights.total_tasks, 3);
        assert_eq!(insights.total_completed_days, 7);
        assert_eq!(insights.best_streak, 5);
        assert_eq!(insights.completed_today, 1);
        // 10 days - 5, 3 days - 2, 1 day - 0
        assert_eq!(insights.missed_days, 5 + 1 + 1);
    }

    #[test]
    fn test_broken_chain_does_not_count() {
        let tasks = vec![task(1, 1, 8, Some(5), true)];

        let insights = insights::compute(&tasks, day(10));
        assert_eq!(insights.best_streak, 0);
        assert_eq!(insights.total_completed_days, 0);
        assert_eq!(insights.completed_today, 0);
    }

    #[test]
    fn test_badge_thresholds() {
        let unlocked = |best: u32| -> Vec<&'static str> {
            insights::badges(best)
                .into_iter()
                .filter(|badge| badge.unlocked)
                .map(|badge| badge.id)
                .collect()
        };

        assert!(unlocked(2).is_empty());
        assert_eq!(unlocked(3), vec!["starter"]);
        assert_eq!(unlocked(13), vec!["starter", "consistent"]);
        assert_eq!(unlocked(30), vec!["starter", "consistent", "focused", "unstoppable"]);
        assert_eq!(insights::badges(0).len(), BADGES.len());
    }
}

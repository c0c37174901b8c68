#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::Arc;
    use streaks::db::db::Db;
    use streaks::db::history::HistoryLog;
    use streaks::db::tasks::Tasks;
    use streaks::libs::clock::FixedClock;
    use streaks::libs::error::StoreError;
    use streaks::libs::store::TaskStore;
    use streaks::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const OWNER: &str = "alice";

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    struct StoreTestContext {
        clock: Arc<FixedClock>,
        store: TaskStore,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let clock = Arc::new(FixedClock::new(day(10)));
            let store = TaskStore::new(Db::in_memory().unwrap(), clock.clone());
            StoreTestContext { clock, store }
        }
    }

    impl StoreTestContext {
        fn history_days(&self, task_id: i64) -> Vec<NaiveDate> {
            self.store
                .history(OWNER, day(1), day(31))
                .unwrap()
                .into_iter()
                .filter(|record| record.task_id == task_id)
                .map(|record| record.day)
                .collect()
        }

        fn seed(&self, task: &Task) {
            Tasks::new(&self.store.db().conn).update_state(task).unwrap();
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_create_starts_empty(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "  Read 20 pages  ").unwrap();

        assert_eq!(task.text, "Read 20 pages");
        assert_eq!(task.owner, OWNER);
        assert_eq!(task.streak, 0);
        assert!(!task.completed);
        assert_eq!(task.last_completed_day, None);
        assert_eq!(task.created_at, day(10));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_create_rejects_blank_text(ctx: &mut StoreTestContext) {
        let result = ctx.store.create(OWNER, "   ");
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(ctx.store.list(OWNER).unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_and_untoggle_same_day(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Meditate").unwrap();

        let done = ctx.store.toggle(OWNER, task.id).unwrap();
        assert!(done.completed);
        assert_eq!(done.streak, 1);
        assert_eq!(done.last_completed_day, Some(day(10)));
        assert_eq!(ctx.history_days(task.id), vec![day(10)]);

        let undone = ctx.store.toggle(OWNER, task.id).unwrap();
        assert!(!undone.completed);
        assert_eq!(undone.streak, 0);
        assert_eq!(undone.last_completed_day, None);
        assert!(ctx.history_days(task.id).is_empty());

        let stored = ctx.store.get(OWNER, task.id).unwrap();
        assert_eq!(stored, undone);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_chain_continues_next_day(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Run").unwrap();
        ctx.seed(&Task {
            streak: 5,
            last_completed_day: Some(day(10)),
            completed: false,
            ..task.clone()
        });

        ctx.clock.set(day(11));
        let toggled = ctx.store.toggle(OWNER, task.id).unwrap();

        assert_eq!(toggled.streak, 6);
        assert_eq!(toggled.last_completed_day, Some(day(11)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_chain_restarts_after_gap(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Run").unwrap();
        ctx.seed(&Task {
            streak: 5,
            last_completed_day: Some(day(10)),
            completed: false,
            ..task.clone()
        });

        ctx.clock.set(day(13));
        let toggled = ctx.store.toggle(OWNER, task.id).unwrap();

        assert_eq!(toggled.streak, 1);
        assert_eq!(toggled.last_completed_day, Some(day(13)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_untoggle_keeps_chain_through_yesterday(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Journal").unwrap();

        // Completed on the 10th, then the flag is cleared as a new day starts.
        ctx.store.toggle(OWNER, task.id).unwrap();
        let stored = ctx.store.get(OWNER, task.id).unwrap();
        ctx.seed(&Task { completed: false, ..stored });

        ctx.clock.set(day(11));
        let done = ctx.store.toggle(OWNER, task.id).unwrap();
        assert_eq!(done.streak, 2);
        assert_eq!(ctx.history_days(task.id), vec![day(10), day(11)]);

        let undone = ctx.store.toggle(OWNER, task.id).unwrap();
        assert_eq!(undone.streak, 1);
        assert_eq!(undone.last_completed_day, Some(day(10)));
        assert_eq!(ctx.history_days(task.id), vec![day(10)]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_undo_after_stale_taps_keeps_streak_on_read(ctx: &mut StoreTestContext) {
        ctx.clock.set(day(6));
        let task = ctx.store.create(OWNER, "Practice").unwrap();
        ctx.store.toggle(OWNER, task.id).unwrap();

        // Each new day the first tap clears yesterday's flag, the second marks today.
        for d in [7, 8] {
            ctx.clock.set(day(d));
            ctx.store.toggle(OWNER, task.id).unwrap();
            ctx.store.toggle(OWNER, task.id).unwrap();
        }
        let marked = ctx.store.get(OWNER, task.id).unwrap();
        assert_eq!((marked.streak, marked.last_completed_day), (3, Some(day(8))));

        HistoryLog::new(&ctx.store.db().conn).record_completion(OWNER, task.id, day(6)).unwrap();

        let undone = ctx.store.toggle(OWNER, task.id).unwrap();
        assert_eq!(undone.streak, 2);
        assert_eq!(undone.last_completed_day, Some(day(7)));

        let listed = ctx.store.list(OWNER).unwrap();
        assert_eq!(listed[0].streak, 2);
        assert_eq!(listed[0].last_completed_day, Some(day(7)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_stale_completed_flag_removes_earlier_record(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Floss").unwrap();
        ctx.store.toggle(OWNER, task.id).unwrap();
        assert_eq!(ctx.history_days(task.id), vec![day(10)]);

        ctx.clock.set(day(11));
        let flipped = ctx.store.toggle(OWNER, task.id).unwrap();

        assert!(!flipped.completed);
        assert_eq!(flipped.streak, 1);
        assert_eq!(flipped.last_completed_day, Some(day(10)));
        assert!(ctx.history_days(task.id).is_empty());
        assert_eq!(ctx.store.get(OWNER, task.id).unwrap(), flipped);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_untoggle_of_single_day_restores_previous_completion(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Journal").unwrap();
        HistoryLog::new(&ctx.store.db().conn).record_completion(OWNER, task.id, day(7)).unwrap();

        let done = ctx.store.toggle(OWNER, task.id).unwrap();
        assert_eq!(done.streak, 1);

        let undone = ctx.store.toggle(OWNER, task.id).unwrap();
        assert_eq!(undone.streak, 0);
        assert_eq!(undone.last_completed_day, Some(day(7)));
        assert_eq!(ctx.history_days(task.id), vec![day(7)]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_untoggle_without_history_falls_back_to_yesterday(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Journal").unwrap();
        ctx.seed(&Task {
            streak: 3,
            last_completed_day: Some(day(10)),
            completed: true,
            ..task.clone()
        });

        let undone = ctx.store.toggle(OWNER, task.id).unwrap();
        assert_eq!(undone.streak, 2);
        assert_eq!(undone.last_completed_day, Some(day(9)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_list_decays_and_persists(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Stretch").unwrap();
        ctx.store.toggle(OWNER, task.id).unwrap();

        ctx.clock.set(day(12));
        let listed = ctx.store.list(OWNER).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].streak, 0);
        assert!(listed[0].completed);
        assert_eq!(listed[0].last_completed_day, Some(day(10)));

        let stored = Tasks::new(&ctx.store.db().conn).get_by_id(task.id).unwrap().unwrap();
        assert_eq!(stored.streak, 0);
        assert!(stored.completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_list_keeps_streak_completed_yesterday(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Stretch").unwrap();
        ctx.store.toggle(OWNER, task.id).unwrap();

        ctx.clock.set(day(11));
        let listed = ctx.store.list(OWNER).unwrap();
        assert_eq!(listed[0].streak, 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_list_is_owner_scoped_and_newest_first(ctx: &mut StoreTestContext) {
        let first = ctx.store.create(OWNER, "First").unwrap();
        ctx.clock.advance_days(1);
        let second = ctx.store.create(OWNER, "Second").unwrap();
        ctx.store.create("bob", "Not mine").unwrap();

        let ids: Vec<i64> = ctx.store.list(OWNER).unwrap().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_foreign_and_missing_tasks(ctx: &mut StoreTestContext) {
        let task = ctx.store.create("bob", "Bob's task").unwrap();

        assert!(matches!(ctx.store.toggle(OWNER, task.id), Err(StoreError::Forbidden(_))));
        assert!(matches!(ctx.store.delete(OWNER, task.id), Err(StoreError::Forbidden(_))));
        assert!(matches!(ctx.store.toggle(OWNER, 9999), Err(StoreError::NotFound(9999))));
        assert!(matches!(ctx.store.delete(OWNER, 9999), Err(StoreError::NotFound(9999))));

        let untouched = ctx.store.get("bob", task.id).unwrap();
        assert_eq!(untouched.streak, 0);
        assert!(!untouched.completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_removes_history(ctx: &mut StoreTestContext) {
        let keep = ctx.store.create(OWNER, "Keep").unwrap();
        let drop = ctx.store.create(OWNER, "Drop").unwrap();
        ctx.store.toggle(OWNER, keep.id).unwrap();
        ctx.store.toggle(OWNER, drop.id).unwrap();

        ctx.store.delete(OWNER, drop.id).unwrap();

        let records = ctx.store.history(OWNER, day(1), day(31)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].task_id, keep.id);
        assert!(matches!(ctx.store.get(OWNER, drop.id), Err(StoreError::NotFound(_))));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_survives_history_failure(ctx: &mut StoreTestContext) {
        let task = ctx.store.create(OWNER, "Read").unwrap();
        ctx.store.db().conn.execute("DROP TABLE history", []).unwrap();

        let toggled = ctx.store.toggle(OWNER, task.id).unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.streak, 1);

        let stored = ctx.store.get(OWNER, task.id).unwrap();
        assert_eq!(stored, toggled);
    }

    struct FileStoreContext {
        temp_dir: TempDir,
    }

    impl TestContext for FileStoreContext {
        fn setup() -> Self {
            FileStoreContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(FileStoreContext)]
    #[test]
    fn test_state_survives_reopen(ctx: &mut FileStoreContext) {
        let path = ctx.temp_dir.path().join("streaks.db");
        let clock = Arc::new(FixedClock::new(day(10)));

        let task_id = {
            let store = TaskStore::new(Db::open(&path).unwrap(), clock.clone());
            let task = store.create(OWNER, "Persist").unwrap();
            store.toggle(OWNER, task.id).unwrap();
            task.id
        };

        let store = TaskStore::new(Db::open(&path).unwrap(), clock);
        let task = store.get(OWNER, task_id).unwrap();
        assert_eq!(task.streak, 1);
        assert_eq!(task.last_completed_day, Some(day(10)));
        assert_eq!(store.history(OWNER, day(10), day(10)).unwrap().len(), 1);
    }
}

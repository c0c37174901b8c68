#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use std::sync::Arc;
    use streaks::libs::cache::{get_as, FileCache, MemoryCache, Scope, ScopedCache};
    use streaks::libs::clock::FixedClock;
    use streaks::libs::guest::{GuestReplica, GUEST_OWNER, TASKS_KEY};
    use streaks::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, d).unwrap()
    }

    struct GuestTestContext {
        temp_dir: TempDir,
        clock: Arc<FixedClock>,
    }

    impl TestContext for GuestTestContext {
        fn setup() -> Self {
            GuestTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                clock: Arc::new(FixedClock::new(day(1))),
            }
        }
    }

    impl GuestTestContext {
        fn replica(&self) -> GuestReplica<FileCache> {
            GuestReplica::new(FileCache::at(self.temp_dir.path()), self.clock.clone())
        }
    }

    #[test_context(GuestTestContext)]
    #[test]
    fn test_add_assigns_ids_newest_first(ctx: &mut GuestTestContext) {
        let guest = ctx.replica();
        let first = guest.add("Water plants").unwrap();
        let second = guest.add("Walk").unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.owner, GUEST_OWNER);

        let ids: Vec<i64> = guest.list().unwrap().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(guest.add(" ").is_err());
    }

    #[test_context(GuestTestContext)]
    #[test]
    fn test_toggle_runs_streak_rules(ctx: &mut GuestTestContext) {
        let guest = ctx.replica();
        let task = guest.add("Stretch").unwrap();

        let done = guest.toggle(task.id).unwrap();
        assert!(done.completed);
        assert_eq!(done.streak, 1);

        let undone = guest.toggle(task.id).unwrap();
        assert!(!undone.completed);
        assert_eq!(undone.streak, 0);
        assert_eq!(undone.last_completed_day, None);

        assert!(guest.toggle(42).is_err());
    }

    #[test_context(GuestTestContext)]
    #[test]
    fn test_list_decays_and_survives_reopen(ctx: &mut GuestTestContext) {
        let task = {
            let guest = ctx.replica();
            let task = guest.add("Read").unwrap();
            guest.toggle(task.id).unwrap();
            task
        };

        ctx.clock.set(day(4));
        let listed = ctx.replica().list().unwrap();
        assert_eq!(listed[0].id, task.id);
        assert_eq!(listed[0].streak, 0);
        assert!(listed[0].completed);

        let cached: Vec<Task> = get_as(&FileCache::at(ctx.temp_dir.path()), &Scope::Guest, TASKS_KEY)
            .unwrap()
            .unwrap();
        assert_eq!(cached[0].streak, 0);
    }

    #[test_context(GuestTestContext)]
    #[test]
    fn test_delete_and_clear(ctx: &mut GuestTestContext) {
        let guest = ctx.replica();
        let keep = guest.add("Keep").unwrap();
        let drop = guest.add("Drop").unwrap();

        guest.delete(drop.id).unwrap();
        assert!(guest.delete(drop.id).is_err());
        assert_eq!(guest.list().unwrap(), vec![keep]);

        guest.clear().unwrap();
        assert!(guest.list().unwrap().is_empty());
    }

    #[test_context(GuestTestContext)]
    #[test]
    fn test_file_cache_scopes(ctx: &mut GuestTestContext) {
        let cache = FileCache::at(ctx.temp_dir.path());
        let alice = Scope::User("alice".to_string());

        cache.put(&alice, "tasks", json!([{ "id": 1 }])).unwrap();
        cache.put(&alice, "profile", json!({ "name": "Alice" })).unwrap();
        cache.put(&Scope::Guest, "tasks", json!([])).unwrap();

        assert_eq!(cache.get(&alice, "profile").unwrap(), Some(json!({ "name": "Alice" })));

        cache.invalidate(&alice).unwrap();
        assert_eq!(cache.get(&alice, "tasks").unwrap(), None);
        assert_eq!(cache.get(&alice, "profile").unwrap(), None);
        assert_eq!(cache.get(&Scope::Guest, "tasks").unwrap(), Some(json!([])));
    }

    #[test]
    fn test_unreadable_entry_is_treated_as_absent() {
        let cache = MemoryCache::new();
        cache.put(&Scope::Guest, TASKS_KEY, json!("not a task list")).unwrap();

        let tasks: Option<Vec<Task>> = get_as(&cache, &Scope::Guest, TASKS_KEY).unwrap();
        assert!(tasks.is_none());

        let guest = GuestReplica::new(cache, Arc::new(FixedClock::new(day(1))));
        assert!(guest.list().unwrap().is_empty());
    }
}

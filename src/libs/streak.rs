//! Streak engine: the rules that turn a completion toggle into new task state.
//!
//! Everything here is a pure function of the previous [`Task`] and the current
//! calendar day. The server store, the CLI and the guest replica all call into
//! this module, so there is exactly one implementation of the streak rules.
//!
//! ## Marking a task done
//!
//! | last completed day | new streak        |
//! |--------------------|-------------------|
//! | none               | 1                 |
//! | today              | unchanged         |
//! | yesterday          | previous + 1      |
//! | older or future    | 1 (chain restart) |
//!
//! The completion is recorded in the history log for today.
//!
//! ## Unmarking a task
//!
//! When the task was completed today the streak is decremented. If a chain is
//! left it ended yesterday; otherwise the last completed day moves back to the
//! previous completion found in the history log. A `completed` flag left over from an earlier day only flips the flag.
//! The history record for the last completed day is removed.
//!
//! ## Decay
//!
//! [`decay`] zeroes streaks whose chain was broken by a missed day. It runs on
//! every read so stored state catches up with the calendar without a
//! background job.

use super::task::Task;
use chrono::NaiveDate;

/// History mutation that accompanies a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEffect {
    /// Upsert a completed record for the day.
    Record(NaiveDate),
    /// Delete the record for the day, if any.
    Remove(NaiveDate),
}

/// Outcome of [`apply_toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub task: Task,
    pub effect: HistoryEffect,
}

/// Whole calendar days from `from` to `to`; negative when `from` is later.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Computes the state after flipping `task` for `today`.
///
/// `previous_completion` is the latest history day strictly before `today`
/// for this task. It is only consulted when undoing today's completion leaves
/// no streak; pass `None` when no history is available.
pub fn apply_toggle(task: &Task, today: NaiveDate, previous_completion: Option<NaiveDate>) -> Toggle {
    let mut next = task.clone();

    if !task.completed {
        next.streak = match task.last_completed_day {
            None => 1,
            Some(last) => match days_between(last, today) {
                0 => task.streak,
                1 => task.streak.saturating_add(1),
                _ => 1,
            },
        };
        next.completed = true;
        next.last_completed_day = Some(today);

        return Toggle {
            task: next,
            effect: HistoryEffect::Record(today),
        };
    }

    let day_to_remove = task.last_completed_day.unwrap_or(today);

    if task.last_completed_day == Some(today) {
        next.streak = task.streak.saturating_sub(1);
        next.last_completed_day = revert_last_completed(next.streak, today, previous_completion);
    }
    next.completed = false;

    Toggle {
        task: next,
        effect: HistoryEffect::Remove(day_to_remove),
    }
}

fn revert_last_completed(streak: u32, today: NaiveDate, previous_completion: Option<NaiveDate>) -> Option<NaiveDate> {
    if streak > 0 {
        // A chain that still counts and ended today runs through yesterday.
        return today.pred_opt();
    }
    previous_completion.filter(|day| *day < today)
}

/// True when more than one calendar day separates the last completion from `today`.
pub fn is_chain_broken(task: &Task, today: NaiveDate) -> bool {
    task.last_completed_day.is_some_and(|last| days_between(last, today) > 1)
}

/// Read-time correction: zeroes the streak once a day has been missed.
///
/// `completed` and `last_completed_day` are left untouched.
pub fn decay(task: &Task, today: NaiveDate) -> Task {
    let mut next = task.clone();
    if is_chain_broken(task, today) {
        next.streak = 0;
    }
    next
}

use super::insights::Report;
use super::task::Task;
use crate::db::history::HistoryRecord;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "DONE", "STREAK", "LAST COMPLETED", "CREATED"]);
        for task in tasks {
            let done = if task.completed { "x" } else { "" };
            let last_completed = task.last_completed_day.map(|day| day.to_string()).unwrap_or_default();
            table.add_row(row![task.id, task.text, done, task.streak, last_completed, task.created_at]);
        }
        table.printstd();
    }

    /// Records labelled with their task's text, or `#id` when the task is unknown.
    pub fn history(records: &[HistoryRecord], tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["DAY", "TASK", "STATUS"]);
        for record in records {
            let label = tasks
                .iter()
                .find(|task| task.id == record.task_id)
                .map(|task| task.text.clone())
                .unwrap_or_else(|| format!("#{}", record.task_id));
            table.add_row(row![record.day, label, record.status.as_str()]);
        }
        table.printstd();
    }

    pub fn report(report: &Report) {
        let mut table = Table::new();
        let insights = &report.insights;

        table.add_row(row!["Total tasks", insights.total_tasks]);
        table.add_row(row!["Completed today", insights.completed_today]);
        table.add_row(row!["Best streak", insights.best_streak]);
        table.add_row(row!["Total completed days", insights.total_completed_days]);
        table.add_row(row!["Missed days", insights.missed_days]);
        table.printstd();
    }

    pub fn badges(report: &Report) {
        let mut table = Table::new();

        table.add_row(row!["BADGE", "REQUIRES", "DESCRIPTION", "UNLOCKED"]);
        for badge in &report.badges {
            let requires = format!("{} days", badge.required_streak);
            let unlocked = if badge.unlocked { "yes" } else { "no" };
            table.add_row(row![badge.name, requires, badge.description, unlocked]);
        }
        table.printstd();
    }
}

//! Plain-text rendering of tasks and stats.

use std::fmt::Write as _;

use crate::model::{StatsSnapshot, Task, TaskStatus};

/// Statuses shown in the stats summary, in display order.
const SUMMARY_STATUSES: [TaskStatus; 3] =
    [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

/// One-line summary: total followed by per-status counts.
#[must_use]
pub fn stats_summary(stats: &StatsSnapshot) -> String {
    let mut line = format!("Total: {}", stats.total);
    for status in &SUMMARY_STATUSES {
        let _ = write!(line, "  {}: {}", status.label(), stats.count(status));
    }
    line
}

/// Aligned table with a glyph, id, status, and detail per task.
#[must_use]
pub fn task_table<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let rows: Vec<&Task> = tasks.into_iter().collect();
    let id_width = rows.iter().map(|t| t.id.chars().count()).max().unwrap_or(2).max(2);
    let status_width =
        rows.iter().map(|t| t.task_status.label().chars().count()).max().unwrap_or(6).max(6);

    let mut out = String::new();
    let _ = writeln!(out, "  {:<id_width$}  {:<status_width$}  DETAIL", "ID", "STATUS");
    let _ = writeln!(out, "  {:-<id_width$}  {:-<status_width$}  {:-<6}", "", "", "");
    for task in rows {
        let _ = writeln!(
            out,
            "{} {:<id_width$}  {:<status_width$}  {}",
            task.task_status.glyph(),
            task.id,
            task.task_status.label(),
            task.task_detail,
        );
    }
    out
}

/// Multi-line description of one task.
#[must_use]
pub fn task_detail(task: &Task) -> String {
    format!(
        "{} {}\n  id:      {}\n  status:  {}\n  created: {}\n  updated: {}",
        task.task_status.glyph(),
        task.task_detail,
        task.id,
        task.task_status.label(),
        task.created_at.to_rfc3339(),
        task.updated_at.to_rfc3339(),
    )
}

//! `taskboard edit` command.

use super::{failure, load};
use crate::context::ServiceContext;
use crate::model::TaskStatus;

/// Execute the `edit` command.
///
/// The description is trimmed; `status` defaults to the task's current one.
/// Nothing is sent when neither changes.
///
/// # Errors
///
/// Returns an error if `detail` is blank, the task does not exist, or the
/// update fails.
pub async fn run(
    ctx: &ServiceContext,
    id: &str,
    detail: &str,
    status: Option<TaskStatus>,
) -> Result<(), String> {
    let detail = detail.trim();
    if detail.is_empty() {
        return Err("Task detail must not be blank".to_owned());
    }

    let mut controller = ctx.controller();
    load(&mut controller).await?;
    let current = controller.find(id).cloned().ok_or_else(|| format!("No task with id {id}"))?;

    let status = status.unwrap_or_else(|| current.task_status.clone());
    if detail == current.task_detail && status == current.task_status {
        println!("Nothing to change for task {id}");
        return Ok(());
    }

    controller.begin_edit(id);
    if !controller.update(id, detail, status.clone()).await {
        return Err(failure(&controller));
    }
    println!("Updated task {id}: {detail} [{}]", status.label());
    Ok(())
}

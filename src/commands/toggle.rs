//! `taskboard toggle` command.

use super::{failure, load};
use crate::context::ServiceContext;

/// Execute the `toggle` command for task `id`.
///
/// # Errors
///
/// Returns an error if the task does not exist or the status update fails.
pub async fn run(ctx: &ServiceContext, id: &str) -> Result<(), String> {
    let mut controller = ctx.controller();
    load(&mut controller).await?;
    let task = controller.find(id).cloned().ok_or_else(|| format!("No task with id {id}"))?;

    if !controller.toggle_status(&task).await {
        return Err(failure(&controller));
    }
    let now = controller.find(id).map_or_else(|| task.task_status.next(), |t| t.task_status.clone());
    println!("Task {id}: {} -> {}", task.task_status.label(), now.label());
    Ok(())
}

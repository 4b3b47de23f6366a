//! `taskboard show` command.

use super::render;
use crate::context::ServiceContext;

/// Execute the `show` command for task `id`.
///
/// # Errors
///
/// Returns an error if the task cannot be fetched, including when it does not exist.
pub async fn run(ctx: &ServiceContext, id: &str) -> Result<(), String> {
    let task = ctx.api.get_task(id).await.map_err(|e| {
        tracing::debug!(error = %e, "get_task failed");
        format!("Failed to fetch task {id}")
    })?;
    println!("{}", render::task_detail(&task));
    Ok(())
}

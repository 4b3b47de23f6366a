//! `taskboard remove` command.

use super::failure;
use crate::context::ServiceContext;

/// Execute the `remove` command for task `id`.
///
/// # Errors
///
/// Returns the controller's error message if the delete or the follow-up
/// refresh fails.
pub async fn run(ctx: &ServiceContext, id: &str) -> Result<(), String> {
    let mut controller = ctx.controller();
    if !controller.remove(id).await {
        return Err(failure(&controller));
    }
    println!("Removed task {id} ({} tasks left)", controller.stats().total);
    Ok(())
}

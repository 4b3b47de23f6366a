//! `taskboard add` command.

use super::failure;
use crate::context::ServiceContext;

/// Execute the `add` command.
///
/// # Errors
///
/// Returns an error if `detail` is blank or the task cannot be created.
pub async fn run(ctx: &ServiceContext, detail: &str) -> Result<(), String> {
    if detail.trim().is_empty() {
        return Err("Task detail must not be blank".to_owned());
    }

    let mut controller = ctx.controller();
    if !controller.create(detail).await {
        return Err(failure(&controller));
    }
    println!("Added: {detail} ({} tasks total)", controller.stats().total);
    Ok(())
}

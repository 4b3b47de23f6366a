//! `taskboard list` command.

use super::{load, render};
use crate::context::ServiceContext;
use crate::model::FilterState;

/// Execute the `list` command.
///
/// Prints the stats summary followed by the tasks visible under `filter`.
///
/// # Errors
///
/// Returns the controller's error message if the task list cannot be fetched.
pub async fn run(ctx: &ServiceContext, filter: FilterState) -> Result<(), String> {
    let mut controller = ctx.controller();
    controller.set_filter(filter);
    load(&mut controller).await?;

    println!("{}", render::stats_summary(controller.stats()));
    println!();
    if controller.filtered_tasks().next().is_none() {
        println!("{}", filter.empty_message());
    } else {
        print!("{}", render::task_table(controller.filtered_tasks()));
    }
    Ok(())
}

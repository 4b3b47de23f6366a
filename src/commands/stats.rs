//! `taskboard stats` command.

use super::{load, render};
use crate::context::ServiceContext;

/// Execute the `stats` command.
///
/// # Errors
///
/// Returns the controller's error message if the snapshot cannot be fetched.
pub async fn run(ctx: &ServiceContext) -> Result<(), String> {
    let mut controller = ctx.controller();
    load(&mut controller).await?;
    println!("{}", render::stats_summary(controller.stats()));
    Ok(())
}

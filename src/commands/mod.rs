//! Command dispatch and handlers.

pub mod add;
pub mod edit;
pub mod list;
pub mod remove;
pub mod render;
pub mod show;
pub mod stats;
pub mod toggle;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::controller::TaskListController;

/// Dispatch a parsed command to its handler.
///
/// When `TASKBOARD_RECORD` is set, every task API call is recorded to a
/// cassette in that directory; with `TASKBOARD_REPLAY`, calls are served
/// from a cassette instead of the network.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch(command: &Command, settings: &Settings) -> Result<(), String> {
    let (ctx, session) = ServiceContext::from_settings(settings)?;

    let result = dispatch_with_context(command, &ctx).await;

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::List { filter } => list::run(ctx, (*filter).into()).await,
        Command::Stats => stats::run(ctx).await,
        Command::Show { id } => show::run(ctx, id).await,
        Command::Add { detail } => add::run(ctx, &detail.join(" ")).await,
        Command::Edit { id, detail, status } => {
            edit::run(ctx, id, detail, status.map(Into::into)).await
        }
        Command::Remove { id } => remove::run(ctx, id).await,
        Command::Toggle { id } => toggle::run(ctx, id).await,
    }
}

/// The controller's stored error, for reporting a failed operation.
pub(crate) fn failure(controller: &TaskListController) -> String {
    controller.last_error().unwrap_or("Request failed").to_owned()
}

/// Loads the task list, failing with the controller's message.
pub(crate) async fn load(controller: &mut TaskListController) -> Result<(), String> {
    if controller.refresh().await {
        Ok(())
    } else {
        Err(failure(controller))
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}

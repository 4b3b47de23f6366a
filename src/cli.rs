//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::model::{FilterState, TaskStatus};

/// Top-level CLI parser for `taskboard`.
#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Manage tasks on a remote task service")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tasks with counts by status.
    List {
        /// Only show tasks with this status.
        #[arg(long, short, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Show totals by status.
    Stats,
    /// Show a single task.
    Show {
        /// Task id.
        id: String,
    },
    /// Create a task.
    Add {
        /// Task description; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        detail: Vec<String>,
    },
    /// Change a task's description and optionally its status.
    Edit {
        /// Task id.
        id: String,
        /// New description.
        detail: String,
        /// New status; defaults to the current one.
        #[arg(long, short, value_enum)]
        status: Option<StatusArg>,
    },
    /// Delete a task.
    #[command(alias = "rm")]
    Remove {
        /// Task id.
        id: String,
    },
    /// Advance a task to its next status.
    Toggle {
        /// Task id.
        id: String,
    },
}

/// Filter choices accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Every task.
    All,
    /// Pending tasks.
    Pending,
    /// In-progress tasks.
    #[value(name = "in_progress", alias = "in-progress")]
    InProgress,
    /// Completed tasks.
    Completed,
}

impl From<FilterArg> for FilterState {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Pending => Self::Pending,
            FilterArg::InProgress => Self::InProgress,
            FilterArg::Completed => Self::Completed,
        }
    }
}

/// Status values a user may set explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Not started.
    Pending,
    /// Being worked on.
    #[value(name = "in_progress", alias = "in-progress")]
    InProgress,
    /// Done.
    Completed,
}

impl From<StatusArg> for TaskStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => Self::Pending,
            StatusArg::InProgress => Self::InProgress,
            StatusArg::Completed => Self::Completed,
        }
    }
}

use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "labroster")]
#[command(about = "Browse course rosters and learners' lab activity", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and labroster.log
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Config file (defaults to <data dir>/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Course key (course-v1:… or ccx-v1:…), overrides the configured one
    #[arg(long, global = true)]
    pub course: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive roster → lab summary → lab details browser (default)
    Tui {
        /// Start at a route such as /courses/<course>/lab-summary/<user id>
        #[arg(long)]
        route: Option<String>,
    },

    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },

    Labs {
        #[command(subcommand)]
        command: LabsCommand,
    },

    Lab {
        #[command(subcommand)]
        command: LabCommand,
    },

    Dashboard {
        #[command(subcommand)]
        command: DashboardCommand,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum RosterCommand {
    /// List one page of enrolled learners
    List {
        #[arg(long, default_value = "1")]
        page: u32,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Args, Debug, Default, Clone)]
#[group(multiple = false)]
pub struct FilterArgs {
    /// Filter by learner name
    #[arg(long, conflicts_with = "email")]
    pub name: Option<String>,

    /// Filter by learner email
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Subcommand)]
pub enum LabsCommand {
    /// List one page of a learner's lab instances
    List {
        /// Learner's anonymous user id
        #[arg(long)]
        student: String,

        #[arg(long, default_value = "1")]
        page: u32,
    },
}

#[derive(Subcommand)]
pub enum LabCommand {
    /// Show details of one lab instance
    Show {
        lab_instance_id: String,

        /// Lab profile name, used in the "no details" message
        #[arg(long)]
        name: Option<String>,

        /// Print the raw provider document
        #[arg(long)]
        raw: bool,
    },
}

#[derive(Subcommand)]
pub enum DashboardCommand {
    /// Whether the instructor dashboard is available for the course
    Status,

    /// Request a dashboard URL and open it
    Launch {
        /// Only print the URL
        #[arg(long)]
        no_open: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config file (recording --course, if given)
    Init {
        #[arg(long)]
        force: bool,
    },
}

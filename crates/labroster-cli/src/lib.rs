//! `labroster`: browse a course roster, each learner's lab instances and
//! the details of a single lab, either interactively or one command at a
//! time.
//!
//! Screens and the router are plain state machines; all terminal and
//! network I/O happens in the handlers and renderers.

mod app;
mod args;
mod browser;
mod commands;
pub mod config;
pub mod context;
mod filter_form;
mod handlers;
mod logging;
mod presentation;
mod router;
mod screens;
pub mod types;

pub use args::{
    Cli, Commands, ConfigCommand, DashboardCommand, FilterArgs, LabCommand, LabsCommand,
    RosterCommand,
};
pub use commands::run;

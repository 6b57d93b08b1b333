use anyhow::Result;

use super::args::{
    Cli, Commands, ConfigCommand, DashboardCommand, LabCommand, LabsCommand, RosterCommand,
};
use super::handlers;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::logging;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui { route: None });

    let course_override = cli.course.clone();
    let ctx = ExecutionContext::new(data_dir, cli.config, cli.course, cli.format);

    // The alternate screen owns the terminal, so the browser logs to a file.
    if matches!(command, Commands::Tui { .. }) {
        logging::init_file(cli.log_level, &ctx.log_path())?;
    } else {
        logging::init_stderr(cli.log_level);
    }

    match command {
        Commands::Tui { route } => handlers::tui::handle(&ctx, route.as_deref()),

        Commands::Roster { command } => match command {
            RosterCommand::List { page, filter } => {
                handlers::roster::handle(&ctx, page, filter.to_filter()?)
            }
        },

        Commands::Labs { command } => match command {
            LabsCommand::List { student, page } => handlers::labs::handle(&ctx, &student, page),
        },

        Commands::Lab { command } => match command {
            LabCommand::Show {
                lab_instance_id,
                name,
                raw,
            } => handlers::lab::handle(&ctx, &lab_instance_id, name.as_deref(), raw),
        },

        Commands::Dashboard { command } => match command {
            DashboardCommand::Status => handlers::dashboard::status(&ctx),
            DashboardCommand::Launch { no_open } => handlers::dashboard::launch(&ctx, !no_open),
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => {
                handlers::config::init(&ctx, course_override.as_deref(), force)
            }
        },
    }
}

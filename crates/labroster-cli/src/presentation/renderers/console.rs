use std::fmt::Display;
use std::io::{self, Write};

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, StatusLevel};
use crate::presentation::views::CsvTable;
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    /// Colors are used only when stdout is a terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: io::stdout().is_terminal(),
        }
    }

    #[cfg(test)]
    pub fn without_color(format: OutputFormat) -> Self {
        Self {
            format,
            color: false,
        }
    }

    pub fn render_to<W, T>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        W: Write,
        T: Serialize + Display + CsvTable,
    {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            }
            OutputFormat::Csv => {
                let Some(table) = result.content.csv_rows() else {
                    bail!("CSV output is only available for list and detail results");
                };
                let mut writer = csv::Writer::from_writer(out);
                writer.write_record(&table.headers)?;
                for row in &table.rows {
                    writer.write_record(row)?;
                }
                writer.flush()?;
            }
            OutputFormat::Plain => self.render_plain(out, result)?,
        }
        Ok(())
    }

    fn render_plain<W, T>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        W: Write,
        T: Serialize + Display,
    {
        if let Some(badge) = &result.badge {
            if self.color {
                let label = match badge.level {
                    StatusLevel::Success => badge.label.green().bold().to_string(),
                    StatusLevel::Info => badge.label.cyan().bold().to_string(),
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                    StatusLevel::Error => badge.label.red().bold().to_string(),
                };
                writeln!(out, "{} {}", badge.icon(), label)?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content)?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {cmd}")?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display + CsvTable,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, result)
    }
}

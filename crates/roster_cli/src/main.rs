//! Interactive roster editor.
//!
//! # Responsibility
//! - Resolve configuration from environment and flags.
//! - Read one command per stdin line and print the page after each change.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::warn;
use roster_core::{init_logging, Command, Outcome, RosterSession, SessionConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Edit a roster of users from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Start with the JSON dump visible
    #[arg(long)]
    show_json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SessionConfig::from_env()
        .and_then(|config| config.with_overrides(cli.log_level, cli.log_dir, cli.show_json))
        .context("invalid configuration")?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let mut session = RosterSession::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(
        stdout,
        "roster {} (type `help` for commands)",
        roster_core::core_version()
    )?;
    write!(stdout, "{}", session.frame())?;

    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if input
            .read_line(&mut line)
            .context("failed to read from stdin")?
            == 0
        {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!("event=command_rejected module=cli status=error");
                writeln!(stdout, "error: {err}")?;
                continue;
            }
        };

        match session.dispatch(command) {
            Outcome::Continue => {}
            Outcome::Message(message) => writeln!(stdout, "{message}")?,
            Outcome::Quit => break,
        }
        if let Some(frame) = session.refresh() {
            write!(stdout, "{frame}")?;
        }
    }

    Ok(())
}

//! planar-check binary.
//!
//! Runs the geometry sanity checks, or splits a rectangle given on the command line.

mod checks;
mod cli;

use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Command, LogFormat};
use planar_geometry::{Position, Rectangle};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(&cli)?;

	match cli.command.unwrap_or(Command::Run) {
		Command::Run => {
			let failed = checks::run_all();
			if failed > 0 {
				bail!("{failed} of {} checks failed", checks::CHECKS.len());
			}
			info!(count = checks::CHECKS.len(), "all checks passed");
		}
		Command::Split {
			width,
			height,
			place,
			axis,
			x,
			y,
		} => {
			let rect = Rectangle::new(width, height, Position::new(x, y))?;
			let (first, second) = rect
				.split(axis.into(), place)
				.with_context(|| format!("cannot split {rect}"))?;
			println!("{first}");
			println!("{second}");
		}
	}

	Ok(())
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
	let default_level = if cli.verbose { "debug" } else { "info" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	let builder = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr);

	match cli.log_format {
		LogFormat::Text => tracing::subscriber::set_global_default(builder.finish())?,
		LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
	}
	Ok(())
}

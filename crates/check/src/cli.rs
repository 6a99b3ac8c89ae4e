use clap::{Parser, Subcommand, ValueEnum};
use planar_geometry::Axis;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "planar-check")]
#[command(about = "Sanity checks for planar geometry")]
#[command(version)]
pub struct Cli {
	/// Log at debug level (RUST_LOG takes precedence)
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Log output format
	#[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
	pub log_format: LogFormat,

	/// Subcommand to execute (runs the sanity checks if omitted).
	#[command(subcommand)]
	pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Run the built-in sanity checks
	Run,
	/// Split a rectangle and print both pieces
	Split {
		/// Rectangle width
		width: i32,
		/// Rectangle height
		height: i32,
		/// Cut offset from the bottom (horizontal) or left (vertical) edge
		place: i32,
		/// Cut line orientation
		#[arg(long, value_enum, default_value_t = CutAxis::Horizontal)]
		axis: CutAxis,
		/// Bottom-left corner x coordinate
		#[arg(long, default_value_t = 0, allow_negative_numbers = true)]
		x: i32,
		/// Bottom-left corner y coordinate
		#[arg(long, default_value_t = 0, allow_negative_numbers = true)]
		y: i32,
	},
}

/// Log output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
	Text,
	Json,
}

/// Cut line orientation as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CutAxis {
	Horizontal,
	Vertical,
}

impl From<CutAxis> for Axis {
	fn from(axis: CutAxis) -> Self {
		match axis {
			CutAxis::Horizontal => Axis::Horizontal,
			CutAxis::Vertical => Axis::Vertical,
		}
	}
}

#[macro_use]
extern crate lazy_static;

mod command_line;
mod commands {
	pub mod assets;
	pub mod export;
	pub mod plan;
}
mod configuration;
mod errors;
mod export;
mod manifest;
mod paths;
mod plan;
mod variant;

pub use crate::errors::{Error, Result};

use crate::variant::BuildVariant;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
enum Command {
	/// Prints the asset conversion commands.
	Assets,
	/// Writes the compile commands as a JSON compilation database.
	Export {
		#[structopt(short, long, default_value = "compile_commands.json")]
		output: PathBuf,
		#[structopt(short, long, default_value = "release")]
		variant: BuildVariant,
	},
	/// Prints the compile commands followed by the link command (default).
	Plan {
		#[structopt(short, long, default_value = "release")]
		variant: BuildVariant,
	},
}

impl Default for Command {
	fn default() -> Self {
		Command::Plan {
			variant: BuildVariant::default(),
		}
	}
}

#[derive(Debug, StructOpt)]
#[structopt(about)]
struct Args {
	#[structopt(subcommand)]
	command: Option<Command>,

	#[structopt(short, long, default_value = "buildgen.yml")]
	manifest: PathBuf,
}

fn main() -> Result<()> {
	let args = Args::from_args();

	let command = args.command.unwrap_or_else(Command::default);
	match command {
		Command::Assets => commands::assets::execute(&commands::assets::Options {
			manifest_path: &args.manifest,
		}),

		Command::Export { output, variant } => {
			commands::export::execute(&commands::export::Options {
				manifest_path: &args.manifest,
				output: &output,
				variant,
			})
		}

		Command::Plan { variant } => commands::plan::execute(&commands::plan::Options {
			manifest_path: &args.manifest,
			variant,
		}),
	}
}

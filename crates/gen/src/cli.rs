use std::path::PathBuf;

use clap::Parser;
use oro_theme::ThemeDefinition;

#[derive(Parser, Debug)]
#[command(name = "oro-gen")]
#[command(about = "Generates the Oro VS Code color themes")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Directory the theme files are written to
	#[arg(long, short = 'o', value_name = "PATH", default_value = "dist")]
	pub out_dir: PathBuf,

	/// Only generate themes matching this name or file stem (repeatable)
	#[arg(long, short = 't', value_name = "NAME")]
	pub theme: Vec<String>,

	/// List the available themes and exit
	#[arg(long)]
	pub list: bool,

	/// Verbose logging
	#[arg(long, short)]
	pub verbose: bool,
}

impl Cli {
	/// Whether `def` passes the `--theme` filters. No filters selects everything.
	pub fn selects(&self, def: &ThemeDefinition) -> bool {
		self.theme.is_empty() || self.theme.iter().any(|wanted| matches_theme(wanted, def))
	}
}

/// Matches a display name case-insensitively, or an output filename with or
/// without its `.json` extension.
pub fn matches_theme(wanted: &str, def: &ThemeDefinition) -> bool {
	let stem = def.filename.strip_suffix(".json").unwrap_or(&def.filename);
	def.name.eq_ignore_ascii_case(wanted) || def.filename == wanted || stem == wanted
}

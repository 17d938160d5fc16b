//! Oro theme generator.
//!
//! Loads the shipped theme definitions, resolves each one and writes a VS Code
//! color theme file per definition.

mod cli;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use oro_theme::{ThemeDefinition, build, builtin_themes};
use tracing::info;

use crate::cli::{Cli, matches_theme};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let themes = builtin_themes().context("failed to load theme definitions")?;

	if cli.list {
		for def in &themes {
			println!("{}\t{}", def.filename, def.name);
		}
		return Ok(());
	}

	for path in generate(&cli, &themes)? {
		println!("{}", path.display());
	}
	Ok(())
}

/// Generates every selected theme, stopping at the first failure.
fn generate(cli: &Cli, themes: &[ThemeDefinition]) -> anyhow::Result<Vec<PathBuf>> {
	if let Some(unknown) = cli.theme.iter().find(|wanted| !themes.iter().any(|def| matches_theme(wanted, def))) {
		bail!("no theme named '{unknown}'");
	}

	let mut written = Vec::new();
	for def in themes.iter().filter(|def| cli.selects(def)) {
		let resolved = build(def).with_context(|| format!("failed to build theme '{}'", def.name))?;
		let doc = oro_vscode::map(&resolved);
		let path = oro_vscode::emit(&cli.out_dir, &doc, &def.filename)
			.with_context(|| format!("failed to write theme '{}'", def.name))?;
		written.push(path);
	}

	info!(count = written.len(), out_dir = %cli.out_dir.display(), "generated themes");
	Ok(written)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("oro=debug,info")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

//! CLI definitions and entry point

use clap::Parser;

use super::commands;
use airtightcss::output::OutputMode;

/// airtightcss - Lint CSS for airtightness
#[derive(Parser, Debug)]
#[command(
    name = "airtightcss",
    version,
    about = "Lint CSS for airtightness",
    long_about = "Check stylesheets against a component-scoped naming discipline.\n\n\
                  Top-level selectors must be BEM block classes, child classes must\n\
                  carry the block__ prefix, and absolutely positioned elements must\n\
                  be nested under a relatively positioned parent."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Files, directories, or glob patterns to lint
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::check(&cli.paths, output_mode)
}

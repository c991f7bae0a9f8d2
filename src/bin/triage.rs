use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use simple_logger::SimpleLogger;
use triage::{Config, Session};

#[derive(Debug, Parser)]
#[command(name = "triage", version, about = "Hospital triage priority queue")]
struct Options {
    /// TOML file with interpreter settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Command file to replay before reading stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Exit after the script instead of prompting
    #[arg(long, requires = "script")]
    batch: bool,

    #[arg(long)]
    no_color: bool,

    /// Overrides the configured log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    let mut config = match &options.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let level = config.apply_overrides(options.no_color, options.log_level)?;
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to install logger")?;

    let stdout = io::stdout();
    let mut session = Session::new(BufWriter::new(stdout.lock()), config);

    if let Some(script) = &options.script {
        session
            .load(script)
            .with_context(|| format!("failed to run {}", script.display()))?;
    }
    if !options.batch {
        session.run(io::stdin().lock()).context("failed to read commands")?;
    }
    Ok(())
}

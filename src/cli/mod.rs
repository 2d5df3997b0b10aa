use clap::Parser;
use log::info;
use std::path::PathBuf;

use crate::config::Config;
use crate::shell::Shell;
use crate::storage::collection::Collection;

#[derive(Parser)]
#[command(name = "albumdeck")]
#[command(version = "0.1")]
#[command(about = "Interactive in-memory music collection")]
#[command(
    after_help = "Logs are written to stderr. RUST_LOG overrides the log level from the config file."
)]
pub struct Cli {
    /// Path to an optional config TOML file (prompt text, log level)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cfg.log.level))
        .init();
    if let Some(path) = &cli.config {
        info!("Loaded config from {}", path.to_string_lossy());
    }

    let mut collection = Collection::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    Shell::new(&mut collection, cfg.shell, stdout.lock()).run(stdin.lock())?;

    info!("Session ended with {} albums, discarding them", collection.len());
    Ok(())
}

//! contentscroll - Entry Point

use clap::Parser;
use contentscroll::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
};
use contentscroll::model::AppError;
use contentscroll::source::InputSource;
use std::path::PathBuf;
use tracing::{info, warn};

/// contentscroll - eased scroll viewport over a list of placard records
#[derive(Parser, Debug)]
#[command(name = "contentscroll")]
#[command(version)]
#[command(about = "Scroll viewport with eased wheel, drag and keyboard scrolling")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fixed viewport height in rows (fills the terminal if omitted)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: Option<u16>,

    /// Number of generated fixture pages (30 records each)
    #[arg(long)]
    pub pages: Option<u32>,

    /// Seed for generated records
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read records from a fixture JSON file instead of generating them
    #[arg(long)]
    pub file: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);

    // Log settings only come from the file, so the subscriber can be
    // installed before the env overrides are checked.
    contentscroll::logging::init(&merged.log_file_path, &merged.log_level)?;

    let (with_env, ignored) = apply_env_overrides(merged);
    for setting in &ignored {
        warn!(name = setting.name, value = %setting.value, "ignoring invalid environment override");
    }
    let config = apply_cli_overrides(with_env, args.height, args.pages, args.seed);
    info!(config = ?config, "Configuration loaded and resolved");

    let seed = config
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis().unsigned_abs());
    let source = InputSource::detect(args.file, config.fixture_pages, seed);

    contentscroll::view::run_with_source(source, &config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}

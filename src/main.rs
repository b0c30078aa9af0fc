//! Mochi Paint
//!
//! Interactive character-grid drawing in the terminal.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mochi_paint::app::{self, Config, Session};
use mochi_paint::core::Snapshot;

/// CLI arguments for Mochi Paint
#[derive(Parser, Debug)]
#[command(name = "mochi-paint")]
#[command(version)]
#[command(about = "Draw on a character grid in the terminal", long_about = None)]
struct CliArgs {
    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width in columns
    #[arg(long, value_name = "COLS")]
    width: Option<usize>,

    /// Canvas height in rows
    #[arg(long, value_name = "ROWS")]
    height: Option<usize>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Print the final canvas as a JSON snapshot on exit
    #[arg(long)]
    dump_json: bool,
}

fn main() -> ExitCode {
    // Log to stderr so nothing interleaves with the canvas
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config, args.dump_json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            eprintln!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Config precedence: CLI > file > defaults
fn load_config(args: &CliArgs) -> Result<Config, app::ConfigError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };

    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }
    if args.no_color {
        config.display.ansi_colors = false;
    }

    config.validate()?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn run(config: &Config, dump_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    app::run(stdin.lock(), stdout.lock(), &mut session)?;

    if dump_json {
        println!("{}", Snapshot::from_grid(session.grid()).to_json()?);
    }
    Ok(())
}

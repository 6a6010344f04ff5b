//! pathviz: animated Dijkstra and A* on a terminal grid.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use pathviz::{Session, VisualizerConfig, config};
use pathviz_crossterm::CrosstermDriver;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pathviz",
    version,
    about = "Paint walls, then watch Dijkstra (1) or A* (2) search the grid; 3 compares both"
)]
struct Args {
    /// Pause after each search step, in milliseconds.
    #[arg(long, default_value_t = config::DEFAULT_STEP_DELAY.as_millis() as u64)]
    step_delay_ms: u64,

    /// Write logs to this file. Filtered by RUST_LOG, `info` by default.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Install a file-backed subscriber. Without a file nothing is installed:
/// log output on the terminal would corrupt the board.
fn init_logging(path: &Path) -> Result<WorkerGuard, Box<dyn Error>> {
    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file = path.file_name().ok_or("--log-file needs a file name")?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| err as Box<dyn Error>)?;
    Ok(guard)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _guard = args.log_file.as_deref().map(init_logging).transpose()?;

    let config = VisualizerConfig::default()
        .with_step_delay(Duration::from_millis(args.step_delay_ms));
    let driver = CrosstermDriver::new().with_title(config.title.clone());
    let mut session = Session::new(driver, config)?;
    session.run()
}

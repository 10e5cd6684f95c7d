//! filesort CLI - Sort files into folders named after their extensions

use clap::Parser;
use filesort::config::{CliArgs, SortConfig};
use filesort::core::Sorter;
use filesort::error::{Result, SortError};
use tracing::{error, info};

fn main() {
    // Scoped to the main thread; the walk runs on a current-thread runtime
    let _log_guard = tracing::subscriber::set_default(filesort::logging::subscriber());

    // Parse CLI arguments
    let args = CliArgs::parse();

    // Handle result
    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let config = SortConfig::from_cli(&args);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SortError::Runtime(e.to_string()))?;

    let report = runtime.block_on(Sorter::new(config).run())?;

    // Per-file failures were already logged and do not change the exit code
    report.log_summary();
    info!("All files sorted!");

    Ok(())
}

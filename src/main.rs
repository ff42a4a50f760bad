use anyhow::{Context, Result};
use clap::Parser;
use csek_bench::{cli::Cli, Orchestrator, ProcessRunner};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber; diagnostics go to stderr
///
/// `RUST_LOG` is honored unless `--debug` forces trace level.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Usage errors (missing RUNS) exit here, before anything touches the disk.
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = args.to_config().context("Invalid benchmark configuration")?;
    tracing::info!(
        runs = args.runs,
        repetitions = config.repetitions,
        sizes = config.sizes.len(),
        output_dir = %config.output_dir.display(),
        "starting benchmark session"
    );

    let stdout = std::io::stdout();
    let mut orchestrator = Orchestrator::new(config, ProcessRunner::new(), stdout.lock())?;
    let summaries = orchestrator.run(args.runs)?;

    let failed: u32 = summaries
        .iter()
        .map(|s| s.read.failed + s.write.failed)
        .sum();
    tracing::info!(runs = summaries.len(), failed, "benchmark session complete");

    Ok(())
}

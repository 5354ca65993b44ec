// ============================================================================
// Demo Runner
// Prints the sample calculations to stdout
// ============================================================================

use anyhow::Result;
use layered_math::runner::{run, DemoConfig};
use tracing::info;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    init_logging()?;

    let config = DemoConfig::default();
    config.validate().map_err(anyhow::Error::msg)?;

    info!("This is a demo project! Performing calculations...");

    for calculation in run(&config)? {
        println!("{calculation}");
    }

    Ok(())
}

// Logs go to stderr so stdout carries only the results.
#[cfg(feature = "logging")]
fn init_logging() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("layered_math=info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

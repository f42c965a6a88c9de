use std::io;

use innforge::{Console, Hotel, HotelConfig, SharedOutput};
use tracing_subscriber::EnvFilter;

/// Environment variable naming an optional JSON config file.
const CONFIG_ENV: &str = "INNFORGE_CONFIG";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => HotelConfig::from_path(path)?,
        None => HotelConfig::default(),
    };

    let mut hotel = Hotel::new(config);
    let output = SharedOutput::new(io::stdout());
    let mut console = Console::new(&mut hotel, io::stdin().lock(), output);
    console.run()?;
    Ok(())
}

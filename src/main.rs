use clap::Parser;
use ldforge::cli::Cli;
use ldforge::commands;
use ldforge::config::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Settings: {:?}", settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli, &settings, &mut out)
}

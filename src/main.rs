use anyhow::Context;
use clap::Parser;
use event_management::config::{LogFormat, Validate};
use event_management::utils::logger;
use event_management::{AppError, CliConfig, Showcase, ShowcaseConfig};

fn load_config(cli: &CliConfig) -> Result<ShowcaseConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => ShowcaseConfig::from_file(path)?,
        None => ShowcaseConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    match config.log_format() {
        LogFormat::Json => logger::init_json_logger(cli.verbose, config.log_level()),
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, config.log_level()),
    }

    tracing::info!("Starting event-management showcase");
    if cli.verbose {
        tracing::debug!("Showcase config: {:?}", config);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut showcase = Showcase::new(&config);

    if let Err(e) = showcase.run(&mut out) {
        tracing::error!(
            "❌ Showcase failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    std::io::Write::flush(&mut out).context("failed to flush stdout")?;
    Ok(())
}

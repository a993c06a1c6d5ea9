use clap::Parser;
use job_insights::utils::logger;
use job_insights::{execute, CliConfig, Result};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    let log_level = config.configured_log_level();
    if config.log_json {
        logger::init_json_logger(config.verbose, log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, log_level.as_deref());
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Query failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let settings = config.resolve()?;
    let output = execute(&config.command, &settings)?;
    print!("{}", output.render(settings.format)?);
    Ok(())
}

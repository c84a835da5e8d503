use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use pulsewatch::application::config::AppConfig;
use pulsewatch::application::services::monitor::MonitorService;
use pulsewatch::application::services::scheduler::Scheduler;
use pulsewatch::infrastructure::http::HttpProber;
use pulsewatch::infrastructure::notifications::create_notifier;
use pulsewatch::infrastructure::persistence::{
    InMemoryResultLog, InMemoryTargetRegistry, TextFileSink,
};
use pulsewatch::presentation::cli::app::{Cli, Commands};
use pulsewatch::presentation::cli::commands::check::run_check;
use pulsewatch::presentation::cli::commands::daemon::run_daemon;
use pulsewatch::presentation::cli::commands::register_targets;
use pulsewatch::presentation::cli::commands::status::run_status;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  PULSEWATCH · Website Health Monitor".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_service(config: &AppConfig) -> anyhow::Result<MonitorService> {
    let settings = config.settings();
    let prober = HttpProber::new(settings.probe_timeout, &settings.user_agent)
        .context("Failed to build HTTP client")?;

    let service = MonitorService::new(
        Arc::new(InMemoryTargetRegistry::new()),
        Arc::new(InMemoryResultLog::new(settings.log_capacity)),
        Arc::new(prober),
        create_notifier(&config.notifications),
    );

    Ok(match config.notifications.data_dir.as_deref() {
        Some(dir) if !dir.trim().is_empty() => {
            service.with_sink(Arc::new(TextFileSink::new(dir.trim())))
        }
        _ => service,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI: main.rs is the only place that knows concrete types
    let service = build_service(&config)?;

    match cli.command {
        Some(Commands::Check { urls, json }) => {
            run_check(&service, &urls, json).await?;
        }
        Some(Commands::Status { json }) => {
            register_targets(&service, &config.targets)?;
            run_status(&service, json).await?;
        }
        Some(Commands::Daemon) | None => {
            print_banner();
            register_targets(&service, &config.targets)?;
            let scheduler = Scheduler::new(Arc::new(service), &config.settings());
            run_daemon(&scheduler).await?;
        }
    }

    Ok(())
}

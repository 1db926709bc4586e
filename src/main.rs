//! Linguasea binary entrypoint kept minimal. The full runtime lives in
//! `app`.

use std::path::PathBuf;
use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

/// Timestamp formatter for log lines, rendering `YYYY-MM-DD HH:MM:SS` UTC.
struct LinguaseaTimer;

impl tracing_subscriber::fmt::time::FormatTime for LinguaseaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = match SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(_) => 0,
        };
        w.write_str(&linguasea::util::ts_to_date(Some(secs)))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Browse and search a language-learning lesson catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "linguasea", version, about)]
struct Cli {
    /// Path to a catalog JSON file overriding the default location
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Disable the remote catalog source even when configured
    #[arg(long)]
    offline: bool,
}

/// Initialize the tracing logger writing to the config logs directory,
/// falling back to stderr when the log file cannot be opened.
fn init_logging() {
    let mut log_path = linguasea::config::logs_dir();
    log_path.push("linguasea.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LinguaseaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .with_timer(LinguaseaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    tracing::info!(offline = cli.offline, "Linguasea starting");
    if let Err(err) = linguasea::app::run(cli.offline, cli.catalog).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Linguasea exited");
}

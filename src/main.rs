use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use taskd::{config::DaemonConfig, rest, AppContext};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "taskd",
    about = "taskd — minimal in-memory task-tracking HTTP daemon",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// REST server port
    #[arg(long, env = "TASKD_PORT")]
    port: Option<u16>,

    /// Bind address for the REST server (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "TASKD_BIND")]
    bind_address: Option<String>,

    /// API key required by the gated /apiv2 routes. Unset = /apiv2 rejects everything.
    #[arg(long, env = "TASKD_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKD_LOG")]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "TASKD_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Path to a TOML config file (default: ./config.toml when present)
    #[arg(long, env = "TASKD_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the daemon server (default when no subcommand given).
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.or_else(|| {
        let default = PathBuf::from("config.toml");
        default.exists().then_some(default)
    });

    let config = Arc::new(DaemonConfig::new(
        args.port,
        args.bind_address,
        args.api_key,
        args.log,
        config_path.as_deref(),
    )?);

    let _log_guard = setup_logging(&config.log, args.log_file.as_deref(), &config.log_format);

    match args.command {
        Some(Command::Serve) | None => serve(config).await,
    }
}

async fn serve(config: Arc<DaemonConfig>) -> Result<()> {
    if config.api_key.is_none() {
        info!("no API key configured — /apiv2 routes will reject every request");
    }
    let ctx = Arc::new(AppContext::new(config));
    rest::start_rest_server(ctx).await
}

/// Initialise the tracing subscriber.
///
/// Logs go to stdout in compact or JSON form; with a `--log-file` path they
/// are additionally written to a daily-rotated file. The returned guard must
/// stay alive for the non-blocking file writer to flush.
fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    let Some(path) = log_file else {
        if use_json {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(log_level)
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .compact()
                .init();
        }
        return None;
    };

    let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let filename = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("taskd.log"));

    // Ensure the directory exists before tracing-appender tries to open it.
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!(
            "warn: could not create log directory '{}': {e} — falling back to stdout",
            dir.display()
        );
        if use_json {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(log_level)
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .compact()
                .init();
        }
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    if use_json {
        tracing_subscriber::registry()
            .with(EnvFilter::new(log_level))
            .with(fmt::layer().json())
            .with(fmt::layer().json().with_writer(non_blocking))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(log_level))
            .with(fmt::layer().compact())
            .with(fmt::layer().compact().with_writer(non_blocking))
            .init();
    }

    Some(guard)
}

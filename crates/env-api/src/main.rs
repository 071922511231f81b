//! env-api: serve the process environment over HTTP.

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use env_api::telemetry::{init_tracing, LogFormat};
use env_api::{
    ApiConfig, EnvApiService, EnvironmentSource, ExposurePolicy, ProcessEnvironment,
    StaticEnvironment,
};

/// Dotenv files loaded when no `--env-file` is given, highest priority first.
const DEFAULT_ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// env-api: environment variable inspector
#[derive(Parser, Debug)]
#[command(name = "env-api")]
#[command(about = "HTTP endpoint that reports environment variables", version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Exposure policy: filtered or unfiltered
    #[arg(long)]
    policy: Option<ExposurePolicy>,

    /// Dotenv file to load before serving (repeatable)
    #[arg(long = "env-file", conflicts_with = "no_env_file")]
    env_files: Vec<PathBuf>,

    /// Do not load any dotenv file
    #[arg(long)]
    no_env_file: bool,

    /// Serve a fixed sample environment instead of the process one
    #[arg(long)]
    demo: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(format, "info").map_err(anyhow::Error::msg)?;

    load_env_files(&args, Path::new("."))?;

    let source: Arc<dyn EnvironmentSource> = if args.demo {
        info!("Serving demo environment");
        Arc::new(StaticEnvironment::demo())
    } else {
        Arc::new(ProcessEnvironment::new())
    };

    let config = build_config(&args)?;
    let service = EnvApiService::new(config, source).context("invalid configuration")?;

    let handle = service.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl+C received");
            handle.shutdown();
        }
    });

    service.start().await.context("server failed")?;
    Ok(())
}

/// Defaults, then the TOML file, then `ENV_API_*` variables, then flags.
fn build_config(args: &Args) -> Result<ApiConfig> {
    let mut config = match &args.config {
        Some(path) => ApiConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ApiConfig::default(),
    };

    config
        .apply_env_overrides(&ProcessEnvironment::new())
        .context("applying ENV_API_* overrides")?;

    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }
    if let Some(policy) = args.policy {
        config.exposure.policy = policy;
    }

    Ok(config)
}

/// Explicit `--env-file`s, or the default files found in `dir`.
/// Variables already set in the process are never overridden.
fn load_env_files(args: &Args, dir: &Path) -> Result<()> {
    if args.no_env_file {
        return Ok(());
    }

    if !args.env_files.is_empty() {
        for path in &args.env_files {
            dotenvy::from_path(path)
                .with_context(|| format!("loading env file {}", path.display()))?;
            info!(path = %path.display(), "Loaded env file");
        }
        return Ok(());
    }

    for name in DEFAULT_ENV_FILES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match dotenvy::from_path(&path) {
            Ok(()) => info!(path = %path.display(), "Loaded env file"),
            Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable env file"),
        }
    }

    Ok(())
}

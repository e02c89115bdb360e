use anyhow::Context;
use clap::Parser;
use movie_editors::config::toml_config::TomlConfig;
use movie_editors::utils::error::{ErrorSeverity, MovieError};
use movie_editors::utils::logger;
use movie_editors::{build_router, AppConfig, CliConfig, MovieHandler, TmdbClient};
use std::sync::Arc;

fn load_config(cli: &CliConfig) -> Result<AppConfig, MovieError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration file {}", path.display());
            TomlConfig::from_file(path)?.into_partial()
        }
        None => Default::default(),
    };
    cli.overrides().or(file).resolve()
}

fn exit_with(e: &MovieError) -> ! {
    tracing::error!(
        "❌ Start-up failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Critical => 3,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Low | ErrorSeverity::High => 1,
    };
    std::process::exit(exit_code);
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在時忽略
    let _ = dotenvy::dotenv();

    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_logger(cli.verbose);
    }

    tracing::info!("Starting movie-editors");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    let addr = config.bind_address();

    let source = match TmdbClient::new(config) {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };
    let app = build_router(Arc::new(MovieHandler::new(source)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server running on http://{}", addr);
    tracing::info!("  GET /movies/:year - movies released in a year, with editors");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

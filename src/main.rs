use anyhow::Context;
use clap::Parser;
use starship_info::app::{build_router, serve};
use starship_info::utils::error::{CatalogError, ErrorSeverity};
use starship_info::utils::{logger, validation::Validate};
use starship_info::{
    CliConfig, ConfigProvider, HttpCatalogClient, InformationAggregator, TomlConfig,
};
use std::sync::Arc;

/// 依嚴重程度決定退出碼
fn exit_code(e: &CatalogError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: CatalogError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置：指定 --config 時以 TOML 檔案取代命令列參數
    let (config, verbose): (Box<dyn ConfigProvider>, bool) = match &cli.config {
        Some(path) => {
            let toml_config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            if let Err(e) = toml_config.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(exit_code(&e));
            }
            let verbose = cli.verbose || toml_config.verbose();
            (Box::new(toml_config), verbose)
        }
        None => {
            if let Err(e) = cli.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(exit_code(&e));
            }
            (Box::new(cli.clone()), cli.verbose)
        }
    };

    // 初始化日誌
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting starship-info");
    tracing::info!("📡 Catalog API: {}", config.catalog_url());
    let targets = config.targets();
    tracing::info!(
        "🎯 Targets: starship '{}', person '{}', planet '{}'",
        targets.starship,
        targets.person,
        targets.planet
    );
    if config.concurrent_lookups() {
        tracing::info!("⚡ Concurrent lookups enabled");
    }

    let client = HttpCatalogClient::from_config(&*config).unwrap_or_else(|e| fail(e));
    let aggregator = InformationAggregator::new(Arc::new(client), targets)
        .with_concurrent_lookups(config.concurrent_lookups());
    let router = build_router(Arc::new(aggregator));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    if let Err(e) = serve(listener, router).await {
        fail(e);
    }

    tracing::info!("👋 starship-info stopped");
    Ok(())
}

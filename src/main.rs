use accent_etl::utils::{logger, validation::Validate};
use accent_etl::{AccentPipeline, CliConfig, EtlEngine, EtlError, LocalStorage};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Accent index build failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), EtlError> {
    // 載入並驗證配置
    let config = cli.resolve()?;
    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);

    let pipeline = AccentPipeline::new(LocalStorage::default(), config);
    let report = EtlEngine::new(pipeline).run().await?;

    tracing::info!(
        "✅ {} vocabulary terms written to {}",
        report.stats.vocab_count,
        report.destination
    );
    Ok(())
}

use clap::Parser;
use stackgen::utils::{logger, validation::Validate};
use stackgen::{CliConfig, LocalStorage, ScaffoldEngine, ScaffoldPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting stackgen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ScaffoldPipeline::new(storage, config);

    // 創建引擎並運行
    let engine = ScaffoldEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            if report.is_complete() {
                tracing::info!("✅ Scaffold generation completed successfully!");
                println!("✅ Scaffold generation completed successfully!");
                println!("📁 {}", report.summary());
            } else {
                // 部分失敗：列出失敗的檔案並以非零碼退出
                tracing::warn!("⚠️ Scaffold generation finished with failures");
                eprintln!("⚠️ {}", report.summary());
                for failure in &report.failures {
                    eprintln!("❌ {}: {}", failure.filename, failure.reason);
                }
                std::process::exit(1);
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Scaffold generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                stackgen::utils::error::ErrorSeverity::Low => 0,
                stackgen::utils::error::ErrorSeverity::Medium => 2,
                stackgen::utils::error::ErrorSeverity::High => 1,
                stackgen::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

use clap::Parser;
use stackgen::config::toml_config::TomlConfig;
use stackgen::utils::{logger, validation::Validate};
use stackgen::{LocalStorage, ScaffoldEngine, ScaffoldPipeline};

#[derive(Parser)]
#[command(name = "toml-scaffold")]
#[command(about = "Scaffolding tool with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "scaffold-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - list artifacts without writing them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based scaffolding tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config);

    let storage = LocalStorage::new(config.output.path.clone());
    let pipeline = ScaffoldPipeline::new(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&pipeline);
        return Ok(());
    }

    // 創建引擎並運行
    let engine = ScaffoldEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            if report.is_complete() {
                tracing::info!("✅ Scaffold generation completed successfully!");
                println!("✅ Scaffold generation completed successfully!");
                println!("📁 {}", report.summary());
            } else {
                tracing::warn!("⚠️ Scaffold generation finished with failures");
                eprintln!("⚠️ {}", report.summary());
                for failure in &report.failures {
                    eprintln!("❌ {}: {}", failure.filename, failure.reason);
                }
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Scaffold generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

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

fn display_config_summary(config: &TomlConfig) {
    if let Some(name) = config.project_name() {
        tracing::info!("📦 Project: {}", name);
    }
    if let Some(description) = config.project.as_ref().and_then(|p| p.description.as_deref()) {
        tracing::info!("📝 {}", description);
    }
    tracing::info!("📁 Output path: {}", config.output.path);
    match &config.output.artifacts {
        Some(artifacts) => tracing::info!("📄 Artifacts: {}", artifacts.join(", ")),
        None => tracing::info!("📄 Artifacts: all built-in"),
    }
}

fn perform_dry_run<G: stackgen::core::Generator>(generator: &G) {
    let plan = generator.plan();
    println!("Would write {} artifacts:", plan.len());
    for artifact in &plan {
        println!("  📄 {} ({} bytes)", artifact.filename, artifact.content.len());
    }
}

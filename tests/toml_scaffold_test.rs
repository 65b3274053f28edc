use stackgen::config::toml_config::TomlConfig;
use stackgen::utils::validation::Validate;
use stackgen::{LocalStorage, ScaffoldEngine, ScaffoldPipeline};
use tempfile::TempDir;

#[tokio::test]
async fn test_toml_driven_run_end_to_end() {
    let out_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();

    let config_path = config_dir.path().join("scaffold-config.toml");
    let config_text = format!(
        r#"
[project]
name = "demo-service"
description = "integration fixture"

[output]
path = "{}"
artifacts = ["config.yaml", "Dockerfile"]
"#,
        out_dir.path().to_str().unwrap()
    );
    std::fs::write(&config_path, config_text).unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.project_name(), Some("demo-service"));

    let storage = LocalStorage::new(config.output.path.clone());
    let pipeline = ScaffoldPipeline::new(storage, config);
    let report = ScaffoldEngine::new(pipeline).run().await.unwrap();

    assert!(report.is_complete());
    assert_eq!(report.written, vec!["config.yaml", "Dockerfile"]);
    assert!(out_dir.path().join("config.yaml").exists());
    assert!(out_dir.path().join("Dockerfile").exists());
    assert!(!out_dir.path().join(".env.example").exists());
}

#[tokio::test]
async fn test_toml_config_missing_file_is_io_error() {
    let result = TomlConfig::from_file("/no/such/scaffold-config.toml");
    assert!(matches!(result, Err(stackgen::ScaffoldError::IoError(_))));
}

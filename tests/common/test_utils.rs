use ask_proxy::{
    Result,
    config::UpstreamConfig,
    llm::CompletionClient,
    server::{self, AppState},
};
use axum_test::TestServer;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const TEST_API_KEY: &str = "sk-test-key";

/// Upstream settings with a key present and everything else defaulted
pub fn create_test_upstream_config() -> UpstreamConfig {
    UpstreamConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        ..UpstreamConfig::default()
    }
}

/// Build a test server around the full router
pub fn create_test_server(client: Arc<dyn CompletionClient>, upstream: UpstreamConfig) -> TestServer {
    let app = server::router(AppState::new(client, upstream));
    TestServer::new(app).expect("Failed to start test server")
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

use eburon_gateway::{
    aliases::ModelAliases,
    backend::OllamaClient,
    config::{AliasConfig, BackendConfig, Config, LogsConfig, ServerConfig},
    server::{self, handlers::AppState},
};
use axum::Router;
use std::sync::Arc;

/// Create a test configuration with sensible defaults
#[allow(dead_code)]
pub fn create_test_config(backend_address: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        backend: BackendConfig {
            address: backend_address.to_string(),
            timeout_secs: None,
        },
        aliases: create_test_aliases(),
    }
}

pub fn create_test_aliases() -> Vec<AliasConfig> {
    vec![
        AliasConfig {
            alias: "eburon-apo:ultimate".to_string(),
            model: "llama3:latest".to_string(),
        },
        AliasConfig {
            alias: "eburon-callao:flash".to_string(),
            model: "phi3:latest".to_string(),
        },
    ]
}

/// Build the full application router wired to the given backend address.
#[allow(dead_code)]
pub fn create_test_app(backend_address: &str) -> Router {
    let backend = OllamaClient::new(BackendConfig {
        address: backend_address.to_string(),
        timeout_secs: None,
    })
    .unwrap();

    let state = AppState {
        aliases: Arc::new(ModelAliases::new(create_test_aliases())),
        backend: Arc::new(backend),
        backend_address: backend_address.to_string(),
    };

    server::app(state)
}

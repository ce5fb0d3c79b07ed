use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default = "default_aliases")]
    pub aliases: Vec<AliasConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_address")]
    pub address: String,
    /// Optional request ceiling in seconds. Absent means the outbound
    /// call may block indefinitely; generations can be slow.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// One alias table entry: the caller-facing name and the model
/// identifier the backend actually knows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AliasConfig {
    pub alias: String,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            backend: BackendConfig::default(),
            aliases: default_aliases(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            address: default_backend_address(),
            timeout_secs: None,
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_backend_address() -> String {
    "http://localhost:11434".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_aliases() -> Vec<AliasConfig> {
    [
        ("eburon-apo:ultimate", "llama3:latest"),
        ("eburon-buntun:vision", "llava:latest"),
        ("eburon-callao:flash", "phi3:latest"),
        ("eburon-itawit:heritage", "mistral:latest"),
    ]
    .into_iter()
    .map(|(alias, model)| AliasConfig {
        alias: alias.to_string(),
        model: model.to_string(),
    })
    .collect()
}

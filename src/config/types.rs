// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub fs: FsConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; defaults to CPU core count when unset
    pub workers: Option<usize>,
}

/// Filesystem configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FsConfig {
    /// Base directory override; the user's home directory when unset
    pub root: Option<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Operation log format: `kv` or `json`
    pub format: String,
    /// Emit one line per request outcome
    pub operation_log: bool,
    /// Emit a line per accepted connection
    pub connection_log: bool,
    /// Operation log file; stdout when unset
    pub operation_log_file: Option<String>,
    /// Error log file; stderr when unset
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub max_body_size: u64,
    pub enable_cors: bool,
}

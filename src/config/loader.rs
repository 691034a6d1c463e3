//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `API_GATEWAY_URL` / `PUBLIC_API_GATEWAY_URL`
//! 2. 环境变量（前缀 `SOCCER_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 服务端网关地址覆盖变量
pub const GATEWAY_URL_ENV: &str = "API_GATEWAY_URL";
/// 浏览器端网关地址覆盖变量
pub const PUBLIC_GATEWAY_URL_ENV: &str = "PUBLIC_API_GATEWAY_URL";

/// 网关地址覆盖（优先级最高）
#[derive(Debug, Clone, Default)]
pub struct GatewayOverrides {
    pub url: Option<String>,
    pub public_url: Option<String>,
}

impl GatewayOverrides {
    /// 从进程环境读取
    pub fn from_env() -> Self {
        Self {
            url: std::env::var(GATEWAY_URL_ENV).ok().filter(|v| !v.is_empty()),
            public_url: std::env::var(PUBLIC_GATEWAY_URL_ENV)
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

/// 加载应用配置
///
/// # 环境变量示例
/// - `SOCCER_SERVER__PORT=3000`
/// - `SOCCER_GATEWAY__URL=http://discoveryserver:8080`
/// - `SOCCER_SERVER__CORS_ALLOWED_ORIGINS=http://localhost:3000,http://127.0.0.1:3000`
/// - `API_GATEWAY_URL=http://gateway:8080`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    build_config(config_path, GatewayOverrides::from_env())
}

fn build_config(
    config_path: Option<&Path>,
    overrides: GatewayOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("gateway.url", "http://discoveryserver:8080")?
        .set_default("gateway.public_url", "http://localhost:8080")?
        .set_default("storage.db_path", "data/client-state.sled")?
        .set_default("storage.key", "app-storage")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量，例如 SOCCER_GATEWAY__URL=http://gateway:8080
    builder = builder.add_source(
        Environment::with_prefix("SOCCER")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.cors_allowed_origins")
            .try_parsing(true),
    );

    // 4. 网关地址覆盖（最高优先级）
    builder = builder
        .set_override_option("gateway.url", overrides.url)?
        .set_override_option("gateway.public_url", overrides.public_url)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    for (name, url) in [
        ("gateway.url", &config.gateway.url),
        ("gateway.public_url", &config.gateway.public_url),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be an http(s) URL, got '{}'",
                name, url
            )));
        }
    }

    if config.storage.key.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage key cannot be empty".to_string(),
        ));
    }

    if config.storage.db_path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Gateway (server): {}", config.gateway.url);
    tracing::info!("Gateway (browser): {}", config.gateway.public_url);
    match config.gateway.timeout_secs {
        Some(secs) => tracing::info!("Gateway Timeout: {}s", secs),
        None => tracing::info!("Gateway Timeout: disabled"),
    }
    if config.server.cors_allowed_origins.is_empty() {
        tracing::info!("CORS: any origin");
    } else {
        tracing::info!("CORS: {:?}", config.server.cors_allowed_origins);
    }
    tracing::info!("Storage: {} (key: {})", config.storage.db_path, config.storage.key);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 网关地址覆盖变量（最高优先级）
//! - 环境变量
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）

pub mod endpoints;
mod loader;
mod types;

pub use loader::{
    load_config, load_config_from_path, print_config, ConfigError, GatewayOverrides,
    GATEWAY_URL_ENV, PUBLIC_GATEWAY_URL_ENV,
};
pub use types::{AppConfig, ExecutionContext, GatewayConfig, LogConfig, ServerConfig, StorageConfig};

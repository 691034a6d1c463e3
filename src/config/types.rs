//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 上游网关配置
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// 客户端状态存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// 允许跨域的来源，空表示允许所有来源
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024 // 10 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 调用方所处的执行上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// 服务端（容器网络内部）
    Server,
    /// 浏览器端（经端口转发访问本机）
    Browser,
}

/// 上游网关配置
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// 服务端使用的网关地址（容器网络别名）
    #[serde(default = "default_gateway_url")]
    pub url: String,

    /// 浏览器端使用的网关地址（本机回环）
    #[serde(default = "default_gateway_public_url")]
    pub public_url: String,

    /// 请求超时时间（秒），不设置表示不超时
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_gateway_url() -> String {
    "http://discoveryserver:8080".to_string()
}

fn default_gateway_public_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: default_gateway_url(),
            public_url: default_gateway_public_url(),
            timeout_secs: None,
        }
    }
}

impl GatewayConfig {
    /// 按执行上下文选择网关地址
    pub fn base_url(&self, context: ExecutionContext) -> &str {
        match context {
            ExecutionContext::Server => &self.url,
            ExecutionContext::Browser => &self.public_url,
        }
    }
}

/// 客户端状态存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Sled 数据库路径
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// 持久化条目的 key
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_db_path() -> String {
    "data/client-state.sled".to_string()
}

fn default_storage_key() -> String {
    "app-storage".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            key: default_storage_key(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

//! Gateway Port - 上游 API 网关抽象
//!
//! 代理层和客户端动作都通过这个端口发出唯一一次上游调用，具体实现在
//! infrastructure/adapters 层

use async_trait::async_trait;
use http::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// 网关错误（只有传输层失败；非 2xx 状态码不是错误）
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Cannot connect to gateway: {0}")]
    Unreachable(String),

    #[error("Gateway request timeout")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 上游请求
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    /// 相对路径，例如 `/api/soccer/players`
    pub path: String,
    /// JSON 请求体，None 表示不带请求体
    pub body: Option<Value>,
}

impl GatewayRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// 上游响应（原始状态码、Content-Type 和响应体字节）
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl GatewayResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// 按 JSON 解析响应体
    pub fn json(&self) -> Result<Value, GatewayError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| GatewayError::InvalidResponse(format!("Body is not JSON: {}", e)))
    }

    /// 响应体文本（非 UTF-8 字节按 lossy 处理）
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Gateway Port
#[async_trait]
pub trait GatewayPort: Send + Sync {
    /// 发送一次请求，不重试
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, GatewayError>;

    /// 网关基础 URL（用于日志和健康检查）
    fn base_url(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json_rejects_text() {
        let response = GatewayResponse {
            status: StatusCode::OK,
            content_type: Some("text/plain".to_string()),
            body: b"not json".to_vec(),
        };
        assert!(matches!(
            response.json(),
            Err(GatewayError::InvalidResponse(_))
        ));
        assert_eq!(response.text(), "not json");
    }
}

//! HTTP Gateway Client - 调用上游 API 网关
//!
//! 实现 GatewayPort trait，每次调用只发一次请求：
//! - 请求头固定 `Content-Type: application/json`
//! - 不重试；超时默认关闭（由底层传输决定）
//! - 非 2xx 不视为错误，原样返回给调用方

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{GatewayError, GatewayPort, GatewayRequest, GatewayResponse};

/// HTTP 网关客户端配置
#[derive(Debug, Clone)]
pub struct HttpGatewayClientConfig {
    /// 网关基础 URL
    pub base_url: String,
    /// 请求超时时间（秒），None 表示不设超时
    pub timeout_secs: Option<u64>,
}

impl Default for HttpGatewayClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: None,
        }
    }
}

impl HttpGatewayClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// HTTP 网关客户端
pub struct HttpGatewayClient {
    client: Client,
    config: HttpGatewayClientConfig,
}

impl HttpGatewayClient {
    pub fn new(config: HttpGatewayClientConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl GatewayPort for HttpGatewayClient {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        let url = self.url(&request.path);

        tracing::debug!(
            method = %request.method,
            url = %url,
            has_body = request.body.is_some(),
            "Sending gateway request"
        );

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| GatewayError::InvalidResponse(format!("Failed to encode body: {}", e)))?;
            builder = builder.body(bytes);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else if e.is_connect() {
                GatewayError::Unreachable(e.to_string())
            } else {
                GatewayError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("Failed to read body: {}", e)))?
            .to_vec();

        tracing::debug!(
            method = %request.method,
            url = %url,
            status = status.as_u16(),
            body_size = body.len(),
            "Gateway responded"
        );

        Ok(GatewayResponse {
            status,
            content_type,
            body,
        })
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

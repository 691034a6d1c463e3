//! API Client - 基于 GatewayPort 的类型化调用
//!
//! 失败消息提取顺序：JSON `message` → 原始文本 → `API 요청 실패: {status} {reason}`

use std::sync::Arc;

use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::ports::{GatewayError, GatewayPort, GatewayRequest, GatewayResponse};

#[derive(Debug, Error)]
pub enum ApiClientError {
    /// 上游返回非 2xx
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

#[derive(Clone)]
pub struct ApiClient {
    gateway: Arc<dyn GatewayPort>,
}

impl ApiClient {
    pub fn new(gateway: Arc<dyn GatewayPort>) -> Self {
        Self { gateway }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiClientError> {
        self.request(Method::POST, path, body).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiClientError> {
        self.request(Method::PUT, path, body).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiClientError> {
        self.request(Method::DELETE, path, body).await
    }

    /// 发送请求并按 JSON 解码成功响应
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiClientError> {
        let response = self.send(method, path, body).await?;
        serde_json::from_slice(&response.body).map_err(|e| ApiClientError::Decode(e.to_string()))
    }

    /// 发送请求，成功时返回原始响应（不要求 JSON）
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<GatewayResponse, ApiClientError> {
        let mut request = GatewayRequest::new(method, path);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self.gateway.send(request).await?;
        if !response.is_success() {
            return Err(ApiClientError::Status {
                status: response.status,
                message: failure_message(&response),
            });
        }
        Ok(response)
    }
}

fn failure_message(response: &GatewayResponse) -> String {
    let fallback = format!(
        "API 요청 실패: {} {}",
        response.status.as_u16(),
        response.status.canonical_reason().unwrap_or_default()
    );

    let text = response.text();
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => json
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or(fallback),
        Err(_) if text.is_empty() => fallback,
        Err(_) => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> GatewayResponse {
        GatewayResponse {
            status: StatusCode::from_u16(status).unwrap(),
            content_type: None,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_failure_message_prefers_json_message() {
        let r = response(404, r#"{"message":"선수를 찾을 수 없습니다."}"#);
        assert_eq!(failure_message(&r), "선수를 찾을 수 없습니다.");
    }

    #[test]
    fn test_failure_message_uses_raw_text() {
        let r = response(502, "Bad Gateway from upstream");
        assert_eq!(failure_message(&r), "Bad Gateway from upstream");
    }

    #[test]
    fn test_failure_message_fallback() {
        assert_eq!(
            failure_message(&response(500, "")),
            "API 요청 실패: 500 Internal Server Error"
        );
        assert_eq!(
            failure_message(&response(400, r#"{"error":"x"}"#)),
            "API 요청 실패: 400 Bad Request"
        );
    }
}

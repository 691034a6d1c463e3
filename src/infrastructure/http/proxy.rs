//! Proxy Primitive - `forward(method, route) -> MethodRouter`
//!
//! 每个资源路径只需声明上游路径、动词和回退消息：
//! - 成功：原样转发上游状态码和响应体
//! - 上游非 2xx：`{message, status}`，message 取上游 `message`，否则用 failure 文案
//! - 不可达 / 响应不是 JSON / 客户端请求体不是 JSON：500 + `{message}`（error 文案）
//!
//! 搜索接口使用 `ResponseMode::Passthrough`，允许上游返回纯文本。

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{on, MethodFilter, MethodRouter},
};
use http::Method;
use serde_json::Value;

use super::error::ProxyError;
use super::state::AppState;
use crate::application::ports::{GatewayPort, GatewayRequest, GatewayResponse};

/// 代理支持的 HTTP 动词
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl ProxyMethod {
    pub fn as_method(&self) -> Method {
        match self {
            ProxyMethod::Get => Method::GET,
            ProxyMethod::Post => Method::POST,
            ProxyMethod::Put => Method::PUT,
            ProxyMethod::Delete => Method::DELETE,
        }
    }

    fn filter(&self) -> MethodFilter {
        match self {
            ProxyMethod::Get => MethodFilter::GET,
            ProxyMethod::Post => MethodFilter::POST,
            ProxyMethod::Put => MethodFilter::PUT,
            ProxyMethod::Delete => MethodFilter::DELETE,
        }
    }

    /// GET 不读取请求体，其余动词要求 JSON 请求体
    pub fn has_body(&self) -> bool {
        !matches!(self, ProxyMethod::Get)
    }
}

/// 上游响应的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// 上游必须返回 JSON
    Json,
    /// 允许纯文本，原样透传（仅搜索接口）
    Passthrough,
}

/// 回退文案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackMessages {
    /// 上游非 2xx 且没有给出 message 时使用
    pub failure: String,
    /// 传输/解析失败时使用
    pub error: String,
}

impl FallbackMessages {
    pub fn new(failure: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            failure: failure.into(),
            error: error.into(),
        }
    }

    /// 按 "{对象} {动作}" 生成文案，例如 `스케줄 조회에 실패했습니다.`
    pub fn for_action(subject: &str, action: &str) -> Self {
        Self {
            failure: format!("{} {}에 실패했습니다.", subject, action),
            error: format!("{} {} 중 오류가 발생했습니다.", subject, action),
        }
    }
}

/// 一条代理路由
#[derive(Debug, Clone)]
pub struct ProxyRoute {
    pub upstream_path: &'static str,
    pub mode: ResponseMode,
    pub messages: FallbackMessages,
}

impl ProxyRoute {
    pub fn json(upstream_path: &'static str, messages: FallbackMessages) -> Self {
        Self {
            upstream_path,
            mode: ResponseMode::Json,
            messages,
        }
    }

    pub fn passthrough(upstream_path: &'static str, messages: FallbackMessages) -> Self {
        Self {
            upstream_path,
            mode: ResponseMode::Passthrough,
            messages,
        }
    }
}

/// 构造一个转发到固定上游路径的 handler
pub fn forward(method: ProxyMethod, route: ProxyRoute) -> MethodRouter<Arc<AppState>> {
    let route = Arc::new(route);
    let handler = move |State(state): State<Arc<AppState>>, body: Bytes| {
        let route = route.clone();
        async move { proxy_request(state.gateway.as_ref(), method, &route, body).await }
    };
    on(method.filter(), handler)
}

/// 执行一次代理调用
pub async fn proxy_request(
    gateway: &dyn GatewayPort,
    method: ProxyMethod,
    route: &ProxyRoute,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let result = relay(gateway, method, route, body).await;

    // 传输失败已在 relay 中记录
    if let Err(ProxyError::Upstream { status, message }) = &result {
        tracing::warn!(
            route = route.upstream_path,
            method = %method.as_method(),
            status = status.as_u16(),
            message = %message,
            "Upstream returned error"
        );
    }

    result
}

async fn relay(
    gateway: &dyn GatewayPort,
    method: ProxyMethod,
    route: &ProxyRoute,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let transport_error = |cause: String| {
        tracing::error!(
            route = route.upstream_path,
            method = %method.as_method(),
            error = %cause,
            "Proxy request failed"
        );
        ProxyError::Transport {
            message: route.messages.error.clone(),
        }
    };

    let mut request = GatewayRequest::new(method.as_method(), route.upstream_path);
    if method.has_body() {
        let payload: Value = serde_json::from_slice(&body)
            .map_err(|e| transport_error(format!("Invalid request body: {}", e)))?;
        request = request.with_body(payload);
    }

    let response = gateway
        .send(request)
        .await
        .map_err(|e| transport_error(e.to_string()))?;

    match route.mode {
        ResponseMode::Json => {
            let data = response
                .json()
                .map_err(|e| transport_error(e.to_string()))?;
            // 失败响应体为 null 时无法读取 message
            if !response.is_success() && data.is_null() {
                return Err(transport_error(format!(
                    "Upstream returned {} with a null body",
                    response.status
                )));
            }
            json_response(response, &data, &route.messages)
        }
        ResponseMode::Passthrough => passthrough_response(response, &route.messages),
    }
}

fn json_response(
    response: GatewayResponse,
    data: &Value,
    messages: &FallbackMessages,
) -> Result<Response, ProxyError> {
    if !response.is_success() {
        let message = match data.get("message") {
            Some(Value::String(m)) if !m.is_empty() => m.clone(),
            Some(Value::String(_)) | Some(Value::Null) | None => messages.failure.clone(),
            Some(other) => other.to_string(),
        };
        return Err(ProxyError::Upstream {
            status: response.status,
            message,
        });
    }

    Ok(raw_response(
        response.status,
        HeaderValue::from_static("application/json"),
        response.body,
    ))
}

fn passthrough_response(
    response: GatewayResponse,
    messages: &FallbackMessages,
) -> Result<Response, ProxyError> {
    let text = response.text();
    let data: Option<Value> = serde_json::from_str(&text).ok();

    if !response.is_success() {
        let message = match &data {
            Some(Value::Object(map)) => match map.get("message") {
                Some(Value::String(m)) => m.clone(),
                Some(Value::Null) | None => messages.failure.clone(),
                Some(other) => other.to_string(),
            },
            Some(Value::String(s)) => s.clone(),
            Some(_) => messages.failure.clone(),
            None => text,
        };
        return Err(ProxyError::Upstream {
            status: response.status,
            message,
        });
    }

    match data {
        // 纯文本（或 JSON 字符串字面量）按上游 Content-Type 透传
        None | Some(Value::String(_)) => {
            let body = match data {
                Some(Value::String(s)) => s,
                _ => text,
            };
            let content_type = response
                .content_type
                .as_deref()
                .and_then(|ct| HeaderValue::from_str(ct).ok())
                .unwrap_or_else(|| HeaderValue::from_static("text/plain"));
            Ok(raw_response(response.status, content_type, body.into_bytes()))
        }
        Some(_) => Ok(raw_response(
            response.status,
            HeaderValue::from_static("application/json"),
            response.body,
        )),
    }
}

fn raw_response(status: StatusCode, content_type: HeaderValue, body: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::GatewayError;
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use serde_json::json;
    use std::sync::Mutex;

    struct StubGateway {
        reply: Result<(u16, Option<&'static str>, &'static str), ()>,
        seen: Mutex<Vec<GatewayRequest>>,
    }

    impl StubGateway {
        fn new(status: u16, content_type: Option<&'static str>, body: &'static str) -> Self {
            Self {
                reply: Ok((status, content_type, body)),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn down() -> Self {
            Self {
                reply: Err(()),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GatewayPort for StubGateway {
        async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, GatewayError> {
            self.seen.lock().unwrap().push(request);
            let (status, content_type, body) = self
                .reply
                .map_err(|_| GatewayError::Unreachable("connection refused".to_string()))?;
            Ok(GatewayResponse {
                status: StatusCode::from_u16(status).unwrap(),
                content_type: content_type.map(str::to_string),
                body: body.as_bytes().to_vec(),
            })
        }

        fn base_url(&self) -> &str {
            "http://stub"
        }
    }

    fn schedules() -> ProxyRoute {
        ProxyRoute::json(
            "/api/soccer/schedules",
            FallbackMessages::for_action("스케줄", "조회"),
        )
    }

    fn search() -> ProxyRoute {
        ProxyRoute::passthrough(
            "/api/search",
            FallbackMessages::new("검색 요청이 실패했습니다.", "백엔드 검색 서비스와 통신하지 못했습니다."),
        )
    }

    async fn run(
        gateway: &StubGateway,
        method: ProxyMethod,
        route: ProxyRoute,
        body: &'static str,
    ) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = proxy_request(gateway, method, &route, Bytes::from_static(body.as_bytes()))
            .await
            .into_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, bytes.to_vec())
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_fallback_messages() {
        let m = FallbackMessages::for_action("스케줄", "일괄 저장");
        assert_eq!(m.failure, "스케줄 일괄 저장에 실패했습니다.");
        assert_eq!(m.error, "스케줄 일괄 저장 중 오류가 발생했습니다.");
    }

    #[tokio::test]
    async fn test_success_relays_status_and_body() {
        let gateway = StubGateway::new(201, Some("application/json"), r#"{"savedCount": 3}"#);
        let (status, content_type, body) =
            run(&gateway, ProxyMethod::Post, schedules(), r#"{"items":[1,2,3]}"#).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, br#"{"savedCount": 3}"#.to_vec());

        let seen = gateway.seen.lock().unwrap();
        assert_eq!(seen[0].method, Method::POST);
        assert_eq!(seen[0].body, Some(json!({"items": [1, 2, 3]})));
    }

    #[tokio::test]
    async fn test_get_ignores_body() {
        let gateway = StubGateway::new(200, None, "[]");
        let (status, _, _) = run(&gateway, ProxyMethod::Get, schedules(), "not json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(gateway.seen.lock().unwrap()[0].body, None);
    }

    #[tokio::test]
    async fn test_upstream_error_uses_upstream_message() {
        let gateway = StubGateway::new(404, None, r#"{"message":"일정 없음"}"#);
        let (status, _, body) = run(&gateway, ProxyMethod::Get, schedules(), "").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_body(&body), json!({"message": "일정 없음", "status": 404}));
    }

    #[tokio::test]
    async fn test_upstream_error_without_message_uses_fallback() {
        let gateway = StubGateway::new(503, None, r#"{"message":""}"#);
        let (status, _, body) = run(&gateway, ProxyMethod::Get, schedules(), "").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            json_body(&body),
            json!({"message": "스케줄 조회에 실패했습니다.", "status": 503})
        );
    }

    #[tokio::test]
    async fn test_upstream_error_with_null_body_is_500() {
        let gateway = StubGateway::new(404, Some("application/json"), "null");
        let (status, _, body) = run(&gateway, ProxyMethod::Get, schedules(), "").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(&body),
            json!({"message": "스케줄 조회 중 오류가 발생했습니다."})
        );
    }

    #[tokio::test]
    async fn test_upstream_error_non_string_message_is_relayed() {
        let gateway = StubGateway::new(409, None, r#"{"message":123}"#);
        let (status, _, body) = run(&gateway, ProxyMethod::Get, schedules(), "").await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json_body(&body), json!({"message": "123", "status": 409}));
    }

    #[tokio::test]
    async fn test_non_json_upstream_is_500() {
        let gateway = StubGateway::new(200, Some("text/html"), "<html></html>");
        let (status, _, body) = run(&gateway, ProxyMethod::Get, schedules(), "").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(&body),
            json!({"message": "스케줄 조회 중 오류가 발생했습니다."})
        );
    }

    #[tokio::test]
    async fn test_invalid_client_body_is_500_without_upstream_call() {
        let gateway = StubGateway::new(200, None, "{}");
        let (status, _, _) = run(&gateway, ProxyMethod::Put, schedules(), "{oops").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(gateway.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_is_500() {
        let gateway = StubGateway::down();
        let (status, _, body) = run(&gateway, ProxyMethod::Delete, schedules(), "{}").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(&body),
            json!({"message": "스케줄 조회 중 오류가 발생했습니다."})
        );
    }

    #[tokio::test]
    async fn test_search_plain_text_passthrough() {
        let gateway = StubGateway::new(200, Some("text/plain; charset=utf-8"), "검색 완료");
        let (status, content_type, body) =
            run(&gateway, ProxyMethod::Post, search(), r#"{"keyword":"son"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert_eq!(String::from_utf8(body).unwrap(), "검색 완료");
    }

    #[tokio::test]
    async fn test_search_plain_text_default_content_type() {
        let gateway = StubGateway::new(200, None, "ok");
        let (_, content_type, _) =
            run(&gateway, ProxyMethod::Post, search(), r#"{"keyword":"son"}"#).await;
        assert_eq!(content_type.as_deref(), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_search_json_relayed_as_json() {
        let gateway = StubGateway::new(200, Some("application/json"), r#"{"message":"1건","data":[]}"#);
        let (status, content_type, body) =
            run(&gateway, ProxyMethod::Post, search(), r#"{"keyword":"son"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(json_body(&body), json!({"message": "1건", "data": []}));
    }

    #[tokio::test]
    async fn test_search_error_messages() {
        let gateway = StubGateway::new(502, None, "upstream exploded");
        let (status, _, body) = run(&gateway, ProxyMethod::Post, search(), "{}").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            json_body(&body),
            json!({"message": "upstream exploded", "status": 502})
        );

        let gateway = StubGateway::new(400, None, r#"{"error":"bad"}"#);
        let (_, _, body) = run(&gateway, ProxyMethod::Post, search(), "{}").await;
        assert_eq!(
            json_body(&body),
            json!({"message": "검색 요청이 실패했습니다.", "status": 400})
        );
    }

    #[tokio::test]
    async fn test_search_unreachable() {
        let gateway = StubGateway::down();
        let (status, _, body) = run(&gateway, ProxyMethod::Post, search(), "{}").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(&body),
            json!({"message": "백엔드 검색 서비스와 통신하지 못했습니다."})
        );
    }
}

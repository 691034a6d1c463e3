//! HTTP Error Handling
//!
//! 代理错误统一转换为 `{message, status}` 信封

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorEnvelope;

/// 代理错误
#[derive(Debug)]
pub enum ProxyError {
    /// 上游返回非 2xx，保留上游状态码
    Upstream { status: StatusCode, message: String },
    /// 上游不可达、响应无法解析或客户端请求体无效，统一返回 500
    Transport { message: String },
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = match self {
            ProxyError::Upstream { status, message } => {
                ErrorEnvelope::upstream(message, status.as_u16())
            }
            ProxyError::Transport { message } => ErrorEnvelope::transport(message),
        };

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let upstream = ProxyError::Upstream {
            status: StatusCode::NOT_FOUND,
            message: "없음".to_string(),
        };
        assert_eq!(upstream.into_response().status(), StatusCode::NOT_FOUND);

        let transport = ProxyError::Transport {
            message: "오류".to_string(),
        };
        assert_eq!(
            transport.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

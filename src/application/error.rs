//! 应用层错误定义
//!
//! Display 文本直接作为提示消息展示给最终用户

use thiserror::Error;

use super::api_client::ApiClientError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入校验失败（未发出请求）
    #[error("{0}")]
    ValidationError(String),

    /// 上游请求失败
    #[error("요청 중 오류가 발생했습니다.\n{0}")]
    RequestFailed(String),

    /// 响应结构不符合预期
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApplicationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

impl From<ApiClientError> for ApplicationError {
    fn from(e: ApiClientError) -> Self {
        match e {
            ApiClientError::Decode(msg) => Self::InvalidResponse(msg),
            other => Self::RequestFailed(other.to_string()),
        }
    }
}

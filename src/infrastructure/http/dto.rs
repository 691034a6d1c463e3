//! Data Transfer Objects

use serde::{Deserialize, Serialize};

// ============================================================================
// 错误信封
// ============================================================================

/// 代理失败时返回的 JSON 信封 `{message, status}`
///
/// 上游不可达时没有原始状态码，`status` 省略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorEnvelope {
    /// 上游返回了非 2xx
    pub fn upstream(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    /// 传输/解析失败
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }
}

//! Client Actions - 一次 UI 动作 = 一次上游调用 + 写入状态
//!
//! 列表加载流程：setLoading(true) → 请求 → setXxx / setError → setLoading(false)

use std::sync::Arc;

use http::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::api_client::ApiClient;
use super::error::ApplicationError;
use super::store::AppStore;
use crate::config::endpoints;

/// 搜索词为空时的提示
pub const EMPTY_KEYWORD_MESSAGE: &str = "검색어를 입력해주세요.";
/// 搜索成功但上游没有返回 message 时的提示
pub const SEARCH_SENT_MESSAGE: &str = "검색 요청이 전송되었습니다.";
/// 搜索默认领域
pub const DEFAULT_SEARCH_DOMAIN: &str = "default";

pub struct ClientActions {
    api: ApiClient,
    store: Arc<AppStore>,
}

impl ClientActions {
    pub fn new(api: ApiClient, store: Arc<AppStore>) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &Arc<AppStore> {
        &self.store
    }

    pub async fn load_players(&self) -> Result<(), ApplicationError> {
        self.load_list(endpoints::PLAYERS, AppStore::set_players).await
    }

    pub async fn load_schedules(&self) -> Result<(), ApplicationError> {
        self.load_list(endpoints::SCHEDULES, AppStore::set_schedules)
            .await
    }

    pub async fn load_teams(&self) -> Result<(), ApplicationError> {
        self.load_list(endpoints::TEAM, AppStore::set_teams).await
    }

    pub async fn load_stadiums(&self) -> Result<(), ApplicationError> {
        self.load_list(endpoints::STADIUMS, AppStore::set_stadiums)
            .await
    }

    async fn load_list<T: DeserializeOwned>(
        &self,
        path: &str,
        write: fn(&AppStore, Vec<T>),
    ) -> Result<(), ApplicationError> {
        self.store.set_loading(true);
        self.store.set_error(None);

        let result = match self.api.get::<Value>(path).await {
            Ok(value) => extract_list::<T>(value),
            Err(e) => Err(e.into()),
        };

        let outcome = match result {
            Ok(items) => {
                tracing::debug!(path = %path, count = items.len(), "List loaded");
                write(&self.store, items);
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to load list");
                self.store.set_error(Some(error_detail(&e)));
                Err(e)
            }
        };

        self.store.set_loading(false);
        outcome
    }

    /// 用当前搜索框内容发起搜索，返回要展示给用户的消息
    pub async fn search(&self) -> Result<String, ApplicationError> {
        let keyword = self.store.select(|s| s.ui.search_input.trim().to_string());
        if keyword.is_empty() {
            return Err(ApplicationError::validation(EMPTY_KEYWORD_MESSAGE));
        }

        let body = json!({
            "domain": DEFAULT_SEARCH_DOMAIN,
            "keyword": keyword,
        });

        let response = self
            .api
            .send(Method::POST, endpoints::SEARCH, Some(body))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Search request failed");
                ApplicationError::from(e)
            })?;

        // 响应可能是纯文本，此时没有 message
        let message = response
            .json()
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));

        tracing::info!(keyword = %keyword, "Search request sent");
        Ok(message.unwrap_or_else(|| SEARCH_SENT_MESSAGE.to_string()))
    }
}

/// 接受裸数组或 `{ "data": [...] }` 两种列表格式
fn extract_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApplicationError> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Array(_)) => data,
            Some(Value::Null) => return Ok(Vec::new()),
            _ => {
                return Err(ApplicationError::invalid_response(
                    "expected a list or an object with a data list",
                ))
            }
        },
        _ => return Err(ApplicationError::invalid_response("expected a list")),
    };

    serde_json::from_value(list).map_err(|e| ApplicationError::invalid_response(e.to_string()))
}

/// 写入 store 的错误文本（不带用户提示前缀）
fn error_detail(error: &ApplicationError) -> String {
    match error {
        ApplicationError::RequestFailed(msg)
        | ApplicationError::ValidationError(msg)
        | ApplicationError::InvalidResponse(msg) => msg.clone(),
    }
}

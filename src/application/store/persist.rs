//! 持久化边界
//!
//! 只有认证身份、搜索框内容和当前标签页会写入持久化存储。
//! 存储格式：`{"state": {...}, "version": 0}`

use serde::{Deserialize, Serialize};

use super::ClientState;
use crate::application::ports::StorageError;
use crate::domain::User;

/// 持久化格式版本，版本不一致的条目会被丢弃
pub const PERSIST_VERSION: u32 = 0;

/// 持久化子集
///
/// 缺失字段在 merge 时保留默认值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_authenticated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_tab: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

/// 从完整状态投影出需要持久化的字段
pub fn partialize(state: &ClientState) -> PersistedState {
    PersistedState {
        user: state.user.user.clone(),
        is_authenticated: Some(state.user.is_authenticated),
        search_input: Some(state.ui.search_input.clone()),
        selected_tab: Some(state.ui.selected_tab.clone()),
    }
}

/// 把持久化子集合并回默认状态（启动时使用）
pub fn merge(persisted: PersistedState, mut state: ClientState) -> ClientState {
    state.user.user = persisted.user;
    if let Some(is_authenticated) = persisted.is_authenticated {
        state.user.is_authenticated = is_authenticated;
    }
    if let Some(search_input) = persisted.search_input {
        state.ui.search_input = search_input;
    }
    if let Some(selected_tab) = persisted.selected_tab {
        state.ui.selected_tab = selected_tab;
    }
    state
}

pub fn encode(state: &PersistedState) -> Result<String, StorageError> {
    let entry = StoredEntry {
        state: state.clone(),
        version: PERSIST_VERSION,
    };
    serde_json::to_string(&entry).map_err(|e| StorageError::SerializationError(e.to_string()))
}

pub fn decode(raw: &str) -> Result<PersistedState, StorageError> {
    let entry: StoredEntry =
        serde_json::from_str(raw).map_err(|e| StorageError::SerializationError(e.to_string()))?;
    if entry.version != PERSIST_VERSION {
        return Err(StorageError::SerializationError(format!(
            "Unsupported persisted state version: {}",
            entry.version
        )));
    }
    Ok(entry.state)
}

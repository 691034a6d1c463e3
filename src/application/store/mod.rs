//! Client State Store
//!
//! 单一客户端状态容器，由三个互相独立的 slice 组成：
//! - user: 认证身份
//! - soccer: 实体列表、loading/error
//! - ui: 搜索框、标签页、侧边栏
//!
//! 容器显式构造并以 `Arc<AppStore>` 传给使用方，不存在全局单例。

mod app_store;
mod persist;
mod soccer_slice;
mod ui_slice;
mod user_slice;

use serde::Serialize;

pub use app_store::{AppStore, StateTransition, DEFAULT_STORAGE_KEY};
pub use persist::{decode, encode, merge, partialize, PersistedState, PERSIST_VERSION};
pub use soccer_slice::SoccerSlice;
pub use ui_slice::{UiSlice, DEFAULT_TAB};
pub use user_slice::UserSlice;

/// 完整客户端状态
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientState {
    pub user: UserSlice,
    pub soccer: SoccerSlice,
    pub ui: UiSlice,
}

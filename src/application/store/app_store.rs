//! AppStore - 状态容器实现

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

use super::persist::{decode, encode, merge, partialize};
use super::ClientState;
use crate::application::ports::StateStoragePort;
use crate::domain::{Player, Schedule, Stadium, Team, User};

/// 持久化条目的默认 key
pub const DEFAULT_STORAGE_KEY: &str = "app-storage";

/// 状态变更事件（供调试/观察使用）
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// 触发变更的动作名，例如 `setPlayers`
    pub action: &'static str,
    /// 变更后的完整状态
    pub state: ClientState,
    pub at: DateTime<Utc>,
}

/// 客户端状态容器
///
/// 每个 setter 在写锁内完成：修改 → 持久化 → 广播，
/// 因此存储和观察者看到的顺序与调用顺序一致。
pub struct AppStore {
    state: RwLock<ClientState>,
    storage: Arc<dyn StateStoragePort>,
    storage_key: String,
    transitions: broadcast::Sender<StateTransition>,
}

impl AppStore {
    /// 创建容器并从持久化存储恢复
    pub fn new(storage: Arc<dyn StateStoragePort>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let state = Self::rehydrate(storage.as_ref(), &storage_key);
        let (transitions, _) = broadcast::channel(100);

        Self {
            state: RwLock::new(state),
            storage,
            storage_key,
            transitions,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn rehydrate(storage: &dyn StateStoragePort, key: &str) -> ClientState {
        let raw = match storage.load(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ClientState::default(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to load persisted state");
                return ClientState::default();
            }
        };

        match decode(&raw) {
            Ok(persisted) => {
                tracing::debug!(key = %key, "Client state rehydrated");
                merge(persisted, ClientState::default())
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding persisted state");
                ClientState::default()
            }
        }
    }

    /// 订阅状态变更
    pub fn subscribe(&self) -> broadcast::Receiver<StateTransition> {
        self.transitions.subscribe()
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> ClientState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 读取部分状态
    pub fn select<R>(&self, selector: impl FnOnce(&ClientState) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        selector(&state)
    }

    fn apply(&self, action: &'static str, mutate: impl FnOnce(&mut ClientState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        mutate(&mut state);
        self.persist(&state);

        tracing::debug!(action = action, "State transition");

        // 没有订阅者时 send 会失败，忽略即可
        let _ = self.transitions.send(StateTransition {
            action,
            state: state.clone(),
            at: Utc::now(),
        });
    }

    fn persist(&self, state: &ClientState) {
        let result =
            encode(&partialize(state)).and_then(|raw| self.storage.save(&self.storage_key, &raw));
        if let Err(e) = result {
            tracing::warn!(key = %self.storage_key, error = %e, "Failed to persist client state");
        }
    }

    // ========== User ==========

    pub fn set_user(&self, user: Option<User>) {
        self.apply("setUser", |s| s.user.set_user(user));
    }

    pub fn logout(&self) {
        self.apply("logout", |s| s.user.logout());
    }

    // ========== Soccer ==========

    pub fn set_players(&self, players: Vec<Player>) {
        self.apply("setPlayers", |s| s.soccer.set_players(players));
    }

    pub fn set_schedules(&self, schedules: Vec<Schedule>) {
        self.apply("setSchedules", |s| s.soccer.set_schedules(schedules));
    }

    pub fn set_teams(&self, teams: Vec<Team>) {
        self.apply("setTeams", |s| s.soccer.set_teams(teams));
    }

    pub fn set_stadiums(&self, stadiums: Vec<Stadium>) {
        self.apply("setStadiums", |s| s.soccer.set_stadiums(stadiums));
    }

    pub fn set_loading(&self, loading: bool) {
        self.apply("setLoading", |s| s.soccer.set_loading(loading));
    }

    pub fn set_error(&self, error: Option<String>) {
        self.apply("setError", |s| s.soccer.set_error(error));
    }

    // ========== UI ==========

    pub fn set_search_input(&self, input: impl Into<String>) {
        let input = input.into();
        self.apply("setSearchInput", |s| s.ui.set_search_input(input));
    }

    pub fn set_selected_tab(&self, tab: impl Into<String>) {
        let tab = tab.into();
        self.apply("setSelectedTab", |s| s.ui.set_selected_tab(tab));
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.apply("setSidebarOpen", |s| s.ui.set_sidebar_open(open));
    }

    pub fn toggle_sidebar(&self) {
        self.apply("toggleSidebar", |s| s.ui.toggle_sidebar());
    }

    /// 所有字段恢复初始值（一次变更）
    pub fn reset(&self) {
        self.apply("resetStore", |s| *s = ClientState::default());
    }
}

//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（GatewayPort、StateStoragePort）
//! - store: 客户端状态容器及其 slice
//! - api_client: 基于网关端口的类型化调用
//! - actions: UI 动作（一次上游调用 + 写入状态）
//! - error: 应用层错误定义

pub mod actions;
pub mod api_client;
pub mod error;
pub mod ports;
pub mod store;

// Re-exports
pub use actions::ClientActions;
pub use api_client::{ApiClient, ApiClientError};
pub use error::ApplicationError;

pub use ports::{
    // Gateway
    GatewayError,
    GatewayPort,
    GatewayRequest,
    GatewayResponse,
    // State storage
    StateStoragePort,
    StorageError,
};

pub use store::{AppStore, ClientState, StateTransition};

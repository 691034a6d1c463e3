//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod gateway;
mod state_storage;

pub use gateway::{GatewayError, GatewayPort, GatewayRequest, GatewayResponse};
pub use state_storage::{StateStoragePort, StorageError};

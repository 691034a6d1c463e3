//! Application State

use std::sync::Arc;

use crate::application::GatewayPort;

/// 应用状态
///
/// 代理处理器之间只共享网关客户端（无可变状态）
pub struct AppState {
    pub gateway: Arc<dyn GatewayPort>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn GatewayPort>) -> Self {
        Self { gateway }
    }
}

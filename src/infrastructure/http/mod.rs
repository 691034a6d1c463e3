//! HTTP Layer - 网关代理
//!
//! 每个端点把一次客户端请求转发到一个固定的上游路径

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod proxy;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ProxyError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;

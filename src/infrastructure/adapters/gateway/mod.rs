//! Gateway Adapter - 上游 API 网关 HTTP 客户端实现

mod http_gateway_client;

pub use http_gateway_client::*;

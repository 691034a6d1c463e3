//! HTTP Handlers
//!
//! 资源代理由 `proxy::forward` 生成，这里只放非代理端点

mod ping;

pub use ping::*;

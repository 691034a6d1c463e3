//! Soccer Portal - 足球门户前端后端（BFF）
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User, Player, Schedule, Team, Stadium 被动记录
//!
//! 应用层 (application/):
//! - Ports: GatewayPort, StateStoragePort
//! - Store: 客户端状态容器（user / soccer / ui 三个 slice）
//! - Actions: 一次 UI 动作 = 一次上游调用 + 写入状态
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 网关代理端点
//! - Adapters: reqwest 网关客户端
//! - Persistence / Memory: 客户端状态存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

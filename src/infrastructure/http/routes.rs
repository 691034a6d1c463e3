//! HTTP Routes
//!
//! 代理路径与上游路径一致:
//! - /api/soccer/schedules           GET POST PUT DELETE
//! - /api/soccer/schedules/findById  POST  按 ID 查询赛程
//! - /api/soccer/schedules/saveAll   POST  批量保存赛程（上游一次调用）
//! - /api/soccer/players             GET POST PUT DELETE
//! - /api/soccer/team                GET POST PUT DELETE
//! - /api/soccer/stadiums            GET POST PUT DELETE
//! - /api/search                     POST  允许纯文本响应
//! - /api/ping                       GET   健康检查

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::proxy::{forward, FallbackMessages, ProxyMethod, ProxyRoute};
use super::state::AppState;
use crate::config::endpoints;

pub const SEARCH_FAILURE_MESSAGE: &str = "검색 요청이 실패했습니다.";
pub const SEARCH_ERROR_MESSAGE: &str = "백엔드 검색 서비스와 통신하지 못했습니다.";

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ping", get(handlers::ping))
        .route(endpoints::SCHEDULES, crud(endpoints::SCHEDULES, "스케줄"))
        .route(
            endpoints::SCHEDULES_FIND_BY_ID,
            single(ProxyMethod::Post, endpoints::SCHEDULES_FIND_BY_ID, "스케줄", "조회"),
        )
        .route(
            endpoints::SCHEDULES_SAVE_ALL,
            single(ProxyMethod::Post, endpoints::SCHEDULES_SAVE_ALL, "스케줄", "일괄 저장"),
        )
        .route(endpoints::PLAYERS, crud(endpoints::PLAYERS, "선수"))
        .route(endpoints::TEAM, crud(endpoints::TEAM, "팀"))
        .route(endpoints::STADIUMS, crud(endpoints::STADIUMS, "경기장"))
        .route(endpoints::SEARCH, search())
}

/// 标准资源：查询 / 保存 / 修改 / 删除
fn crud(path: &'static str, subject: &str) -> MethodRouter<Arc<AppState>> {
    single(ProxyMethod::Get, path, subject, "조회")
        .merge(single(ProxyMethod::Post, path, subject, "저장"))
        .merge(single(ProxyMethod::Put, path, subject, "수정"))
        .merge(single(ProxyMethod::Delete, path, subject, "삭제"))
}

fn single(
    method: ProxyMethod,
    path: &'static str,
    subject: &str,
    action: &str,
) -> MethodRouter<Arc<AppState>> {
    forward(
        method,
        ProxyRoute::json(path, FallbackMessages::for_action(subject, action)),
    )
}

fn search() -> MethodRouter<Arc<AppState>> {
    forward(
        ProxyMethod::Post,
        ProxyRoute::passthrough(
            endpoints::SEARCH,
            FallbackMessages::new(SEARCH_FAILURE_MESSAGE, SEARCH_ERROR_MESSAGE),
        ),
    )
}

//! 上游网关路径
//!
//! 代理对外暴露的路径与上游路径一致

pub const SCHEDULES: &str = "/api/soccer/schedules";
pub const SCHEDULES_FIND_BY_ID: &str = "/api/soccer/schedules/findById";
pub const SCHEDULES_SAVE_ALL: &str = "/api/soccer/schedules/saveAll";
pub const PLAYERS: &str = "/api/soccer/players";
pub const TEAM: &str = "/api/soccer/team";
pub const STADIUMS: &str = "/api/soccer/stadiums";
pub const SEARCH: &str = "/api/search";

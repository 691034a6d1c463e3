//! Soccer Slice - 实体列表与加载状态

use serde::Serialize;

use crate::domain::{Player, Schedule, Stadium, Team};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SoccerSlice {
    pub players: Vec<Player>,
    pub schedules: Vec<Schedule>,
    pub teams: Vec<Team>,
    pub stadiums: Vec<Stadium>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SoccerSlice {
    pub fn set_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    pub fn set_schedules(&mut self, schedules: Vec<Schedule>) {
        self.schedules = schedules;
    }

    pub fn set_teams(&mut self, teams: Vec<Team>) {
        self.teams = teams;
    }

    pub fn set_stadiums(&mut self, stadiums: Vec<Stadium>) {
        self.stadiums = stadiums;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

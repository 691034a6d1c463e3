//! Soccer Context - 球员 / 赛程 / 球队 / 球场
//!
//! 上游字段为 camelCase；赛程里的球队引用只是字符串，不做关联校验。
//!
//! 除 `id` 外的描述字段都可以缺失：上游服务各自命名（如 `player_name`），
//! 不认识的字段落入 `extra` 原样保留。

use serde::{Deserialize, Serialize};

use super::{id_format, Extra};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(with = "id_format")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// 赛程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(with = "id_format")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub home_team: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub away_team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stadium: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(with = "id_format")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stadium {
    #[serde(with = "id_format")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schedule_camel_case() {
        let schedule: Schedule = serde_json::from_value(json!({
            "id": "s-1",
            "date": "2024-03-01",
            "homeTeam": "K01",
            "awayTeam": "K02",
            "round": 3
        }))
        .unwrap();

        assert_eq!(schedule.home_team, "K01");
        assert_eq!(schedule.away_team, "K02");
        assert_eq!(schedule.stadium, None);
        assert_eq!(schedule.extra.get("round"), Some(&json!(3)));
    }

    #[test]
    fn test_missing_id_rejected() {
        let result = serde_json::from_value::<Stadium>(json!({"name": "문수"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_service_field_names_kept_in_extra() {
        let player: Player = serde_json::from_value(json!({
            "id": 1,
            "player_uk": "2000001",
            "player_name": "Son",
            "position": "FW"
        }))
        .unwrap();

        assert_eq!(player.id, "1");
        assert_eq!(player.name, "");
        assert_eq!(player.position.as_deref(), Some("FW"));
        assert_eq!(player.extra.get("player_name"), Some(&json!("Son")));

        let back = serde_json::to_value(&player).unwrap();
        assert_eq!(
            back,
            json!({"id": "1", "player_uk": "2000001", "player_name": "Son", "position": "FW"})
        );

        let stadium: Stadium =
            serde_json::from_value(json!({"id": "D01", "stadium_name": "문수"})).unwrap();
        assert_eq!(stadium.extra.get("stadium_name"), Some(&json!("문수")));

        let schedule: Schedule =
            serde_json::from_value(json!({"id": 5, "sche_date": "20120317"})).unwrap();
        assert_eq!(schedule.home_team, "");
        assert_eq!(schedule.extra.get("sche_date"), Some(&json!("20120317")));
    }
}

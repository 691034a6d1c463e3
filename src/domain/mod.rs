//! Domain Layer - 领域层
//!
//! 只有被动记录，没有不变量：
//! - User: 登录身份
//! - Soccer: 球员、赛程、球队、球场
//!
//! 所有实体都带开放扩展字段（`extra`），上游返回的未知字段原样保留。

mod soccer;
mod user;

pub use soccer::{Player, Schedule, Stadium, Team};
pub use user::User;

/// 扩展字段容器
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// 标识符反序列化：上游可能返回字符串或数字
pub(crate) mod id_format {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
            RawId::Uint(n) => n.to_string(),
        })
    }
}

//! User - 登录用户

use serde::{Deserialize, Serialize};

use super::{id_format, Extra};

/// 已认证用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(with = "id_format")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            extra: Extra::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_fields_preserved() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "name": "kim",
            "role": "admin"
        }))
        .unwrap();

        assert_eq!(user.id, "7");
        assert_eq!(user.email, None);
        assert_eq!(user.extra.get("role"), Some(&json!("admin")));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back, json!({"id": "7", "name": "kim", "role": "admin"}));
    }
}

//! User Slice - 认证身份

use serde::Serialize;

use crate::domain::User;

/// 用户认证状态
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSlice {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl UserSlice {
    /// 设置当前用户，认证标记随用户是否存在一起写入
    pub fn set_user(&mut self, user: Option<User>) {
        self.is_authenticated = user.is_some();
        self.user = user;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.is_authenticated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_user_and_logout() {
        let mut slice = UserSlice::default();
        slice.set_user(Some(User::new("u1", "park")));
        assert!(slice.is_authenticated);
        assert_eq!(slice.user.as_ref().map(|u| u.name.as_str()), Some("park"));

        slice.logout();
        assert_eq!(slice, UserSlice::default());
    }
}

use serde::{Deserialize, Serialize};

use super::UserId;

/// 認証済みユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
}

/// セッションコンテキスト
///
/// アプリ全体で共有される認証状態。予約フォームからは読み取りのみ。
/// グローバル参照ではなく、フォーム生成時に明示的に渡す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    user: Option<User>,
}

impl UserSession {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

use crate::domain::{RoomState, User, UserId, UserSession};
use thiserror::Error;

/// 予約APIの既定のベースURL
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// 設定読み込みのエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// SESSION_USER_IDがUUIDとして解釈できない
    #[error("SESSION_USER_ID is not a valid UUID")]
    InvalidUserId(#[source] uuid::Error),

    /// ROOM_STATEがナビゲーション状態のJSONとして解釈できない
    #[error("ROOM_STATE is not valid navigation state JSON")]
    InvalidRoomState(#[source] serde_json::Error),
}

/// 起動時に環境変数から読み込む設定
///
/// - `RESERVATION_API_URL`: 予約APIのベースURL（省略時は`DEFAULT_API_URL`）
/// - `SESSION_USER_ID`: ログイン中のユーザーID（省略時は未ログイン）
/// - `ROOM_STATE`: 部屋選択画面から渡される`{ "room": ... }`（省略時は部屋なし）
///
/// ユーザーや部屋の欠落はここではエラーにせず、フォーム生成時に検出する。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session: UserSession,
    pub room_state: RoomState,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = lookup("RESERVATION_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());

        let session = match lookup("SESSION_USER_ID") {
            Some(raw) => {
                let id = raw
                    .trim()
                    .parse::<UserId>()
                    .map_err(ConfigError::InvalidUserId)?;
                UserSession::signed_in(User { id })
            }
            None => UserSession::anonymous(),
        };

        let room_state = match lookup("ROOM_STATE") {
            Some(raw) => serde_json::from_str(&raw).map_err(ConfigError::InvalidRoomState)?,
            None => RoomState::default(),
        };

        Ok(Self {
            api_base_url,
            session,
            room_state,
        })
    }
}

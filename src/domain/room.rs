use serde::{Deserialize, Serialize};

/// 部屋タイプ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub name: String,
}

/// 部屋 - 部屋選択画面から渡される読み取り専用の値
///
/// 予約フォームが参照するのは部屋タイプ名のみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "type")]
    pub room_type: RoomType,
}

impl Room {
    pub fn new(room_type_name: impl Into<String>) -> Self {
        Self {
            room_type: RoomType {
                name: room_type_name.into(),
            },
        }
    }

    pub fn room_type_name(&self) -> &str {
        &self.room_type.name
    }
}

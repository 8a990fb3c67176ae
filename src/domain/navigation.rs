use serde::{Deserialize, Serialize};

use super::{Reservation, Room};

/// 予約フォームから遷移しうる画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// 部屋一覧
    Rooms,
    /// 予約一覧
    Reservations,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Rooms => "/rooms",
            Route::Reservations => "/reservations",
        }
    }
}

/// 予約フォームへの遷移時に渡される状態 `{ room }`
///
/// `room`は必須だが、欠落はフォーム生成時に検出するため`Option`で受ける。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    #[serde(default)]
    pub room: Option<Room>,
}

impl RoomState {
    pub fn with_room(room: Room) -> Self {
        Self { room: Some(room) }
    }
}

/// 予約一覧への遷移時に渡す状態 `{ reservation }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationState {
    pub reservation: Reservation,
}

/// 画面遷移の要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// キャンセルして部屋一覧へ戻る
    ToRooms,
    /// 予約完了後に予約一覧へ進む
    ToReservations(ReservationState),
}

impl Navigation {
    pub fn route(&self) -> Route {
        match self {
            Navigation::ToRooms => Route::Rooms,
            Navigation::ToReservations(_) => Route::Reservations,
        }
    }

    pub fn reservation(&self) -> Option<&Reservation> {
        match self {
            Navigation::ToRooms => None,
            Navigation::ToReservations(state) => Some(&state.reservation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Rooms.path(), "/rooms");
        assert_eq!(Route::Reservations.path(), "/reservations");
    }

    #[test]
    fn test_room_state_deserializes_room() {
        let state: RoomState =
            serde_json::from_value(json!({ "room": { "type": { "name": "Twin" } } })).unwrap();
        assert_eq!(state, RoomState::with_room(Room::new("Twin")));
    }

    #[test]
    fn test_room_state_without_room() {
        let state: RoomState = serde_json::from_value(json!({})).unwrap();
        assert!(state.room.is_none());
    }

    #[test]
    fn test_cancel_navigation_has_no_state() {
        let navigation = Navigation::ToRooms;
        assert_eq!(navigation.route(), Route::Rooms);
        assert!(navigation.reservation().is_none());
    }
}

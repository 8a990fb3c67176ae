use serde::{Deserialize, Serialize};

use super::{FormData, ReservationId, Room, User, UserId};

/// 1泊あたりの料金
///
/// 部屋・日程・入力内容に関係なく固定。料金算出サービスが存在しないため定数のまま扱う。
pub const RESERVATION_RATE: u32 = 100;

/// 予約者情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUser {
    pub email: String,
    pub id: UserId,
    pub mobile_number: String,
    pub name: String,
}

/// 予約作成リクエスト
///
/// 送信のたびに、その時点のフォーム内容・部屋・ユーザーから組み立て直す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub checkin_date: String,
    pub checkout_date: String,
    pub rate: u32,
    pub room_type: String,
    pub user: ReservationUser,
}

/// 予約APIが作成した予約
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub checkin_date: String,
    pub checkout_date: String,
    pub rate: u32,
    pub room_type: String,
    pub user: ReservationUser,
}

impl Reservation {
    /// リクエストの内容をそのまま持つ予約を作る
    pub fn from_request(id: ReservationId, request: ReservationRequest) -> Self {
        Self {
            id,
            checkin_date: request.checkin_date,
            checkout_date: request.checkout_date,
            rate: request.rate,
            room_type: request.room_type,
            user: request.user,
        }
    }
}

/// 純粋関数：予約作成リクエストを組み立てる
///
/// 料金は常に`RESERVATION_RATE`。
/// 日付は未入力なら空文字、解釈できなければ`"Invalid Date"`のまま送る。
pub fn build_reservation_request(form: &FormData, room: &Room, user: &User) -> ReservationRequest {
    ReservationRequest {
        checkin_date: form.checkin_date.to_string(),
        checkout_date: form.checkout_date.to_string(),
        rate: RESERVATION_RATE,
        room_type: room.room_type_name().to_string(),
        user: ReservationUser {
            email: form.email_address.clone(),
            id: user.id,
            mobile_number: form.mobile_number.clone(),
            name: form.full_name(),
        },
    }
}

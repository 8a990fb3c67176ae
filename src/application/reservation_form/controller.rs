use crate::domain::{
    self, DateField, FormData, Navigation, Reservation, ReservationState, Room, RoomState,
    TextField, User, UserSession,
};
use crate::ports::*;
use crate::sync::lock;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use super::errors::{ReservationFormError, Result};
use super::view::{self, FormView};

/// 予約完了時のトースト文言
pub const RESERVATION_PLACED_MESSAGE: &str = "Reservation placed!";

/// フォームの依存関係
///
/// 外部との境界はすべてここに集め、生成時に明示的に渡す。
#[derive(Clone)]
pub struct FormDependencies {
    pub reservation_service: Arc<dyn ReservationService>,
    pub notification_service: Arc<dyn NotificationService>,
    pub navigator: Arc<dyn Navigator>,
}

/// 予約フォーム
///
/// 状態遷移：
/// - idle → submitting（予約ボタン押下）
/// - submitting → 画面遷移（成功）
/// - submitting → idle（失敗、入力内容は保持）
///
/// すべての操作は`&self`で呼べる。送信中でもキャンセルや入力は受け付ける。
pub struct ReservationForm {
    deps: FormDependencies,
    room: Room,
    user: User,
    form_data: Mutex<FormData>,
    last_error: Mutex<Option<String>>,
    loading: watch::Sender<bool>,
}

impl ReservationForm {
    /// フォームを生成する
    ///
    /// # エラー
    /// - MissingRoom: 遷移時の状態に部屋がない
    /// - MissingUser: セッションにユーザーがいない
    pub fn new(deps: FormDependencies, session: &UserSession, state: RoomState) -> Result<Self> {
        let room = state.room.ok_or(ReservationFormError::MissingRoom)?;
        let user = session
            .current_user()
            .cloned()
            .ok_or(ReservationFormError::MissingUser)?;
        let (loading, _) = watch::channel(false);

        Ok(Self {
            deps,
            room,
            user,
            form_data: Mutex::new(FormData::default()),
            last_error: Mutex::new(None),
            loading,
        })
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// 現在の入力内容
    pub fn form_data(&self) -> FormData {
        lock(&self.form_data).clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// 送信中フラグの変化を購読する
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn last_error(&self) -> Option<String> {
        lock(&self.last_error).clone()
    }

    pub fn view(&self) -> FormView {
        view::render(&self.form_data(), self.is_loading(), self.last_error())
    }

    /// テキスト項目の入力ハンドラを返す
    pub fn handle_text_change(&self, field: TextField) -> impl Fn(&str) + '_ {
        move |value: &str| self.update(|form| domain::update_text(form, field, value))
    }

    /// 日付項目の入力ハンドラを返す
    ///
    /// 解釈できない入力は不正な日付として保持し、エラーにはしない。
    pub fn handle_date_change(&self, field: DateField) -> impl Fn(&str) + '_ {
        move |value: &str| self.update(|form| domain::update_date(form, field, value))
    }

    /// 部屋一覧へ戻る
    pub fn handle_cancel(&self) {
        self.deps.navigator.navigate(Navigation::ToRooms);
    }

    /// 予約を送信する
    ///
    /// 1. 送信中なら`SubmissionInProgress`を返す
    /// 2. 料金固定のリクエストを組み立てて予約サービスを呼ぶ
    /// 3. 失敗時はトーストも画面遷移もせず、エラーを記録して返す
    /// 4. 成功時はトーストを1回表示し、予約一覧へ遷移する
    ///
    /// 送信中フラグは完了時（Futureが破棄された場合も含む）に1回だけ解除される。
    pub async fn handle_reserve(&self) -> Result<Reservation> {
        let _guard = SubmitGuard::acquire(&self.loading)
            .ok_or(ReservationFormError::SubmissionInProgress)?;
        *lock(&self.last_error) = None;

        let form_data = self.form_data();
        tracing::debug!(?form_data, "Submitting reservation form");

        let request = domain::build_reservation_request(&form_data, &self.room, &self.user);

        let reservation = match self.deps.reservation_service.reserve_room(request).await {
            Ok(reservation) => reservation,
            Err(e) => {
                tracing::warn!("Reservation failed: {}", e);
                *lock(&self.last_error) = Some(e.to_string());
                return Err(ReservationFormError::ReservationServiceError(e));
            }
        };

        tracing::info!(
            reservation_id = %reservation.id.value(),
            room_type = %reservation.room_type,
            "Reservation placed"
        );

        // トーストの失敗で遷移は止めない
        if let Err(e) = self
            .deps
            .notification_service
            .success(RESERVATION_PLACED_MESSAGE)
            .await
        {
            tracing::error!("Notification service error: {}", e);
        }

        self.deps
            .navigator
            .navigate(Navigation::ToReservations(ReservationState {
                reservation: reservation.clone(),
            }));

        Ok(reservation)
    }

    fn update(&self, apply: impl FnOnce(FormData) -> FormData) {
        let mut form = lock(&self.form_data);
        let current = std::mem::take(&mut *form);
        *form = apply(current);
    }
}

/// 送信中フラグを保持するガード
///
/// 取得時にフラグを立て、破棄時に下ろす。
struct SubmitGuard<'a> {
    loading: &'a watch::Sender<bool>,
}

impl<'a> SubmitGuard<'a> {
    fn acquire(loading: &'a watch::Sender<bool>) -> Option<Self> {
        let acquired = loading.send_if_modified(|loading| {
            if *loading {
                return false;
            }
            *loading = true;
            true
        });
        acquired.then_some(Self { loading })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.loading.send_replace(false);
    }
}

#![allow(dead_code)]

use axum::{Json, Router, http::StatusCode, routing::post};
use reservation_form_ddd::adapters::mock::{Navigator, NotificationService, ReservationService};
use reservation_form_ddd::application::reservation_form::{FormDependencies, ReservationForm};
use reservation_form_ddd::domain::*;
use std::sync::{Arc, Mutex};

/// テスト用のフォームとモック一式
pub struct Harness {
    pub form: ReservationForm,
    pub user: User,
    pub reservation_service: Arc<ReservationService>,
    pub notification_service: Arc<NotificationService>,
    pub navigator: Arc<Navigator>,
}

pub fn dependencies(
    reservation_service: &Arc<ReservationService>,
    notification_service: &Arc<NotificationService>,
    navigator: &Arc<Navigator>,
) -> FormDependencies {
    FormDependencies {
        reservation_service: reservation_service.clone(),
        notification_service: notification_service.clone(),
        navigator: navigator.clone(),
    }
}

/// 指定したモックで"Deluxe"の部屋の予約フォームを開く
pub fn open_form_with(
    reservation_service: ReservationService,
    notification_service: NotificationService,
) -> Harness {
    let reservation_service = Arc::new(reservation_service);
    let notification_service = Arc::new(notification_service);
    let navigator = Arc::new(Navigator::new());
    let user = User { id: UserId::new() };

    let form = ReservationForm::new(
        dependencies(&reservation_service, &notification_service, &navigator),
        &UserSession::signed_in(user.clone()),
        RoomState::with_room(Room::new("Deluxe")),
    )
    .expect("form should open with room and user");

    Harness {
        form,
        user,
        reservation_service,
        notification_service,
        navigator,
    }
}

pub fn open_form() -> Harness {
    open_form_with(ReservationService::new(), NotificationService::new())
}

/// すべての項目を入力する
pub fn fill_in(form: &ReservationForm) {
    form.handle_text_change(TextField::FirstName)("Ada");
    form.handle_text_change(TextField::LastName)("Lovelace");
    form.handle_text_change(TextField::MobileNumber)("555-0100");
    form.handle_text_change(TextField::EmailAddress)("ada@example.com");
    form.handle_date_change(DateField::CheckinDate)("2024-01-10");
    form.handle_date_change(DateField::CheckoutDate)("2024-01-12");
}

/// 予約APIのスタブサーバーを起動し、ベースURLと受信したリクエストを返す
///
/// `status`が成功以外の場合は、その状態コードでリクエストを拒否する。
pub async fn spawn_reservation_api(
    status: StatusCode,
) -> (String, Arc<Mutex<Vec<serde_json::Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let recorded = received.clone();

    let app = Router::new().route(
        "/reservations",
        post(move |Json(body): Json<serde_json::Value>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(body.clone());
                if !status.is_success() {
                    return (status, Json(serde_json::json!({ "error": "room unavailable" })));
                }
                let request: ReservationRequest =
                    serde_json::from_value(body).expect("stub received a malformed request");
                let reservation = Reservation::from_request(ReservationId::new(), request);
                (
                    StatusCode::CREATED,
                    Json(serde_json::to_value(reservation).unwrap()),
                )
            }
        }),
    );

    (spawn_api(app).await, received)
}

/// 任意のルーターでスタブサーバーを起動し、ベースURLを返す
pub async fn spawn_api(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub API");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

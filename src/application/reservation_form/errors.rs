use thiserror::Error;

/// 予約フォームのエラー
#[derive(Debug, Error)]
pub enum ReservationFormError {
    /// 遷移時の状態に部屋が含まれていない
    #[error("Navigation state does not contain a room")]
    MissingRoom,

    /// セッションに認証済みユーザーがいない
    #[error("No authenticated user in session")]
    MissingUser,

    /// 送信中に再度送信された
    #[error("A reservation is already being submitted")]
    SubmissionInProgress,

    /// ReservationServiceのエラー
    #[error("Reservation service error")]
    ReservationServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 予約フォームの Result型
pub type Result<T> = std::result::Result<T, ReservationFormError>;

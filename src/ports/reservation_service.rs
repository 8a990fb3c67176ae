use crate::domain::{Reservation, ReservationRequest};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Reservation Service port for the external reservation API.
///
/// Retry and consistency behavior belong to the implementation,
/// the form only awaits a single call per submit.
#[async_trait]
pub trait ReservationService: Send + Sync {
    /// Create a reservation.
    ///
    /// Returns the reservation created by the API, or an error when the
    /// API could not be reached or rejected the request.
    async fn reserve_room(&self, request: ReservationRequest) -> Result<Reservation>;
}

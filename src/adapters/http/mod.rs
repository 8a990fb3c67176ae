pub mod reservation_service;

#[allow(unused_imports)]
pub use reservation_service::{HttpReservationError, ReservationService, UNREADABLE_BODY};

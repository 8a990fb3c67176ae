pub mod navigator;
pub mod notification_service;
pub mod reservation_service;

pub use navigator::*;
pub use notification_service::NotificationService;
pub use reservation_service::ReservationService;

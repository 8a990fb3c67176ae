pub mod navigator;
pub mod notification_service;
pub mod reservation_service;

#[allow(unused_imports)]
pub use navigator::Navigator;
#[allow(unused_imports)]
pub use notification_service::NotificationService;
#[allow(unused_imports)]
pub use reservation_service::ReservationService;

pub mod front_end;
pub mod navigator;
pub mod notification_service;

#[allow(unused_imports)]
pub use front_end::FrontEnd;
#[allow(unused_imports)]
pub use navigator::Navigator;
#[allow(unused_imports)]
pub use notification_service::NotificationService;

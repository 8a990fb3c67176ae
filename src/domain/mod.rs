pub mod form;
pub mod navigation;
pub mod reservation;
pub mod room;
pub mod session;
pub mod value_objects;

pub use form::*;
pub use navigation::*;
pub use reservation::*;
pub use room::*;
pub use session::*;
pub use value_objects::*;

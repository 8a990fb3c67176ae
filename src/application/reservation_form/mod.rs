mod controller;
mod errors;
mod view;

#[allow(unused_imports)]
pub use controller::{FormDependencies, RESERVATION_PLACED_MESSAGE, ReservationForm};
#[allow(unused_imports)]
pub use errors::{ReservationFormError, Result};
#[allow(unused_imports)]
pub use view::{DESCRIPTION, FieldKind, FieldView, FormView, ReserveButton, TITLE, render};

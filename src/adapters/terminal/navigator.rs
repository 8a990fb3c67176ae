use crate::domain::{Navigation, Route};
use crate::ports::navigator::Navigator as NavigatorTrait;
use crate::sync::lock;
use std::sync::Mutex;

/// Terminal implementation of Navigator
///
/// There is only one page, so navigating means leaving the form.
/// The destination is kept for the front end to report on exit.
pub struct Navigator {
    destination: Mutex<Option<Navigation>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            destination: Mutex::new(None),
        }
    }

    pub fn destination(&self) -> Option<Navigation> {
        lock(&self.destination).clone()
    }

    pub fn has_left(&self) -> bool {
        self.destination().is_some()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigatorTrait for Navigator {
    fn navigate(&self, navigation: Navigation) {
        let route: Route = navigation.route();
        tracing::info!(path = route.path(), "Navigating away from reservation form");
        *lock(&self.destination) = Some(navigation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Reservation, ReservationId, ReservationRequest, ReservationState, ReservationUser, UserId,
    };

    #[test]
    fn test_new_navigator_has_not_left() {
        let navigator = Navigator::new();

        assert!(!navigator.has_left());
        assert_eq!(navigator.destination(), None);
    }

    #[test]
    fn test_navigate_keeps_last_destination() {
        let navigator = Navigator::new();
        let reservation = Reservation::from_request(
            ReservationId::new(),
            ReservationRequest {
                checkin_date: "2024-01-10T00:00:00.000Z".to_string(),
                checkout_date: "2024-01-12T00:00:00.000Z".to_string(),
                rate: 100,
                room_type: "Deluxe".to_string(),
                user: ReservationUser {
                    email: "ada@example.com".to_string(),
                    id: UserId::new(),
                    mobile_number: "555-0100".to_string(),
                    name: "Ada Lovelace".to_string(),
                },
            },
        );

        navigator.navigate(Navigation::ToRooms);
        navigator.navigate(Navigation::ToReservations(ReservationState {
            reservation: reservation.clone(),
        }));

        assert!(navigator.has_left());
        assert_eq!(
            navigator.destination().and_then(|n| n.reservation().cloned()),
            Some(reservation)
        );
    }
}

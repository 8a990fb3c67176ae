use crate::domain::{Reservation, ReservationId, ReservationRequest};
use crate::ports::reservation_service::{ReservationService as ReservationServiceTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::Notify;

/// Mock implementation of ReservationService
///
/// Records every request and echoes it back as a new reservation.
/// Can be switched to failing, and can hold responses until released
/// to observe the form while a submission is in flight.
#[allow(dead_code)]
pub struct ReservationService {
    requests: Mutex<Vec<ReservationRequest>>,
    failure: Mutex<Option<String>>,
    held: bool,
    gate: Notify,
}

#[allow(dead_code)]
impl ReservationService {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
            held: false,
            gate: Notify::new(),
        }
    }

    /// Responses wait for `release()` before resolving
    pub fn held() -> Self {
        Self {
            held: true,
            ..Self::new()
        }
    }

    /// Reject subsequent requests with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// Accept subsequent requests again
    pub fn succeed(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Let one held request resolve
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn requests(&self) -> Vec<ReservationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for ReservationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationServiceTrait for ReservationService {
    async fn reserve_room(&self, request: ReservationRequest) -> Result<Reservation> {
        self.requests.lock().unwrap().push(request.clone());

        if self.held {
            self.gate.notified().await;
        }

        let failure = self.failure.lock().unwrap().clone();
        match failure {
            Some(message) => Err(message.into()),
            None => Ok(Reservation::from_request(ReservationId::new(), request)),
        }
    }
}

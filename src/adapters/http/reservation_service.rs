use crate::domain::{Reservation, ReservationRequest};
use crate::ports::reservation_service::{ReservationService as ReservationServiceTrait, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, redirect::Policy};
use thiserror::Error;

/// Recorded as the body of a rejection whose body could not be read
pub const UNREADABLE_BODY: &str = "<unreadable body>";

/// Errors raised by the HTTP reservation client
#[derive(Debug, Error)]
pub enum HttpReservationError {
    /// Transport, TLS or body decoding failure
    #[error("Reservation API request failed")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Reservation API rejected the request ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// HTTP implementation of ReservationService
///
/// Sends `POST {base_url}/reservations` with the request as camelCase JSON
/// and decodes the created reservation from a 2xx response body.
pub struct ReservationService {
    client: Client,
    endpoint: String,
}

impl ReservationService {
    pub fn new(base_url: &str) -> std::result::Result<Self, HttpReservationError> {
        let client = Client::builder().redirect(Policy::none()).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/reservations", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReservationServiceTrait for ReservationService {
    async fn reserve_room(&self, request: ReservationRequest) -> Result<Reservation> {
        tracing::debug!(endpoint = %self.endpoint, "Sending reservation request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(HttpReservationError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(%status, "Failed to read rejected response body: {}", e);
                    UNREADABLE_BODY.to_string()
                }
            };
            return Err(HttpReservationError::Rejected { status, body }.into());
        }

        let reservation = response
            .json::<Reservation>()
            .await
            .map_err(HttpReservationError::from)?;

        Ok(reservation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let service = ReservationService::new("http://localhost:4000").unwrap();
        assert_eq!(service.endpoint(), "http://localhost:4000/reservations");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let service = ReservationService::new("http://localhost:4000/api/").unwrap();
        assert_eq!(service.endpoint(), "http://localhost:4000/api/reservations");
    }
}

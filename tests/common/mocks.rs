//! Mock configurations for test fixtures.
//!
//! Re-exports the mocks from `tempwatch::adapters::mock` and adds builders
//! for the responses the sensor gives.

pub use tempwatch::adapters::mock::{InMemoryStore, MockHttpClient, MockResponse};
pub use tempwatch::traits::{HttpError, Response};

use bytes::Bytes;
use std::time::Duration;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Every request answers `{"temp": value}`.
    pub fn with_temperature(self, value: f64) -> Self {
        self.client
            .set_default_response(MockResponse::temperature(value));
        self
    }

    /// Every request answers with `status` and a raw body.
    pub fn with_status(self, status: u16, body: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Success(Response::new(
                status,
                Bytes::from(body.to_string()),
            )));
        self
    }

    /// Every request fails at the transport level.
    #[allow(dead_code)]
    pub fn with_connection_error(self, message: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
                message.to_string(),
            )));
        self
    }

    /// Requests to exactly `url` answer `{"temp": value}`.
    #[allow(dead_code)]
    pub fn with_temperature_at(self, url: &str, value: f64) -> Self {
        self.client
            .set_response(url, MockResponse::temperature(value));
        self
    }

    /// Every response is delayed.
    #[allow(dead_code)]
    pub fn with_delay(self, delay: Duration) -> Self {
        self.client.set_delay(delay);
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! One round trip to the sensor's temperature endpoint.

use std::time::Duration;

use crate::error::FetchError;
use crate::models::{ConnectionConfig, Reading, TemperaturePayload};
use crate::traits::{Headers, HttpClient};

/// Default bound on a single fetch.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

/// Fetch the current temperature using `config`.
///
/// A 401 is always [`FetchError::InvalidToken`], whatever the body says.
/// Any other non-2xx status, a transport failure or the timeout elapsing
/// is [`FetchError::Unreachable`]. A 2xx whose body lacks a numeric `temp`
/// is [`FetchError::MalformedResponse`], as is a value that stops being
/// finite once rounded.
///
/// An address without a host fails as unreachable without sending anything.
pub async fn fetch_reading(
    client: &dyn HttpClient,
    config: &ConnectionConfig,
    timeout: Duration,
) -> Result<Reading, FetchError> {
    if !config.has_host() {
        return Err(FetchError::Unreachable(
            "no server address configured".to_string(),
        ));
    }

    let url = config.reading_url();
    tracing::debug!(address = %config.address, "Fetching temperature");

    let response = match tokio::time::timeout(timeout, client.get(&url, &json_headers())).await {
        Ok(result) => result?,
        Err(_) => {
            return Err(FetchError::Unreachable(format!(
                "no response within {:?}",
                timeout
            )))
        }
    };

    if response.is_unauthorized() {
        return Err(FetchError::InvalidToken);
    }

    if !response.is_success() {
        return Err(FetchError::Unreachable(format!("HTTP {}", response.status)));
    }

    let payload: TemperaturePayload = response.json()?;
    let reading = Reading::now(payload.temp);
    if !reading.value.is_finite() {
        return Err(FetchError::MalformedResponse(format!(
            "temperature out of range: {}",
            payload.temp
        )));
    }
    tracing::info!(value = reading.value, "Fetched temperature");
    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;

    fn config() -> ConnectionConfig {
        ConnectionConfig::new("192.168.1.5:8080", "abc")
    }

    #[tokio::test]
    async fn test_success_rounds_value() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::temperature(23.4567));

        let reading = fetch_reading(&client, &config(), DEFAULT_REQUEST_TIMEOUT)
            .await
            .unwrap();
        assert_eq!(reading.value, 23.46);
        assert_eq!(reading.display_value(), "23.46");
    }

    #[tokio::test]
    async fn test_missing_host_sends_nothing() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::temperature(21.0));

        for address in ["", "http://", ":8080"] {
            let config = ConnectionConfig::new(address, "abc");
            let result = fetch_reading(&client, &config, DEFAULT_REQUEST_TIMEOUT).await;
            assert_eq!(
                result,
                Err(FetchError::Unreachable(
                    "no server address configured".to_string()
                ))
            );
        }
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_value_overflowing_when_rounded_is_malformed() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::status(200, r#"{"temp": 1e308}"#));

        let result = fetch_reading(&client, &config(), DEFAULT_REQUEST_TIMEOUT).await;
        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_request_shape() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::temperature(21.0));

        fetch_reading(&client, &config(), DEFAULT_REQUEST_TIMEOUT)
            .await
            .unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "http://192.168.1.5:8080/temperature?token=abc"
        );
        assert_eq!(requests[0].headers["Accept"], "application/json");
        assert_eq!(requests[0].headers["Content-Type"], "application/json");
    }

    #[tokio::test]
    async fn test_unauthorized_ignores_body() {
        let client = MockHttpClient::new();
        for body in ["", "<html>nope</html>", r#"{"temp": 20.0}"#] {
            client.set_default_response(MockResponse::status(401, body));
            let result = fetch_reading(&client, &config(), DEFAULT_REQUEST_TIMEOUT).await;
            assert_eq!(result, Err(FetchError::InvalidToken));
        }
    }

    #[tokio::test]
    async fn test_server_error_is_unreachable() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::status(500, r#"{"temp": 20.0}"#));

        let result = fetch_reading(&client, &config(), DEFAULT_REQUEST_TIMEOUT).await;
        assert_eq!(result, Err(FetchError::Unreachable("HTTP 500".to_string())));
    }

    #[tokio::test]
    async fn test_transport_error_is_unreachable() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));

        let result = fetch_reading(&client, &config(), DEFAULT_REQUEST_TIMEOUT).await;
        assert!(matches!(result, Err(FetchError::Unreachable(_))));
    }

    #[tokio::test]
    async fn test_malformed_bodies() {
        let client = MockHttpClient::new();
        for body in ["", "not json", r#"{"humidity": 3}"#, r#"{"temp": "hot"}"#] {
            client.set_default_response(MockResponse::status(200, body));
            let result = fetch_reading(&client, &config(), DEFAULT_REQUEST_TIMEOUT).await;
            assert!(
                matches!(result, Err(FetchError::MalformedResponse(_))),
                "body {:?} gave {:?}",
                body,
                result
            );
        }
    }

    #[tokio::test]
    async fn test_timeout_is_unreachable() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::temperature(21.0));
        client.set_delay(Duration::from_secs(10));

        let result = fetch_reading(&client, &config(), Duration::from_millis(50)).await;
        assert!(matches!(result, Err(FetchError::Unreachable(msg)) if msg.contains("50ms")));
    }
}

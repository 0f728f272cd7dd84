use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

/// Body returned by the sensor's temperature endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TemperaturePayload {
    pub temp: f64,
}

/// The last successfully fetched temperature.
///
/// Replaced wholesale on every successful fetch and never partially updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius, rounded to two decimals
    pub value: f64,
    /// Wall-clock time the fetch completed
    pub observed_at: DateTime<Utc>,
}

impl Reading {
    /// Build a reading from a raw sensor value, rounding it to two decimals.
    pub fn new(raw_value: f64, observed_at: DateTime<Utc>) -> Self {
        Self {
            value: round_to_hundredths(raw_value),
            observed_at,
        }
    }

    /// Build a reading stamped with the current time.
    pub fn now(raw_value: f64) -> Self {
        Self::new(raw_value, Utc::now())
    }

    /// Value formatted with exactly two decimals, e.g. `21.00`.
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.value)
    }

    /// Local time of the observation, `HH:MM:SS`.
    pub fn observed_time(&self) -> String {
        self.observed_at
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

/// Round to two decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

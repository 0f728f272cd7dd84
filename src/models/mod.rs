mod connection;
mod reading;

pub use connection::{ConnectionConfig, TEMPERATURE_PATH};
pub use reading::{round_to_hundredths, Reading, TemperaturePayload};

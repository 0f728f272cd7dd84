use serde::{Deserialize, Serialize};

/// Scheme prepended to addresses that do not carry one.
const DEFAULT_SCHEME: &str = "http://";

/// Path of the temperature endpoint on the sensor host.
pub const TEMPERATURE_PATH: &str = "/temperature";

/// Endpoint address and auth token entered by the user.
///
/// Both fields start out empty. An empty config is valid but unusable:
/// fetching against it fails as unreachable rather than erroring early.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Host (and optional port) of the sensor, e.g. `192.168.1.5:8080`
    #[serde(rename = "serverAddress", default)]
    pub address: String,
    /// Token sent as the `token` query parameter
    #[serde(default)]
    pub token: String,
}

impl ConnectionConfig {
    /// Create a config from an address and token.
    pub fn new(address: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: token.into(),
        }
    }

    /// True when neither an address nor a token has been set.
    pub fn is_empty(&self) -> bool {
        self.address.is_empty() && self.token.is_empty()
    }

    /// Base URL of the sensor host.
    ///
    /// The address is used verbatim; `http://` is only added when the
    /// user did not type a scheme themselves.
    pub fn base_url(&self) -> String {
        let address = self.address.trim_end_matches('/');
        if address.starts_with("http://") || address.starts_with("https://") {
            address.to_string()
        } else {
            format!("{}{}", DEFAULT_SCHEME, address)
        }
    }

    /// True when the address names a host once any scheme is removed.
    ///
    /// `""`, `"http://"` and `":8080"` have no host; URL parsing would
    /// otherwise fold the path into the host position.
    pub fn has_host(&self) -> bool {
        let address = self.address.trim();
        let rest = address
            .strip_prefix("http://")
            .or_else(|| address.strip_prefix("https://"))
            .unwrap_or(address);
        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host = authority.rsplit('@').next().unwrap_or_default();
        !host.is_empty() && !host.starts_with(':')
    }

    /// Full URL of the temperature reading, token included.
    pub fn reading_url(&self) -> String {
        format!(
            "{}{}?token={}",
            self.base_url(),
            TEMPERATURE_PATH,
            urlencoding::encode(&self.token)
        )
    }

    /// Token with everything but the last two characters masked.
    pub fn masked_token(&self) -> String {
        let count = self.token.chars().count();
        if count <= 2 {
            return "\u{2022}".repeat(count);
        }
        let visible: String = self.token.chars().skip(count - 2).collect();
        format!("{}{}", "\u{2022}".repeat(count - 2), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let config = ConnectionConfig::default();
        assert_eq!(config.address, "");
        assert_eq!(config.token, "");
        assert!(config.is_empty());
    }

    #[test]
    fn test_reading_url_prepends_scheme() {
        let config = ConnectionConfig::new("192.168.1.5:8080", "abc");
        assert_eq!(
            config.reading_url(),
            "http://192.168.1.5:8080/temperature?token=abc"
        );
    }

    #[test]
    fn test_reading_url_keeps_explicit_scheme() {
        let config = ConnectionConfig::new("https://sensor.local/", "abc");
        assert_eq!(
            config.reading_url(),
            "https://sensor.local/temperature?token=abc"
        );
    }

    #[test]
    fn test_reading_url_encodes_token() {
        let config = ConnectionConfig::new("host:1", "a b&c");
        assert_eq!(config.reading_url(), "http://host:1/temperature?token=a%20b%26c");
    }

    #[test]
    fn test_reading_url_with_empty_address() {
        let config = ConnectionConfig::default();
        assert_eq!(config.reading_url(), "http:///temperature?token=");
    }

    #[test]
    fn test_has_host() {
        assert!(ConnectionConfig::new("192.168.1.5:8080", "").has_host());
        assert!(ConnectionConfig::new("https://sensor.local/", "").has_host());
        assert!(ConnectionConfig::new("  pi  ", "").has_host());

        for address in ["", "   ", "http://", "https:///x", ":8080", "/temperature"] {
            assert!(
                !ConnectionConfig::new(address, "t").has_host(),
                "{:?} should have no host",
                address
            );
        }
    }

    #[test]
    fn test_serializes_with_stored_field_names() {
        let config = ConnectionConfig::new("10.0.0.1", "t0k");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["serverAddress"], "10.0.0.1");
        assert_eq!(json["token"], "t0k");
    }

    #[test]
    fn test_deserializes_missing_fields_as_empty() {
        let config: ConnectionConfig = serde_json::from_str(r#"{"token":"x"}"#).unwrap();
        assert_eq!(config.address, "");
        assert_eq!(config.token, "x");
    }

    #[test]
    fn test_masked_token() {
        assert_eq!(ConnectionConfig::new("", "").masked_token(), "");
        assert_eq!(ConnectionConfig::new("", "ab").masked_token(), "\u{2022}\u{2022}");
        assert_eq!(
            ConnectionConfig::new("", "secret").masked_token(),
            "\u{2022}\u{2022}\u{2022}\u{2022}et"
        );
    }
}

use std::env;

/// Listening port used when `PORT` is unset or not a valid u16.
pub const DEFAULT_PORT: u16 = 3000;

/// # Server Configuration
///
/// Holds the runtime configuration for the HTTP listener. The only
/// tunable is the listening port, read from the environment.
///
/// ## Sources
/// - `PORT` environment variable (also honored from a `.env` file when
///   the binary loads one at startup)
/// - [`DEFAULT_PORT`] fallback when the variable is absent or does not
///   parse as a port number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(env::var("PORT").ok().as_deref()),
        }
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
    }

    #[test]
    fn test_port_parses_valid_value() {
        assert_eq!(parse_port(Some("8080")), 8080);
    }

    #[test]
    fn test_port_defaults_on_garbage() {
        assert_eq!(parse_port(Some("not-a-port")), DEFAULT_PORT);
    }

    #[test]
    fn test_port_defaults_on_out_of_range() {
        // u16::MAX is 65535; anything above it is not a valid port
        assert_eq!(parse_port(Some("99999")), DEFAULT_PORT);
    }

    #[test]
    fn test_default_config_shape() {
        let config = ServerConfig { port: DEFAULT_PORT };
        assert_eq!(config.port, 3000);
    }
}

use std::env;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, resolved once at startup.
///
/// | Variable         | Default   |
/// |------------------|-----------|
/// | `PORT`           | `3000`    |
/// | `OPENAI_API_KEY` | empty     |
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary variable source.
    ///
    /// A missing API key is not an error here; the forwarder reports it on
    /// first use.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(value = %value, "ignoring unparseable PORT, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let openai_api_key = lookup("OPENAI_API_KEY").unwrap_or_default();

        Self {
            port,
            openai_api_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn port_defaults_to_3000() {
        assert_eq!(config_from(&[]).port, 3000);
    }

    #[test]
    fn port_is_read_from_env() {
        assert_eq!(config_from(&[("PORT", "8080")]).port, 8080);
    }

    #[test]
    fn garbage_port_falls_back_to_default() {
        assert_eq!(config_from(&[("PORT", "eighty")]).port, 3000);
        assert_eq!(config_from(&[("PORT", "70000")]).port, 3000);
    }

    #[test]
    fn api_key_is_optional() {
        assert_eq!(config_from(&[]).openai_api_key, "");
        assert_eq!(
            config_from(&[("OPENAI_API_KEY", "sk-test")]).openai_api_key,
            "sk-test"
        );
    }
}

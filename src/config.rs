use std::env;

use url::Url;

pub const DEFAULT_APP_NAME: &str = "Velorin";
pub const DEFAULT_APP_LOGO_URL: &str = "https://avatars.githubusercontent.com/u/1885080?s=200&v=4";
pub const DEFAULT_RPC_URL: &str = "https://sepolia.base.org";
pub const DEFAULT_WALLET_URL: &str = "http://127.0.0.1:1248";

pub const DEFAULT_BYTECODE_TARGETS: [&str; 3] = [
    "0x0000000000000000000000000000000000000000",
    "0x1111111111111111111111111111111111111111",
    "0x2222222222222222222222222222222222222222",
];
pub const DEFAULT_SAMPLE_TOKEN: &str = "0x3333333333333333333333333333333333333333";
pub const DEFAULT_SAMPLE_TX: &str =
    "0x4444444444444444444444444444444444444444444444444444444444444444";

/// Inspector settings. Every field has a default; the value is validated
/// once when built and then passed around by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_logo_url: String,
    pub rpc_url: Url,
    pub wallet_url: Url,
    /// Kept as raw strings: malformed entries are reported, not rejected.
    pub bytecode_targets: Vec<String>,
    pub sample_token: Option<String>,
    pub sample_tx: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("VELORIN_APP_NAME must not be empty")]
    EmptyAppName,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_name = lookup("VELORIN_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        if app_name.trim().is_empty() {
            return Err(ConfigError::EmptyAppName);
        }
        let app_logo_url =
            lookup("VELORIN_APP_LOGO_URL").unwrap_or_else(|| DEFAULT_APP_LOGO_URL.to_string());

        let rpc_url = parse_url(
            "BASE_SEPOLIA_RPC_URL",
            lookup("BASE_SEPOLIA_RPC_URL").as_deref().unwrap_or(DEFAULT_RPC_URL),
        )?;
        let wallet_url = parse_url(
            "WALLET_RPC_URL",
            lookup("WALLET_RPC_URL").as_deref().unwrap_or(DEFAULT_WALLET_URL),
        )?;

        let bytecode_targets = lookup("BYTECODE_TARGETS")
            .map(|raw| parse_targets(&raw))
            .filter(|targets| !targets.is_empty())
            .unwrap_or_else(|| DEFAULT_BYTECODE_TARGETS.iter().map(|s| s.to_string()).collect());

        let sample_token = optional_setting(lookup("SAMPLE_TOKEN"), DEFAULT_SAMPLE_TOKEN);
        let sample_tx = optional_setting(lookup("SAMPLE_TX"), DEFAULT_SAMPLE_TX);

        Ok(Self {
            app_name,
            app_logo_url,
            rpc_url,
            wallet_url,
            bytecode_targets,
            sample_token,
            sample_tx,
        })
    }

    pub fn with_rpc_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.rpc_url = parse_url("--rpc-url", raw)?;
        Ok(self)
    }

    pub fn with_wallet_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.wallet_url = parse_url("--wallet-url", raw)?;
        Ok(self)
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { var, source })
}

fn parse_targets(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Unset falls back to the default; set-but-empty disables the setting.
fn optional_setting(value: Option<String>, default: &str) -> Option<String> {
    match value {
        None => Some(default.to_string()),
        Some(v) if v.trim().is_empty() => None,
        Some(v) => Some(v.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.app_name, "Velorin");
        assert_eq!(config.rpc_url.as_str(), "https://sepolia.base.org/");
        assert_eq!(config.bytecode_targets.len(), 3);
        assert_eq!(config.sample_token.as_deref(), Some(DEFAULT_SAMPLE_TOKEN));
        assert_eq!(config.sample_tx.as_deref(), Some(DEFAULT_SAMPLE_TX));
    }

    #[test]
    fn targets_are_split_and_trimmed() {
        let config = Config::from_lookup(lookup_from(&[(
            "BYTECODE_TARGETS",
            " 0xabc , ,0x1111111111111111111111111111111111111111",
        )]))
        .unwrap();
        assert_eq!(
            config.bytecode_targets,
            vec![
                "0xabc".to_string(),
                "0x1111111111111111111111111111111111111111".to_string()
            ]
        );
    }

    #[test]
    fn empty_samples_disable_links() {
        let config =
            Config::from_lookup(lookup_from(&[("SAMPLE_TOKEN", ""), ("SAMPLE_TX", "  ")])).unwrap();
        assert!(config.sample_token.is_none());
        assert!(config.sample_tx.is_none());
    }

    #[test]
    fn invalid_rpc_url_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("BASE_SEPOLIA_RPC_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl {
                var: "BASE_SEPOLIA_RPC_URL",
                ..
            }
        ));
    }

    #[test]
    fn blank_app_name_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("VELORIN_APP_NAME", " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAppName));
    }

    #[test]
    fn cli_override_replaces_wallet_url() {
        let config = Config::from_lookup(|_| None)
            .unwrap()
            .with_wallet_url("http://localhost:9999")
            .unwrap();
        assert_eq!(config.wallet_url.as_str(), "http://localhost:9999/");
    }
}

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{MuleShieldError, Result};

const DEFAULT_CONFIG_FILE: &str = "muleshield.toml";
const ENV_PREFIX: &str = "MULESHIELD";

/// Currency the checker page formats amounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }

    pub fn default_locale(&self) -> &'static str {
        match self {
            Currency::Inr => "en-IN",
            Currency::Usd => "en-US",
        }
    }
}

/// Deployment profile selecting the base preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    India,
    Us,
}

impl Profile {
    pub fn name(&self) -> &'static str {
        match self {
            Profile::India => "india",
            Profile::Us => "us",
        }
    }

    pub fn preset(&self) -> Config {
        match self {
            Profile::India => Config::india(),
            Profile::Us => Config::us(),
        }
    }
}

impl FromStr for Profile {
    type Err = MuleShieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "india" | "in" | "inr" => Ok(Profile::India),
            "us" | "usd" => Ok(Profile::Us),
            other => Err(MuleShieldError::config(format!(
                "Unknown profile '{}' (expected 'india' or 'us')",
                other
            ))),
        }
    }
}

/// MuleShield configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub submission: SubmissionConfig,
    pub display: DisplayConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Artificial latency before a submission is answered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    pub check_delay_ms: u64,
    pub contact_delay_ms: u64,
    pub registration_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency: Currency,
    pub locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub ttl_ms: u64,
    pub capacity: usize,
    pub sweep_interval_ms: u64,
    pub channel_capacity: usize,
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(MuleShieldError::config("Server host must not be empty"));
        }

        if self.server.port == 0 {
            return Err(MuleShieldError::config("Server port must be > 0"));
        }

        if self.display.locale.trim().is_empty() {
            return Err(MuleShieldError::config("Display locale must not be empty"));
        }

        if self.notifications.ttl_ms == 0 {
            return Err(MuleShieldError::config("Notification TTL must be > 0"));
        }

        if self.notifications.capacity == 0 {
            return Err(MuleShieldError::config(
                "Notification capacity must be > 0",
            ));
        }

        if self.notifications.sweep_interval_ms == 0 {
            return Err(MuleShieldError::config(
                "Notification sweep interval must be > 0",
            ));
        }

        if self.notifications.channel_capacity == 0 {
            return Err(MuleShieldError::config(
                "Notification channel capacity must be > 0",
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                MuleShieldError::config(format!(
                    "Invalid listen address {}:{} ({})",
                    self.server.host, self.server.port, e
                ))
            })
    }

    pub fn check_delay(&self) -> Duration {
        Duration::from_millis(self.submission.check_delay_ms)
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.submission.contact_delay_ms)
    }

    pub fn registration_delay(&self) -> Duration {
        Duration::from_millis(self.submission.registration_delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notifications.ttl_ms)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.notifications.sweep_interval_ms)
    }

    /// Drop every simulated delay (tests, local benchmarking)
    pub fn without_delays(mut self) -> Self {
        self.submission.check_delay_ms = 0;
        self.submission.contact_delay_ms = 0;
        self.submission.registration_delay_ms = 0;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::india()
    }
}

impl Config {
    /// Rupee-denominated site
    pub fn india() -> Self {
        Self::with_currency(Currency::Inr)
    }

    /// Dollar-denominated site
    pub fn us() -> Self {
        Self::with_currency(Currency::Usd)
    }

    fn with_currency(currency: Currency) -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            submission: SubmissionConfig {
                check_delay_ms: 1500,
                contact_delay_ms: 1000,
                registration_delay_ms: 1500,
            },
            display: DisplayConfig {
                currency,
                locale: currency.default_locale().to_string(),
            },
            notifications: NotificationConfig {
                ttl_ms: 5000,
                capacity: 16,
                sweep_interval_ms: 500,
                channel_capacity: 100,
            },
        }
    }

    /// Load configuration from `.env`, the selected profile, an optional
    /// TOML file and `MULESHIELD__*` environment variables, in that order.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let profile = match std::env::var("MULESHIELD_PROFILE") {
            Ok(name) => name.parse()?,
            Err(_) => Profile::India,
        };
        let path = std::env::var("MULESHIELD_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        tracing::debug!("Loading '{}' profile, overrides from {}", profile.name(), path);
        Self::load_with(profile, Path::new(&path))
    }

    /// Layer `path` (if it exists) and the environment over a profile preset
    pub fn load_with(profile: Profile, path: &Path) -> Result<Self> {
        let preset = config::Config::try_from(&profile.preset())?;

        let config: Config = config::Config::builder()
            .add_source(preset)
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.display.currency, Currency::Inr);
        assert_eq!(config.display.locale, "en-IN");
    }

    #[test]
    fn test_us_config() {
        let config = Config::us();
        assert!(config.validate().is_ok());
        assert_eq!(config.display.currency, Currency::Usd);
        assert_eq!(config.display.locale, "en-US");
    }

    #[test]
    fn test_default_delays() {
        let config = Config::default();
        assert_eq!(config.check_delay(), Duration::from_millis(1500));
        assert_eq!(config.contact_delay(), Duration::from_millis(1000));
        assert_eq!(config.registration_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_without_delays() {
        let config = Config::default().without_delays();
        assert_eq!(config.check_delay(), Duration::ZERO);
        assert_eq!(config.registration_delay(), Duration::ZERO);
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut config = Config::default();
        config.notifications.ttl_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!("india".parse::<Profile>().unwrap(), Profile::India);
        assert_eq!(Profile::Us.name(), "us");
        assert_eq!("US".parse::<Profile>().unwrap(), Profile::Us);
        assert!("mars".parse::<Profile>().is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::default();
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_load_with_file_overrides_preset() {
        let path = std::env::temp_dir().join(format!(
            "muleshield-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 9191\n\n[display]\ncurrency = \"USD\"\nlocale = \"en-US\"").unwrap();

        let config = Config::load_with(Profile::India, &path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.port, 9191);
        assert_eq!(config.display.currency, Currency::Usd);
        // untouched sections keep the preset values
        assert_eq!(config.submission.check_delay_ms, 1500);
    }

    #[test]
    fn test_load_with_missing_file_uses_preset() {
        let path = std::env::temp_dir().join("muleshield-does-not-exist.toml");
        let config = Config::load_with(Profile::Us, &path).unwrap();
        assert_eq!(config.display.currency, Currency::Usd);
    }
}

use log::warn;
use std::time::Duration;

pub const DEFAULT_PRICE_FEED_URL: &str = "https://interview.switcheo.com/prices.json";
pub const DEFAULT_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// URL of the JSON price list
    pub price_feed_url: String,

    /// Base URL that token icons are served from
    pub icon_base_url: String,

    /// Simulated settlement latency of a swap
    pub swap_delay_ms: u64,

    /// Probability that a simulated swap succeeds
    pub swap_success_rate: f64,

    /// Largest n accepted by the sum benchmark
    pub sum_max_n: u64,

    /// Largest n the recursive sum is attempted for
    pub sum_recursion_limit: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            price_feed_url: DEFAULT_PRICE_FEED_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            swap_delay_ms: 2_000,
            swap_success_rate: 0.8,
            sum_max_n: 10_000_000,
            sum_recursion_limit: 10_000,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid configuration ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn load() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("price_feed_url", defaults.price_feed_url.clone())?
            .set_default("icon_base_url", defaults.icon_base_url.clone())?
            .set_default("swap_delay_ms", defaults.swap_delay_ms)?
            .set_default("swap_success_rate", defaults.swap_success_rate)?
            .set_default("sum_max_n", defaults.sum_max_n)?
            .set_default("sum_recursion_limit", defaults.sum_recursion_limit)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        let non_negative = |key: &str| -> Result<u64, config::ConfigError> {
            let value = settings.get_int(key)?;
            u64::try_from(value)
                .map_err(|_| config::ConfigError::Message(format!("{} must not be negative", key)))
        };

        Ok(Self {
            price_feed_url: settings.get_string("price_feed_url")?,
            icon_base_url: settings
                .get_string("icon_base_url")?
                .trim_end_matches('/')
                .to_string(),
            swap_delay_ms: non_negative("swap_delay_ms")?,
            swap_success_rate: settings.get_float("swap_success_rate")?.clamp(0.0, 1.0),
            sum_max_n: non_negative("sum_max_n")?,
            sum_recursion_limit: non_negative("sum_recursion_limit")?,
        })
    }

    pub fn swap_delay(&self) -> Duration {
        Duration::from_millis(self.swap_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_feed() {
        let config = AppConfig::default();

        assert_eq!(config.price_feed_url, DEFAULT_PRICE_FEED_URL);
        assert_eq!(config.swap_delay(), Duration::from_secs(2));
        assert_eq!(config.swap_success_rate, 0.8);
    }

    // Tests below mutate the process environment, one at a time
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    /// Sets variables for one test and removes them when dropped
    struct EnvVars {
        keys: Vec<&'static str>,
        _lock: std::sync::MutexGuard<'static, ()>,
    }

    impl EnvVars {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
            Self {
                keys: vars.iter().map(|(key, _)| *key).collect(),
                _lock: lock,
            }
        }
    }

    impl Drop for EnvVars {
        fn drop(&mut self) {
            for key in &self.keys {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn environment_overrides_defaults() {
        let _env = EnvVars::set(&[
            ("PRICE_FEED_URL", "http://localhost:9000/prices.json"),
            ("ICON_BASE_URL", "http://localhost:9000/icons/"),
            ("SWAP_DELAY_MS", "10"),
            ("SWAP_SUCCESS_RATE", "0.5"),
        ]);

        let config = AppConfig::from_env();

        assert_eq!(config.price_feed_url, "http://localhost:9000/prices.json");
        assert_eq!(config.icon_base_url, "http://localhost:9000/icons");
        assert_eq!(config.swap_delay(), Duration::from_millis(10));
        assert_eq!(config.swap_success_rate, 0.5);
        assert_eq!(config.sum_max_n, AppConfig::default().sum_max_n);
    }

    #[test]
    fn invalid_value_falls_back_to_defaults() {
        let _env = EnvVars::set(&[
            ("PRICE_FEED_URL", "http://localhost:9000/prices.json"),
            ("SWAP_DELAY_MS", "-5"),
        ]);

        assert_eq!(AppConfig::from_env(), AppConfig::default());
    }

    #[test]
    fn success_rate_is_clamped_to_a_probability() {
        let env = EnvVars::set(&[("SWAP_SUCCESS_RATE", "1.5")]);
        assert_eq!(AppConfig::from_env().swap_success_rate, 1.0);
        drop(env);

        let _env = EnvVars::set(&[("SWAP_SUCCESS_RATE", "-0.2")]);
        assert_eq!(AppConfig::from_env().swap_success_rate, 0.0);
    }
}

use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub cors_allow_any: bool,
    pub cors_origins: Vec<String>,
    pub hubspot: HubSpotConfig,
    pub rate_limit_max_calls: u32,
    pub rate_limit_window_secs: u64,
}

#[derive(Clone, Debug)]
pub struct HubSpotConfig {
    pub api_base_url: String,
    pub authorization_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env_or("BIND_ADDR", "0.0.0.0:8080");
        let cors_raw = env_or("CORS_ORIGINS", "*");
        let (cors_allow_any, cors_origins) = parse_cors_origins(&cors_raw);
        let hubspot = HubSpotConfig {
            api_base_url: env_or("HUBSPOT_API_BASE_URL", "https://api.hubapi.com"),
            authorization_url: env_required("HUBSPOT_AUTHORIZATION_URL")?,
            client_id: env_required("HUBSPOT_CLIENT_ID")?,
            client_secret: env_required("HUBSPOT_CLIENT_SECRET")?,
            redirect_url: env_required("HUBSPOT_REDIRECT_URL")?,
            timeout_ms: env_or_parse("HUBSPOT_TIMEOUT_MS", 30_000)?,
        };
        let rate_limit_max_calls = env_or_parse("RATE_LIMIT_MAX_CALLS", 10)?;
        let rate_limit_window_secs = env_or_parse("RATE_LIMIT_WINDOW_SECS", 10)?;

        let cfg = Self {
            bind_addr,
            cors_allow_any,
            cors_origins,
            hubspot,
            rate_limit_max_calls,
            rate_limit_window_secs,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.rate_limit_window_secs == 0 {
            return Err(anyhow::anyhow!("RATE_LIMIT_WINDOW_SECS must be > 0"));
        }
        if self.hubspot.timeout_ms == 0 {
            return Err(anyhow::anyhow!("HUBSPOT_TIMEOUT_MS must be > 0"));
        }
        Ok(())
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_required(key: &str) -> anyhow::Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("{key} is required"))
}

fn env_or_parse<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => parse_value(key, &value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, value: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .map_err(|err| anyhow::anyhow!("{key} is invalid: {err}"))
}

fn parse_cors_origins(value: &str) -> (bool, Vec<String>) {
    let origins = parse_list(value);

    if origins.iter().any(|item| item == "*") {
        (true, Vec::new())
    } else {
        (false, origins)
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            cors_allow_any: true,
            cors_origins: Vec::new(),
            hubspot: crate::test_support::hubspot_config("http://127.0.0.1:9"),
            rate_limit_max_calls: 10,
            rate_limit_window_secs: 10,
        }
    }

    #[test]
    fn missing_required_variable_is_reported() {
        let err = env_required("HUBSPOT_RELAY_TEST_NEVER_SET").unwrap_err();
        assert_eq!(err.to_string(), "HUBSPOT_RELAY_TEST_NEVER_SET is required");
    }

    #[test]
    fn unset_optional_variable_uses_default() {
        let value: u32 = env_or_parse("HUBSPOT_RELAY_TEST_NEVER_SET", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn unparsable_number_is_rejected() {
        let err = parse_value::<u32>("RATE_LIMIT_MAX_CALLS", "abc").unwrap_err();
        assert!(err.to_string().starts_with("RATE_LIMIT_MAX_CALLS is invalid"));
        assert_eq!(parse_value::<u64>("HUBSPOT_TIMEOUT_MS", "2500").unwrap(), 2500);
    }

    #[test]
    fn zero_window_is_rejected() {
        let cfg = Config {
            rate_limit_window_secs: 0,
            ..sample()
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.to_string(), "RATE_LIMIT_WINDOW_SECS must be > 0");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut cfg = sample();
        cfg.hubspot.timeout_ms = 0;
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.to_string(), "HUBSPOT_TIMEOUT_MS must be > 0");
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn wildcard_allows_any_origin() {
        assert_eq!(parse_cors_origins("https://a.test, *"), (true, Vec::new()));
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let (any, origins) = parse_cors_origins(" https://a.test ,, https://b.test");
        assert!(!any);
        assert_eq!(origins, vec!["https://a.test", "https://b.test"]);
    }
}

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub endpoint: String,
    pub warmup_secs: u64,
    pub interval_secs: u64,
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://api:8080/measurements".to_string(),
            warmup_secs: 10,
            interval_secs: 13,
            request_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Defaults overridden by `SIM_*` environment variables.
    pub fn load() -> Self {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("SIM_"))
            .extract()
            .unwrap_or_else(|_| Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_compose_setup() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://api:8080/measurements");
        assert_eq!(config.warmup_secs, 10);
        assert_eq!(config.interval_secs, 13);
    }
}

use crate::api::DEFAULT_API_BASE;
use std::env;

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base: String,
    pub bind_addr: String,
    pub seed_sample: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            bind_addr: "127.0.0.1:9999".to_string(),
            seed_sample: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let api_base = lookup("ADMIN_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_base);
        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.bind_addr);
        let seed_sample = lookup("ADMIN_SEED_SAMPLE")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.seed_sample);

        Self {
            api_base,
            bind_addr,
            seed_sample,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> DashboardConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), DashboardConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("ADMIN_API_BASE", "http://api.internal:8080"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("ADMIN_SEED_SAMPLE", "off"),
        ]);
        assert_eq!(config.api_base, "http://api.internal:8080");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(!config.seed_sample);
    }

    #[test]
    fn unparseable_flag_falls_back() {
        let config = config_from(&[("ADMIN_SEED_SAMPLE", "maybe"), ("BIND_ADDR", " ")]);
        assert!(config.seed_sample);
        assert_eq!(config.bind_addr, "127.0.0.1:9999");
    }
}

use anyhow::Context;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON file replacing the built-in catalog. Same shape as `GET /activities`.
    pub activities_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let activities_file = lookup("ACTIVITIES_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            host,
            port,
            activities_file,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.activities_file, None);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", " 9090 "),
            ("ACTIVITIES_FILE", "/etc/mergington/activities.json"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(
            config.activities_file,
            Some(PathBuf::from("/etc/mergington/activities.json"))
        );
    }

    #[rstest]
    #[case("eighty")]
    #[case("70000")]
    #[case("")]
    fn it_should_reject_an_invalid_port(#[case] port: &str) {
        let result = Config::from_lookup(lookup(&[("PORT", port)]));
        assert!(result.unwrap_err().to_string().contains("PORT must be a port number"));
    }

    #[rstest]
    fn it_should_treat_blank_values_as_unset() {
        let config =
            Config::from_lookup(lookup(&[("HOST", "  "), ("ACTIVITIES_FILE", "")])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.activities_file, None);
    }
}

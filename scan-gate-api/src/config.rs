//! Environment configuration

use anyhow::{bail, Context};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub host: String,
    pub port: u16,
    /// Whether the vulnerability scanner integration is active
    pub with_scanner: bool,
    /// JSON file seeding the in-memory store
    pub seed_path: Option<PathBuf>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            with_scanner: false,
            seed_path: None,
        }
    }
}

impl GateConfig {
    /// Read `HOST`, `PORT`, `WITH_SCANNER` and `SEED_PATH`
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid u16, got {:?}", raw))?,
            None => defaults.port,
        };
        let with_scanner = match lookup("WITH_SCANNER") {
            Some(raw) => parse_flag("WITH_SCANNER", &raw)?,
            None => defaults.with_scanner,
        };
        let seed_path = lookup("SEED_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            with_scanner,
            seed_path,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(key: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => bail!("{} must be a boolean, got {:?}", key, raw),
    }
}

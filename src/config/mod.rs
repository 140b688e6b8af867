use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

use crate::domain::Market;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenSpec {
    pub address: String,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tokens: Vec<TokenSpec>,

    /// Directory holding the compiled contract artifacts
    #[serde(default)]
    pub abi_dir: Option<PathBuf>,
}

impl TokenSpec {
    pub fn normalized_address(&self) -> String {
        normalize_address(&self.address)
    }

    pub fn display_symbol(&self) -> String {
        self.symbol
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| short_addr(&self.address))
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        let by_symbol = self
            .symbol
            .as_deref()
            .is_some_and(|symbol| symbol.trim().eq_ignore_ascii_case(query));
        by_symbol || self.normalized_address() == normalize_address(query)
    }
}

impl Config {
    /// Find a token by symbol (case-insensitive) or address
    pub fn find_token(&self, query: &str) -> Option<&TokenSpec> {
        self.tokens.iter().find(|token| token.matches(query))
    }

    /// Decimals of a configured token
    pub fn token_decimals(&self, query: &str) -> anyhow::Result<u8> {
        let token = self
            .find_token(query)
            .with_context(|| format!("unknown token '{}'", query))?;
        token
            .decimals
            .with_context(|| format!("token {} has no decimals configured", token.display_symbol()))
    }

    /// Market for a configured base/quote pair
    pub fn market(&self, base: &str, quote: &str) -> anyhow::Result<Market> {
        Ok(Market::new(
            self.token_decimals(base)?,
            self.token_decimals(quote)?,
        ))
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    load_from(&path).unwrap_or_else(|err| {
        warn!(path = %path.display(), "ignoring config: {err:#}");
        Config::default()
    })
}

pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("MONACO_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("monaco").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("monaco").join("config.toml"));
    }

    directories::ProjectDirs::from("markets", "monaco", "monaco")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    let payload = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    format!("0x{}", payload.to_lowercase())
}

fn short_addr(value: &str) -> String {
    let value = value.trim();
    if value.len() <= 10 {
        return value.to_string();
    }
    let start: String = value.chars().take(6).collect();
    let end: String = value
        .chars()
        .rev()
        .take(4)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    format!("{}..{}", start, end)
}

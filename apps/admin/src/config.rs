use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use client_core::{options::DEFAULT_OPTION_LIMIT, pagination::DEFAULT_PAGE_SIZE};
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "admin.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub page_size: usize,
    pub session_path: Option<PathBuf>,
    pub customer_option_limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".into(),
            page_size: DEFAULT_PAGE_SIZE,
            session_path: None,
            customer_option_limit: DEFAULT_OPTION_LIMIT,
        }
    }
}

/// Defaults, then the TOML file at `config_path` if it exists, then the
/// process environment.
pub fn load_settings(config_path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(config_path) {
        Ok(raw) => {
            apply_file_overrides(&mut settings, &raw)
                .with_context(|| format!("invalid config file '{}'", config_path.display()))?;
            debug!(path = %config_path.display(), "loaded config file");
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", config_path.display()))
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    validate_base_url(&settings.api_base_url)?;
    Ok(settings)
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw)?;

    if let Some(v) = file_cfg.get("api_base_url") {
        settings.api_base_url = as_text(v);
    }
    if let Some(v) = file_cfg.get("page_size") {
        settings.page_size = parse_positive("page_size", &as_text(v))?;
    }
    if let Some(v) = file_cfg.get("session_path") {
        settings.session_path = Some(PathBuf::from(as_text(v)));
    }
    if let Some(v) = file_cfg.get("customer_option_limit") {
        settings.customer_option_limit = parse_positive("customer_option_limit", &as_text(v))?;
    }

    Ok(())
}

/// Unparseable numbers are logged and ignored.
pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ADMIN_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = lookup("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = lookup("APP__PAGE_SIZE") {
        match parse_positive("APP__PAGE_SIZE", &v) {
            Ok(parsed) => settings.page_size = parsed,
            Err(err) => warn!(error = %err, "ignoring APP__PAGE_SIZE"),
        }
    }

    if let Some(v) = lookup("APP__SESSION_PATH") {
        settings.session_path = Some(PathBuf::from(v));
    }

    if let Some(v) = lookup("APP__CUSTOMER_OPTION_LIMIT") {
        match parse_positive("APP__CUSTOMER_OPTION_LIMIT", &v) {
            Ok(parsed) => settings.customer_option_limit = parsed,
            Err(err) => warn!(error = %err, "ignoring APP__CUSTOMER_OPTION_LIMIT"),
        }
    }
}

/// Where the session file lives: the configured path, or
/// `<data_local_dir>/bizdesk/session.json`.
pub fn resolve_session_path(settings: &Settings) -> anyhow::Result<PathBuf> {
    if let Some(path) = &settings.session_path {
        return Ok(path.clone());
    }

    let base = dirs::data_local_dir().ok_or_else(|| anyhow!("unable to resolve local app data dir"))?;
    Ok(base.join("bizdesk").join("session.json"))
}

fn validate_base_url(raw: &str) -> anyhow::Result<()> {
    let parsed = Url::parse(raw).with_context(|| format!("invalid API base URL '{raw}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(anyhow!("API base URL must use http or https: '{raw}'"));
    }
    Ok(())
}

fn as_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_positive<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let parsed = raw
        .trim()
        .parse::<T>()
        .map_err(|_| anyhow!("{key} must be a positive integer, got '{raw}'"))?;
    if parsed == T::default() {
        return Err(anyhow!("{key} must be greater than zero"));
    }
    Ok(parsed)
}

//! Viewer configuration.
//!
//! Two layers, later wins:
//! 1. `portfolio.toml` (explicit path, `PORTFOLIO_CONFIG_PATH`, or the
//!    working directory). A missing file means built-in defaults.
//! 2. `PORTFOLIO_*` environment variables.
//!
//! The EmailJS identifiers have no built-in values; they must come from the
//! file or the environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "portfolio.toml";
pub const CONFIG_PATH_ENV: &str = "PORTFOLIO_CONFIG_PATH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(String),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration value: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub emailjs: EmailJsConfig,
    pub assets: AssetsConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: 15,
        }
    }
}

impl EmailJsConfig {
    pub fn is_configured(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding project images, the profile picture and the resume.
    pub dir: PathBuf,
    /// Skill icon location; `{slug}` is replaced by the skill's slug.
    /// Either a URL or a filesystem path.
    pub icon_source: String,
    pub resume_file: String,
    pub profile_image: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            icon_source: "assets/icons/{slug}.png".to_string(),
            resume_file: "Resume.pdf".to_string(),
            profile_image: "profile.png".to_string(),
        }
    }
}

impl AssetsConfig {
    pub fn path_of(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.emailjs.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "emailjs.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if !self.assets.icon_source.contains("{slug}") {
            return Err(ConfigError::InvalidValue(format!(
                "assets.icon_source must contain {{slug}}: {}",
                self.assets.icon_source
            )));
        }
        url::Url::parse(&self.emailjs.endpoint).map_err(|e| {
            ConfigError::InvalidValue(format!("emailjs.endpoint: {}", e))
        })?;
        Ok(())
    }
}

/// Locate the config file, if there is one.
///
/// `PORTFOLIO_CONFIG_PATH` must point at an existing file; the working
/// directory lookup is optional.
pub fn find_config_file() -> ConfigResult<Option<PathBuf>> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(Some(path));
        }
        return Err(ConfigError::FileNotFound(format!(
            "{} points at {}",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let local = env::current_dir()?.join(CONFIG_FILE_NAME);
    Ok(local.exists().then_some(local))
}

/// Load configuration from `config_path` (or the discovered file), then
/// apply environment overrides and validate.
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<AppConfig> {
    let file = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file()?,
    };

    let mut config = match file {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        }
        None => {
            log::info!("no {} found, using defaults", CONFIG_FILE_NAME);
            AppConfig::default()
        }
    };

    apply_environment_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Apply `PORTFOLIO_*` environment variables.
///
/// - `PORTFOLIO_EMAILJS_ENDPOINT`     -> `emailjs.endpoint`
/// - `PORTFOLIO_EMAILJS_SERVICE_ID`   -> `emailjs.service_id`
/// - `PORTFOLIO_EMAILJS_TEMPLATE_ID`  -> `emailjs.template_id`
/// - `PORTFOLIO_EMAILJS_PUBLIC_KEY`   -> `emailjs.public_key`
/// - `PORTFOLIO_EMAILJS_TIMEOUT_SECS` -> `emailjs.timeout_secs`
/// - `PORTFOLIO_ASSETS_DIR`           -> `assets.dir`
/// - `PORTFOLIO_ICON_SOURCE`          -> `assets.icon_source`
/// - `PORTFOLIO_RESUME_FILE`          -> `assets.resume_file`
/// - `PORTFOLIO_BACKEND_URL`          -> `backend.base_url`
pub fn apply_environment_overrides(config: &mut AppConfig) -> ConfigResult<()> {
    if let Ok(value) = env::var("PORTFOLIO_EMAILJS_ENDPOINT") {
        config.emailjs.endpoint = value;
    }
    if let Ok(value) = env::var("PORTFOLIO_EMAILJS_SERVICE_ID") {
        config.emailjs.service_id = value;
    }
    if let Ok(value) = env::var("PORTFOLIO_EMAILJS_TEMPLATE_ID") {
        config.emailjs.template_id = value;
    }
    if let Ok(value) = env::var("PORTFOLIO_EMAILJS_PUBLIC_KEY") {
        config.emailjs.public_key = value;
    }
    if let Ok(value) = env::var("PORTFOLIO_EMAILJS_TIMEOUT_SECS") {
        config.emailjs.timeout_secs = value.parse().map_err(|_| {
            ConfigError::InvalidValue(format!("PORTFOLIO_EMAILJS_TIMEOUT_SECS={}", value))
        })?;
    }
    if let Ok(value) = env::var("PORTFOLIO_ASSETS_DIR") {
        config.assets.dir = PathBuf::from(value);
    }
    if let Ok(value) = env::var("PORTFOLIO_ICON_SOURCE") {
        config.assets.icon_source = value;
    }
    if let Ok(value) = env::var("PORTFOLIO_RESUME_FILE") {
        config.assets.resume_file = value;
    }
    if let Ok(value) = env::var("PORTFOLIO_BACKEND_URL") {
        config.backend.base_url = value;
    }
    Ok(())
}

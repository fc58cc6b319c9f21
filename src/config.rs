use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_API_URL: &str = "FORM_DESIGN_API_URL";
pub const ENV_TOKEN: &str = "FORM_DESIGN_TOKEN";

/// Connection settings for one backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base the endpoint paths are appended to, e.g. `http://localhost:8889/api`
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8889/api".to_string(),
            token: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Build a config from `FORM_DESIGN_API_URL` / `FORM_DESIGN_TOKEN`,
    /// reading a `.env` file first if there is one
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(ENV_API_URL)
            .with_context(|| format!("{} is not set", ENV_API_URL))?;
        let token = std::env::var(ENV_TOKEN).ok();

        Ok(Self {
            base_url,
            token,
            ..Self::default()
        })
    }

    /// Overlay environment values on top of this config
    pub fn apply_env(mut self) -> Self {
        dotenvy::dotenv().ok();

        if let Ok(base_url) = std::env::var(ENV_API_URL) {
            debug!("Using API URL from {}", ENV_API_URL);
            self.base_url = base_url;
        }
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            debug!("Using token from {}", ENV_TOKEN);
            self.token = Some(token);
        }
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub current_profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, ClientConfig>,
    #[serde(default)]
    pub settings: Settings,
    /// File this config was read from; `save` writes back there
    #[serde(skip)]
    path: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("form-design")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".form-design")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self {
                path: Some(config_path.to_path_buf()),
                ..Self::default()
            });
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let mut config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        config.path = Some(config_path.to_path_buf());

        debug!("Loaded config with {} profiles", config.profiles.len());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = match &self.path {
            Some(path) => path.clone(),
            None => Self::get_config_path()?,
        };
        debug!("Saving config to: {:?}", config_path);

        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
                info!("Created config directory: {:?}", parent);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn add_profile(&mut self, name: String, client: ClientConfig) -> Result<()> {
        info!("Adding profile: {}", name);
        self.profiles.insert(name.clone(), client);

        // Set as current profile if it's the first one
        if self.current_profile.is_none() {
            self.current_profile = Some(name.clone());
            info!("Set {} as current profile", name);
        }

        self.save()
    }

    pub fn set_current_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            anyhow::bail!("Profile '{}' not found", name);
        }

        info!("Setting current profile to: {}", name);
        self.current_profile = Some(name);
        self.save()
    }

    pub fn remove_profile(&mut self, name: &str) -> Result<()> {
        if self.profiles.remove(name).is_none() {
            anyhow::bail!("Profile '{}' not found", name);
        }

        info!("Removing profile: {}", name);
        if self.current_profile.as_deref() == Some(name) {
            warn!("Removed current profile, clearing current selection");
            self.current_profile = None;
        }

        self.save()
    }

    pub fn list_profiles(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.profiles.keys().collect();
        names.sort();
        names
    }

    /// The named profile, or the current one when no name is given
    pub fn profile(&self, name: Option<&str>) -> Result<Option<&ClientConfig>> {
        match name {
            Some(name) => self
                .profiles
                .get(name)
                .map(Some)
                .ok_or_else(|| anyhow::anyhow!("Profile '{}' not found", name)),
            None => Ok(self
                .current_profile
                .as_ref()
                .and_then(|current| self.profiles.get(current))),
        }
    }
}

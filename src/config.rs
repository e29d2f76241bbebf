use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::Result;
use tracing::debug;

use crate::config_manager::utils::read_config_text;
use crate::config_manager::LLMConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub llm_config: LLMConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl SystemConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_config_text(path)?;
        Self::parse(&content, path)
    }

    /// Parse by extension: `.json` as JSON, anything else as YAML
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let config = if is_json {
            serde_json::from_str(content)?
        } else {
            serde_yaml::from_str(content)?
        };
        Ok(config)
    }

    /// Build a configuration from environment variables alone.
    /// `GEMINI_API_KEY` is required; `GEMINI_MODEL`, `HOST` and `PORT` are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY is not set"))?;

        let mut system_config = SystemConfig::default();
        if let Some(host) = lookup("HOST") {
            system_config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            system_config.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", port, e))?;
        }

        Ok(Self {
            system_config,
            llm_config: LLMConfig::gemini(api_key, lookup("GEMINI_MODEL")),
        })
    }

    /// Default config file locations, in priority order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = ["conf.yaml", "conf.json"]
            .into_iter()
            .map(PathBuf::from)
            .collect();
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        {
            for name in ["conf.yaml", "conf.json"] {
                paths.push(dir.join(name));
            }
        }
        paths
    }

    /// Load the configuration named by `CONFIG_PATH`, else the first default
    /// file that exists, else the environment.
    /// Returns the config and a description of where it came from.
    pub fn discover() -> Result<(Self, String)> {
        let explicit = std::env::var_os("CONFIG_PATH").map(PathBuf::from);
        Self::discover_from(explicit, &Self::default_paths(), |name| std::env::var(name).ok())
    }

    /// A file that exists must parse; the environment is used only when
    /// no file is present and no explicit path was given.
    fn discover_from<F>(
        explicit: Option<PathBuf>,
        candidates: &[PathBuf],
        lookup: F,
    ) -> Result<(Self, String)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("CONFIG_PATH points to a missing file: {}", path.display());
            }
            return Self::load_from(&path);
        }

        if let Some(path) = candidates.iter().find(|path| path.exists()) {
            return Self::load_from(path);
        }

        debug!("No config file found in {:?}; using environment", candidates);
        let config = Self::from_lookup(lookup).map_err(|e| {
            e.context(format!(
                "No config file found (tried {:?}) and environment fallback failed",
                candidates
            ))
        })?;
        Ok((config, "environment".to_string()))
    }

    fn load_from(path: &Path) -> Result<(Self, String)> {
        let config = Self::load(path)
            .map_err(|e| e.context(format!("Failed to load config from {}", path.display())))?;
        Ok((config, path.display().to_string()))
    }
}

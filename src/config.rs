use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| "Failed to parse config TOML")?;
        if config.version != CONFIG_VERSION {
            anyhow::bail!(
                "Unsupported config version {}, expected {CONFIG_VERSION}",
                config.version
            );
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            shell: ShellConfig::default(),
            log: LogConfig::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Text written by the interactive shell
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    pub welcome: String,
    pub farewell: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            welcome: "Welcome to your music collection!".to_string(),
            farewell: "Bye!".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// Default `env_logger` filter, `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

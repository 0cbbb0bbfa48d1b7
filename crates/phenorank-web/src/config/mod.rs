//! Configuration loading for Phenorank.
//! Reads phenorank.toml from the current directory or the path in PHENORANK_CONFIG.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "PHENORANK_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "phenorank.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the configuration was read from; `None` means built-in defaults.
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 4001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_association_file")]
    pub association_file: PathBuf,
    #[serde(default = "default_phenopacket_dir")]
    pub phenopacket_dir: PathBuf,
}

fn default_association_file() -> PathBuf { PathBuf::from("data/phenotype_to_genes.txt") }
fn default_phenopacket_dir()  -> PathBuf { PathBuf::from("data/phenopackets") }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            association_file: default_association_file(),
            phenopacket_dir: default_phenopacket_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "phenorank=debug,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

mod tests;

impl Config {
    /// Load configuration from phenorank.toml.
    /// Checks PHENORANK_CONFIG first, then the current directory.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Load from an explicitly requested file, or from the default location.
    ///
    /// An explicit path must exist. A missing default file falls back to
    /// built-in defaults.
    pub fn load_from(explicit: Option<PathBuf>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!(
                        "Config file not found: {} (set by {CONFIG_ENV})",
                        path.display()
                    );
                }
                Self::from_file(&path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.loaded_from = Some(path.to_path_buf());
        Ok(config)
    }
}

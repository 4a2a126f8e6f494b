use crate::db::IdPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ids: IdsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where the collection documents live. File names are resolved against
/// `dir` unless they are absolute.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_products_file")]
    pub products: PathBuf,
    #[serde(default = "default_hashtags_file")]
    pub hashtags: PathBuf,
    #[serde(default = "default_product_hashtags_file")]
    pub product_hashtags: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            products: default_products_file(),
            hashtags: default_hashtags_file(),
            product_hashtags: default_product_hashtags_file(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdsConfig {
    #[serde(default)]
    pub policy: IdPolicy,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("db")
}

fn default_products_file() -> PathBuf {
    PathBuf::from("products.json")
}

fn default_hashtags_file() -> PathBuf {
    PathBuf::from("hashtags.json")
}

fn default_product_hashtags_file() -> PathBuf {
    PathBuf::from("productHashtags.json")
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        Self::parse(&content)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host must not be empty");
        }
        if self.storage.dir.as_os_str().is_empty() {
            anyhow::bail!("storage.dir must not be empty");
        }
        for (name, file) in [
            ("storage.products", &self.storage.products),
            ("storage.hashtags", &self.storage.hashtags),
            ("storage.product_hashtags", &self.storage.product_hashtags),
        ] {
            if file.as_os_str().is_empty() {
                anyhow::bail!("{} must not be empty", name);
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

use crate::config::StorageConfig;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub const CONFIG_FILE: &str = "catalog.toml";

/// Sets up a catalog directory: a default config (kept if one exists) and an
/// empty document for each collection.
pub async fn run(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let config_path = path.join(CONFIG_FILE);
    let config = if config_path.exists() {
        tracing::info!("Keeping existing {}", config_path.display());
        Config::load(&config_path)?
    } else {
        let config = Config::default();
        std::fs::write(&config_path, config.to_toml()?)?;
        tracing::info!("Wrote {}", config_path.display());
        config
    };

    let storage = StorageConfig {
        dir: path.join(&config.storage.dir),
        ..config.storage
    };
    let db = Database::open(&storage)?;
    let created = db.ensure_collections().await?;

    tracing::info!(
        "Created {} collection document(s) in {}",
        created.len(),
        storage.dir.display()
    );
    tracing::info!("Run 'catalog serve' from {} to start the server", path.display());

    Ok(())
}

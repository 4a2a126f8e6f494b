use crate::{web, Config, Database};
use anyhow::{Context, Result};
use std::path::Path;

pub async fn run(config_path: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let db = Database::open(&config.storage)
        .with_context(|| format!("opening storage at {}", config.storage.dir.display()))?
        .with_id_policy(config.ids.policy);

    let created = db.ensure_collections().await?;
    if !created.is_empty() {
        tracing::info!("Initialized {} empty collection(s)", created.len());
    }
    tracing::debug!("Id policy: {:?}", db.id_policy());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server at http://{}", addr);

    web::serve(db, &addr).await?;

    Ok(())
}

use crate::api::{StockroomApi, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::{Result, StockroomError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "STOCKROOM_DATA";

pub struct StockroomContext {
    pub api: StockroomApi<FileStore>,
    pub config: StockroomConfig,
}

/// Picks the data directory: an explicit override (flag or env, already merged
/// by the caller), otherwise the platform data dir.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockroomError::Config("Could not determine data directory".to_string()))
}

/// Builds the API over the resolved data dir and seeds the demo products
/// into an empty collection when the config allows it.
pub fn initialize(data_override: Option<PathBuf>) -> Result<StockroomContext> {
    let data_dir = resolve_data_dir(data_override)?;
    debug!(data_dir = %data_dir.display(), "initializing");

    let config = StockroomConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        StockroomConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let paths = StockroomPaths { data_dir };
    let mut api = StockroomApi::new(store, config.clone(), paths);
    if api.ensure_seeded()? {
        debug!("seeded demo products");
    }

    Ok(StockroomContext { api, config })
}

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError, info::ports::InfoRepository,
    profile::entities::Mode,
};

/// Loads the static per-mode info documents (`info_women.json`,
/// `info_men.json`) from a configured directory. An absent or unparsable
/// document degrades to an empty object instead of failing the request.
#[derive(Debug, Clone)]
pub struct FileInfoRepository {
    base_dir: PathBuf,
}

impl FileInfoRepository {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn info_path(&self, mode: Mode) -> PathBuf {
        self.base_dir.join(format!("info_{}.json", mode))
    }
}

impl InfoRepository for FileInfoRepository {
    async fn load_info(&self, mode: Mode) -> Result<Value, CoreError> {
        let path = self.info_path(mode);

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("No info document at {}: {}", path.display(), e);
                return Ok(Value::Object(Map::new()));
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!("Unparsable info document at {}: {}", path.display(), e);
                Ok(Value::Object(Map::new()))
            }
        }
    }
}

use crate::Worker;
use gowork_core::Value;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub name: String,
    pub data: Value,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        WorkerConfig {
            name: "Simple Worker".to_string(),
            data: serde_json::json!({ "type": "echo" }),
        }
    }
}

impl WorkerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: WorkerConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn into_worker(self) -> Worker {
        Worker::new(self.name, self.data)
    }
}

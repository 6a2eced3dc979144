use crate::persistence::{atomic_write, read_file};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Simple key -> integer store
pub trait CounterStore {
    fn load(&self, key: &str) -> Result<Option<u64>>;
    fn store(&mut self, key: &str, value: u64) -> Result<()>;
    /// Whether values outlive the process
    fn is_durable(&self) -> bool;
}

/// Key under which a day's completed focus sessions are kept
pub fn session_key(date: NaiveDate) -> String {
    format!("completed-sessions-{}", date.format("%Y-%m-%d"))
}

/// Counters kept in a JSON object on disk, rewritten atomically on every store
#[derive(Debug, Clone)]
pub struct JsonCounterStore {
    path: PathBuf,
}

impl JsonCounterStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, u64>> {
        let content = read_file(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid counters file: {}", self.path.display()))
    }
}

impl CounterStore for JsonCounterStore {
    fn load(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn store(&mut self, key: &str, value: u64) -> Result<()> {
        let mut counters = self.read_all()?;
        counters.insert(key.to_string(), value);
        let json = serde_json::to_string_pretty(&counters)?;
        atomic_write(&self.path, &json)
    }

    fn is_durable(&self) -> bool {
        true
    }
}

/// Counters that live only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryCounterStore {
    values: HashMap<String, u64>,
}

impl CounterStore for MemoryCounterStore {
    fn load(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.values.get(key).copied())
    }

    fn store(&mut self, key: &str, value: u64) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}

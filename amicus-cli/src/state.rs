use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const LEDGER_FILE: &str = "ledger.json";
pub const CHAT_FILE: &str = "chat.json";
pub const FLIX_FILE: &str = "flix.json";
pub const REVIEWS_FILE: &str = "reviews.json";

/// `$AMICUS_HOME`, or `~/.amicus`.
pub fn amicus_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("AMICUS_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".amicus"))
}

/// JSON files holding session state between invocations.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open() -> Result<Self> {
        Self::at(amicus_home()?)
    }

    pub fn at(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// `None` when the file has not been written yet.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let p = self.path(name);
        if !p.exists() {
            return Ok(None);
        }
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        let value = serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
        Ok(Some(value))
    }

    pub fn load_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        Ok(self.load(name)?.unwrap_or_default())
    }

    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let p = self.path(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
        tracing::debug!(path = %p.display(), "saved state");
        Ok(())
    }
}

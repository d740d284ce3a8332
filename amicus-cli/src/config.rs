use amicus_core::DayKey;
use amicus_core::flix::DEFAULT_PAGE_SIZE;
use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileSection,
    pub flix: FlixSection,
    pub chat: ChatSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileSection {
    /// IANA timezone used to decide what "today" is.
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlixSection {
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatSection {
    /// Messages shown by `chat history`.
    pub history_page: usize,
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
        }
    }
}

impl Default for FlixSection {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for ChatSection {
    fn default() -> Self {
        Self { history_page: 10 }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<Tz> {
        self.profile
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone in config: {}", self.profile.timezone))
    }

    /// Today's date key in the profile timezone.
    pub fn today(&self) -> Result<DayKey> {
        let tz = self.timezone()?;
        Ok(DayKey::new(Utc::now().with_timezone(&tz).date_naive()))
    }
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

pub fn load_config(dir: &Path) -> Result<Config> {
    let p = config_path(dir);
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(dir: &Path, cfg: &Config) -> Result<()> {
    let p = config_path(dir);
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config(dir: &Path) -> Result<()> {
    let p = config_path(dir);
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(dir, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::daily::DailyNotes;
use crate::memo::{MemoSettings, PostFormat};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub memo: MemoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Folder for daily notes, relative to vault_root (empty: vault root)
    #[serde(default)]
    pub daily_dir: String,
    /// chrono format of daily note file names, without extension
    #[serde(default = "default_daily_format")]
    pub daily_format: String,
}

fn default_daily_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Where and how memos are written.
#[derive(Debug, Deserialize, Clone)]
pub struct MemoConfig {
    #[serde(default)]
    pub post_format: PostFormat,
    /// Heading address such as "## Journal"; empty appends to end of file
    #[serde(default)]
    pub section: String,
    /// Text marking an early end of the section
    #[serde(default)]
    pub section_end: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_auto_demote")]
    pub auto_demote_heading: bool,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            post_format: PostFormat::default(),
            section: String::new(),
            section_end: String::new(),
            timestamp_format: default_timestamp_format(),
            auto_demote_heading: default_auto_demote(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_auto_demote() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    pub daily: DailyNotes,
    pub memo: MemoSettings,
    pub logging: LoggingConfig,
}

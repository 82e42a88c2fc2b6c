pub mod check;
pub mod doctor;
pub mod list;
pub mod path;
pub mod post;
pub mod tasks;

use std::path::Path;

use chrono::{Local, NaiveDate};
use daymemo_core::config::loader::{ConfigLoader, default_config_path};
use daymemo_core::config::types::ResolvedConfig;
use daymemo_core::store::FsNoteStore;

use crate::DateArgs;

/// Load config and start logging, or report the failure and exit.
pub fn load_config(config: Option<&Path>, profile: Option<&str>, name: &str) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc.logging);
            rc
        }
        Err(e) => {
            eprintln!("FAIL dmemo {name}");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

pub fn store_for(cfg: &ResolvedConfig) -> FsNoteStore {
    FsNoteStore::new(&cfg.vault_root)
}

pub fn resolve_date(args: &DateArgs) -> NaiveDate {
    args.date.unwrap_or_else(|| Local::now().date_naive())
}

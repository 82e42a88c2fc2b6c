use daymemo_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc.logging);

            let section =
                if rc.memo.section.is_empty() { "(end of file)" } else { rc.memo.section.as_str() };

            println!("OK   dmemo doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("daily_dir: {}", rc.daily.dir().display());
            println!("daily_format: {}", rc.daily.file_format());
            println!("post_format: {}", rc.memo.post_format);
            println!("section: {section}");
            println!("section_end: {}", rc.memo.section_end);
            println!("timestamp_format: {}", rc.memo.timestamp_format);
            println!("auto_demote_heading: {}", rc.memo.auto_demote_heading);
        }
        Err(e) => {
            println!("FAIL dmemo doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

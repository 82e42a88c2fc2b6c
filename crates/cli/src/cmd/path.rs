use std::path::Path;

use crate::DateArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &DateArgs) {
    let cfg = super::load_config(config, profile, "path");
    let date = super::resolve_date(args);
    let store = super::store_for(&cfg);

    println!("{}", store.resolve(&cfg.daily.path_for(date)).display());
}

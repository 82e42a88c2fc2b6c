use std::path::Path;

use daymemo_core::memo::MemoService;

use crate::CheckArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &CheckArgs) {
    let cfg = super::load_config(config, profile, "check");
    let store = super::store_for(&cfg);
    let service = MemoService::new(&store, &cfg.memo, &cfg.daily);
    let date = super::resolve_date(&args.date);
    let mark = if args.undo { ' ' } else { 'x' };

    if let Err(e) = service.set_check_mark(date, mark, args.offset) {
        eprintln!("FAIL dmemo check");
        eprintln!("{e}");
        std::process::exit(1);
    }

    println!("OK   dmemo check");
    println!("offset: {} -> [{mark}]", args.offset);
}

use std::path::Path;

use daymemo_core::memo::MemoService;
use tracing::error;

use crate::TasksArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &TasksArgs) {
    let cfg = super::load_config(config, profile, "tasks");
    let store = super::store_for(&cfg);
    let service = MemoService::new(&store, &cfg.memo, &cfg.daily);
    let date = super::resolve_date(&args.date);

    let tasks = match service.tasks(date) {
        Ok(t) => t.unwrap_or_default(),
        Err(e) => {
            error!("Failed to read tasks: {e}");
            eprintln!("FAIL dmemo tasks");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let tasks: Vec<_> = tasks.into_iter().filter(|t| !args.open || !t.is_done()).collect();

    if args.json {
        match serde_json::to_string_pretty(&tasks) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize tasks: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if tasks.is_empty() {
        println!("(no tasks for {date})");
        return;
    }

    for task in &tasks {
        println!("[{}] {}  (offset {})", task.mark, task.name, task.offset);
    }
}

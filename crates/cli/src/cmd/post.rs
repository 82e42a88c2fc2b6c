use std::path::Path;

use chrono::Local;
use daymemo_core::markdown_ast::{MarkdownEditor, build_heading_line};
use daymemo_core::memo::{InsertBranch, MemoService};
use daymemo_core::store::NoteStore;
use tracing::error;

use crate::PostArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &PostArgs) {
    let cfg = super::load_config(config, profile, "post");
    let store = super::store_for(&cfg);
    let service = MemoService::new(&store, &cfg.memo, &cfg.daily);

    let date = super::resolve_date(&args.date);
    let now = Local::now().naive_local();
    let text = args.text.join(" ");

    let receipt = match service.post(date, now, &text, args.task) {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to post memo: {e}");
            eprintln!("FAIL dmemo post");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("OK   dmemo post");
    println!("note:    {}", store.resolve(&receipt.path).display());
    if receipt.created_note {
        println!("created: yes (daily note did not exist)");
    }

    match receipt.branch {
        InsertBranch::AppendedToEnd => println!("section: (end of file)"),
        InsertBranch::CreatedSection => {
            println!("section: {} (created)", cfg.memo.section);
        }
        InsertBranch::AppendedBlock => println!("section: {}", cfg.memo.section),
        InsertBranch::MergedList => println!("section: {} (list)", cfg.memo.section),
    }

    // Show what the note already has when the configured heading was not among it
    if receipt.branch == InsertBranch::CreatedSection {
        if let Ok(content) = store.read(&receipt.path) {
            let others: Vec<String> = MarkdownEditor::find_headings(&content)
                .iter()
                .map(|h| build_heading_line(h.level, &h.title))
                .filter(|line| *line != cfg.memo.section)
                .collect();
            if !others.is_empty() {
                println!("hint:    existing headings: {}", others.join(", "));
            }
        }
    }
}

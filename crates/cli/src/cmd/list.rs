use std::path::Path;

use daymemo_core::memo::{MemoService, Post, TimestampFormat};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};
use tracing::error;

use crate::ListArgs;

/// Memo for JSON output.
#[derive(Serialize)]
struct PostOutput {
    timestamp: String,
    message: String,
    offset: usize,
}

/// Row for the memo table.
#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Memo")]
    message: String,
    #[tabled(rename = "Offset")]
    offset: usize,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ListArgs) {
    let cfg = super::load_config(config, profile, "list");
    let store = super::store_for(&cfg);
    let service = MemoService::new(&store, &cfg.memo, &cfg.daily);
    let date = super::resolve_date(&args.date);
    let ts_format = &cfg.memo.timestamp_format;

    let posts = match service.posts(date) {
        Ok(p) => p.unwrap_or_default(),
        Err(e) => {
            error!("Failed to read memos: {e}");
            eprintln!("FAIL dmemo list");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if args.json {
        let out: Vec<PostOutput> = posts
            .iter()
            .map(|p| PostOutput {
                timestamp: ts_format.render(p.timestamp),
                message: p.message.clone(),
                offset: p.offset,
            })
            .collect();
        match serde_json::to_string_pretty(&out) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize memos: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if posts.is_empty() {
        println!("(no memos for {date})");
        return;
    }

    let rows: Vec<PostRow> = posts.iter().map(|p| post_to_row(p, ts_format)).collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
}

fn post_to_row(post: &Post, ts_format: &TimestampFormat) -> PostRow {
    PostRow {
        time: ts_format.render(post.timestamp),
        message: truncate(&post.message.replace('\n', " "), 60),
        offset: post.offset,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("つぶやきつぶやき", 5), "つぶ...");
    }
}

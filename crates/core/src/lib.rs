#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod daily;
pub mod markdown_ast;
pub mod memo;
pub mod store;

pub use markdown_ast::{HeadingSpec, build_heading_line, parse_heading_spec};
pub use memo::{Entry, MemoService, PostFormat, TimestampFormat};

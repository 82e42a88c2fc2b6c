use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use super::extract;
use super::format::{TimestampFormat, effective_post_format, to_text};
use super::insert::{InsertBranch, apply_plan, plan_insertion};
use super::types::{Entry, MemoSettings, Post, PostFormat, PostReceipt, Task};
use super::{MemoError, MemoResult};
use crate::daily::DailyNotes;
use crate::markdown_ast::parse_heading_spec;
use crate::store::NoteStore;

/// Memo operations on the daily notes of one vault.
///
/// Every mutating call reads the note fresh, computes the new text, then
/// writes once. Nothing is cached between calls.
pub struct MemoService<'a, S: NoteStore + ?Sized> {
    store: &'a S,
    settings: &'a MemoSettings,
    daily: &'a DailyNotes,
}

impl<'a, S: NoteStore + ?Sized> MemoService<'a, S> {
    pub fn new(store: &'a S, settings: &'a MemoSettings, daily: &'a DailyNotes) -> Self {
        Self { store, settings, daily }
    }

    /// Insert `text` under the section addressed by `spec`.
    ///
    /// A malformed or empty `spec` appends to the end of the note without
    /// reading it.
    pub fn insert_under_section(
        &self,
        path: &Path,
        spec: &str,
        text: &str,
        format: &PostFormat,
        end_delimiter: &str,
    ) -> MemoResult<InsertBranch> {
        if parse_heading_spec(spec).is_none() {
            self.insert_text_to_end(path, text)?;
            return Ok(InsertBranch::AppendedToEnd);
        }

        let content = self.store.read(path)?;
        let outline = self.store.outline(path, &content)?;
        let plan = plan_insertion(&content, &outline, spec, text, format, end_delimiter);
        apply_plan(self.store, path, &plan)?;

        Ok(plan.branch)
    }

    pub fn insert_text_to_end(&self, path: &Path, text: &str) -> MemoResult<()> {
        self.store.append(path, text)?;
        Ok(())
    }

    /// List entries of a section, `None` when the section is not addressable.
    pub fn extract_entries(
        &self,
        path: &Path,
        spec: &str,
        end_delimiter: &str,
        timestamp_format: &TimestampFormat,
    ) -> MemoResult<Option<Vec<Entry>>> {
        let content = self.store.read(path)?;
        let outline = self.store.outline(path, &content)?;
        Ok(extract::extract_list_entries(
            &content,
            &outline,
            spec,
            end_delimiter,
            timestamp_format.width(),
        ))
    }

    /// The configured post format adjusted for the configured section.
    pub fn effective_format(&self) -> PostFormat {
        effective_post_format(
            self.settings.post_format,
            &self.settings.section,
            self.settings.auto_demote_heading,
        )
    }

    /// Post a memo (or a task) to the daily note of `date`, stamped `now`.
    ///
    /// Creates the daily note when it does not exist yet.
    pub fn post(
        &self,
        date: NaiveDate,
        now: NaiveDateTime,
        input: &str,
        as_task: bool,
    ) -> MemoResult<PostReceipt> {
        if input.trim().is_empty() {
            return Err(MemoError::EmptyPost);
        }

        let format = self.effective_format();
        let timestamp = self.settings.timestamp_format.render(now);
        let text = to_text(input, as_task, &format, &timestamp);

        let created_note = self.daily.ensure(self.store, date)?;
        let path = self.daily.path_for(date);

        let section = self.settings.section.trim();
        let branch = if section.is_empty() {
            self.insert_text_to_end(&path, &text)?;
            InsertBranch::AppendedToEnd
        } else {
            self.insert_under_section(&path, section, &text, &format, &self.settings.section_end)?
        };

        info!(path = %path.display(), branch = ?branch, format = %format, "posted memo");
        Ok(PostReceipt { path, branch, created_note })
    }

    /// Memos of the daily note for `date`, newest first.
    ///
    /// Entries whose timestamp does not parse with the configured format are
    /// skipped. `None` when the note does not exist or its section cannot be
    /// found.
    pub fn posts(&self, date: NaiveDate) -> MemoResult<Option<Vec<Post>>> {
        let path = self.daily.path_for(date);
        if !self.store.exists(&path) {
            return Ok(None);
        }

        let content = self.store.read(&path)?;
        let outline = self.store.outline(&path, &content)?;
        let ts_format = &self.settings.timestamp_format;

        let Some(entries) = extract::extract_entries(
            &content,
            &outline,
            &self.settings.section,
            &self.settings.section_end,
            &self.effective_format(),
            ts_format,
        ) else {
            debug!(path = %path.display(), "memo section not found");
            return Ok(None);
        };

        let mut posts: Vec<Post> = entries
            .into_iter()
            .filter_map(|e| {
                let timestamp = ts_format.parse(&e.timestamp, date)?;
                Some(Post { timestamp, message: e.message, offset: e.offset })
            })
            .collect();
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(Some(posts))
    }

    /// Checkbox items of the daily note for `date`, `None` without a note.
    pub fn tasks(&self, date: NaiveDate) -> MemoResult<Option<Vec<Task>>> {
        let path = self.daily.path_for(date);
        if !self.store.exists(&path) {
            return Ok(None);
        }

        let content = self.store.read(&path)?;
        let outline = self.store.outline(&path, &content)?;
        Ok(Some(extract::extract_tasks(&content, &outline)))
    }

    /// Set the checkbox of the task at `offset` in the note for `date`.
    pub fn set_check_mark(&self, date: NaiveDate, mark: char, offset: usize) -> MemoResult<()> {
        let path = self.daily.path_for(date);
        let content = self.store.read(&path)?;
        let updated = extract::set_check_mark(&content, mark, offset)
            .ok_or(MemoError::NoCheckbox(offset))?;
        self.store.write(&path, &updated)?;
        Ok(())
    }
}

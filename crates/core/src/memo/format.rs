//! Memo serialization: timestamp formats, post formats and entry text.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::format::{self as strftime, Parsed, StrftimeItems};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use super::types::PostFormat;
use crate::markdown_ast::{build_heading_line, parse_heading_spec};

/// Info-string language that marks a code block as a memo.
pub const MEMO_CODE_LANG: &str = "fw";

const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid date/time format '{0}'")]
    InvalidStrftime(String),

    #[error("unknown post format '{0}' (expected codeblock, list or header:<1-6>)")]
    UnknownPostFormat(String),

    #[error("header level {0} is out of range (expected 1-6)")]
    InvalidHeaderLevel(u8),
}

/// Check that a chrono strftime string renders from a date and time.
pub(crate) fn validate_strftime(fmt: &str) -> Result<(), FormatError> {
    check_rendering(fmt, |out| write!(out, "{}", NaiveDateTime::default().format(fmt)))
}

/// Check that a chrono strftime string renders from a date alone.
///
/// Time fields such as `%H` fail here, since a date has none to render.
pub(crate) fn validate_date_strftime(fmt: &str) -> Result<(), FormatError> {
    check_rendering(fmt, |out| write!(out, "{}", NaiveDate::default().format(fmt)))
}

fn check_rendering(
    fmt: &str,
    render: impl FnOnce(&mut String) -> fmt::Result,
) -> Result<(), FormatError> {
    let mut rendered = String::new();
    if fmt.trim().is_empty() || render(&mut rendered).is_err() {
        return Err(FormatError::InvalidStrftime(fmt.to_string()));
    }
    Ok(())
}

/// A validated chrono strftime pattern used to stamp memos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat(String);

impl TimestampFormat {
    pub fn new(fmt: impl Into<String>) -> Result<Self, FormatError> {
        let fmt = fmt.into();
        validate_strftime(&fmt)?;
        Ok(Self(fmt))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, at: NaiveDateTime) -> String {
        at.format(&self.0).to_string()
    }

    /// Character length of a rendered timestamp.
    ///
    /// Measured on the Unix epoch; patterns with variable-width fields
    /// (month names, unpadded numbers) only match that width.
    pub fn width(&self) -> usize {
        self.render(NaiveDateTime::default()).chars().count()
    }

    /// Parse a rendered timestamp back.
    ///
    /// Date fields the pattern leaves out (all of them for `%H:%M`, month
    /// and day for `%Y`) are taken from `date`, the day of the note. A
    /// missing time resolves to midnight. Returns `None` when the text does
    /// not match the pattern.
    pub fn parse(&self, s: &str, date: NaiveDate) -> Option<NaiveDateTime> {
        let mut parsed = Parsed::new();
        strftime::parse(&mut parsed, s, StrftimeItems::new(&self.0)).ok()?;

        if parsed.year().is_none() && parsed.year_mod_100().is_none() && parsed.isoyear().is_none()
        {
            parsed.set_year(i64::from(date.year())).ok()?;
        }

        let week_based = parsed.ordinal().is_some()
            || parsed.isoweek().is_some()
            || parsed.week_from_sun().is_some()
            || parsed.week_from_mon().is_some();
        if !week_based {
            if parsed.month().is_none() {
                parsed.set_month(i64::from(date.month())).ok()?;
            }
            if parsed.day().is_none() {
                parsed.set_day(i64::from(date.day())).ok()?;
            }
        }

        let day = parsed.to_naive_date().ok()?;
        let time = parsed.to_naive_time().unwrap_or(NaiveTime::MIN);
        Some(day.and_time(time))
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self(DEFAULT_TIMESTAMP_FORMAT.to_string())
    }
}

impl FromStr for TimestampFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PostFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || FormatError::UnknownPostFormat(s.to_string());
        match s.trim().to_lowercase().as_str() {
            "codeblock" => Ok(Self::Codeblock),
            "list" => Ok(Self::List),
            other => {
                let level = other
                    .strip_prefix("header:")
                    .and_then(|l| l.parse::<u8>().ok())
                    .filter(|l| (1..=6).contains(l))
                    .ok_or_else(unknown)?;
                Ok(Self::Header { level })
            }
        }
    }
}

impl PostFormat {
    /// Reject header levels that cannot be written as an ATX heading.
    pub fn validate(self) -> Result<Self, FormatError> {
        match self {
            Self::Header { level } if !(1..=6).contains(&level) => {
                Err(FormatError::InvalidHeaderLevel(level))
            }
            _ => Ok(self),
        }
    }
}

impl fmt::Display for PostFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codeblock => f.write_str("codeblock"),
            Self::List => f.write_str("list"),
            Self::Header { level } => write!(f, "header:{level}"),
        }
    }
}

/// Render a memo as the text block inserted into the note.
///
/// Every variant starts and ends with a newline; tasks ignore the format.
pub fn to_text(input: &str, as_task: bool, format: &PostFormat, timestamp: &str) -> String {
    if as_task {
        return format!("\n- [ ] {input}\n");
    }

    match format {
        PostFormat::Codeblock => {
            format!("\n````{MEMO_CODE_LANG} {timestamp}\n{input}\n````\n")
        }
        PostFormat::List => format!("\n- {timestamp} {input}\n"),
        PostFormat::Header { level } => {
            format!("\n{}\n\n{input}\n", build_heading_line(*level, timestamp))
        }
    }
}

/// The post format actually used for a target section.
///
/// With auto-demotion, header posts sit at least one level below the
/// section heading (capped at 6) so they stay inside the section.
pub fn effective_post_format(format: PostFormat, section: &str, auto_demote: bool) -> PostFormat {
    match (format, parse_heading_spec(section)) {
        (PostFormat::Header { level }, Some(spec)) if auto_demote => {
            PostFormat::Header { level: level.max(spec.level + 1).min(6) }
        }
        _ => format,
    }
}

use crate::{book::BookEntry, errors::BookResult};
use time::{OffsetDateTime, macros::format_description};

pub(crate) const SEPARATOR: &str = "-------------------";

pub(crate) fn file_name(entry: &BookEntry) -> String {
    format!("feedback_{}.txt", entry.sanitized_title())
}

pub(crate) struct FeedbackRecord<'a> {
    pub title: &'a str,
    pub written_at: OffsetDateTime,
    pub text: &'a str,
}

impl FeedbackRecord<'_> {
    pub(crate) fn render(&self) -> BookResult<String> {
        let timestamp = self
            .written_at
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))?;
        Ok(format!(
            "도서명: {}\n작성일시: {}\n피드백 내용:\n{}\n{SEPARATOR}\n",
            self.title, timestamp, self.text
        ))
    }
}

/// Local wall clock time, falling back to UTC when the offset can't be determined.
pub(crate) fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

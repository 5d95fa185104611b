mod feedback;
mod html;
mod qr;

use crate::{book::BookEntry, config::BookCurationConfig, errors::BookResult};
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};
use time::OffsetDateTime;
use tracing::{Level, event};

pub(crate) use feedback::now;

/// QR image as written to disk and read back for the preview.
pub(crate) struct QrArtifact {
    pub path: PathBuf,
    pub png: Vec<u8>,
}

/// Turns a [`BookEntry`] into the three output files. Every check runs before
/// anything touches the filesystem.
pub(crate) struct Curator {
    output_dir: PathBuf,
    escape_html: bool,
}

impl Curator {
    pub(crate) fn new(output_dir: impl Into<PathBuf>, escape_html: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            escape_html,
        }
    }
    pub(crate) fn from_config(config: &BookCurationConfig) -> Self {
        Self::new(config.output_dir(), config.escape_html)
    }
    fn path(&self, file_name: String) -> PathBuf {
        self.output_dir.join(file_name)
    }
    pub(crate) fn generate_html(&self, entry: &BookEntry) -> BookResult<PathBuf> {
        entry.check_page_fields()?;
        let path = self.path(html::file_name(entry));
        std::fs::write(&path, html::render_page(entry, self.escape_html))?;
        event!(Level::INFO, path = %path.display(), "html written");
        Ok(path)
    }
    pub(crate) fn generate_qr(&self, entry: &BookEntry) -> BookResult<QrArtifact> {
        entry.check_url()?;
        let path = self.path(qr::file_name(entry));
        qr::render(&entry.url)?.save(&path)?;
        event!(Level::INFO, path = %path.display(), "qr code written");
        let png = std::fs::read(&path)?;
        Ok(QrArtifact { path, png })
    }
    /// Appends one record. Empty text is a no-op and returns `None`.
    pub(crate) fn save_feedback(
        &self,
        entry: &BookEntry,
        text: &str,
        written_at: OffsetDateTime,
    ) -> BookResult<Option<PathBuf>> {
        if text.is_empty() {
            event!(Level::INFO, "empty feedback skipped");
            return Ok(None);
        }
        let record = feedback::FeedbackRecord {
            title: &entry.title,
            written_at,
            text,
        }
        .render()?;
        let path = self.path(feedback::file_name(entry));
        append(&path, &record)?;
        event!(Level::INFO, path = %path.display(), "feedback appended");
        Ok(Some(path))
    }
}

fn append(path: &Path, content: &str) -> BookResult<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

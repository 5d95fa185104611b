use crate::errors::ValidationError;

/// Snapshot of the four form fields taken when an action is triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BookEntry {
    pub title: String,
    pub author: String,
    pub url: String,
    pub review: String,
}

impl BookEntry {
    pub(crate) fn sanitized_title(&self) -> String {
        sanitize_title(&self.title)
    }
    /// Title, author and review must all be present before a page is rendered.
    pub(crate) fn check_page_fields(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() || self.author.is_empty() || self.review.is_empty() {
            return Err(ValidationError::MissingBookFields);
        }
        Ok(())
    }
    pub(crate) fn check_url(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        Ok(())
    }
}

/// Filename key for a title: every space becomes an underscore, nothing else changes.
pub(crate) fn sanitize_title(title: &str) -> String {
    title.replace(' ', "_")
}

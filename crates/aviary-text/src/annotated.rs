//! URLs carrying optional annotation metadata.
//!
//! Link runs in styled text point at an [`AnnotatedUrl`]: a parsed URL plus
//! an optional free-text annotation. The annotation gives link handlers
//! extra context that the URL alone cannot carry (for a mention it might
//! hold the account handle, for a hashtag the bare tag name) so a handler
//! can resolve the link locally instead of round-tripping through a
//! browser.

use std::fmt;

use url::Url;

/// Error produced when parsing an [`AnnotatedUrl`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotatedUrlError {
    /// The string was not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A URL with an optional free-text annotation.
///
/// Both parts are immutable after construction. Equality considers the URL
/// and the annotation, so the same URL annotated differently compares
/// unequal.
///
/// # Example
///
/// ```
/// use aviary_text::AnnotatedUrl;
///
/// let mention = AnnotatedUrl::parse("https://example.social/@gargron")
///     .unwrap()
///     .with_annotation("@gargron@example.social");
///
/// assert_eq!(mention.annotation(), Some("@gargron@example.social"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotatedUrl {
    url: Url,
    annotation: Option<String>,
}

impl AnnotatedUrl {
    /// Wrap an already-parsed URL with no annotation.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            annotation: None,
        }
    }

    /// Parse a URL string.
    pub fn parse(input: &str) -> Result<Self, AnnotatedUrlError> {
        Ok(Self::new(Url::parse(input)?))
    }

    /// Return a copy carrying the given annotation.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// The wrapped URL.
    #[inline]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The annotation, if any.
    #[inline]
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// The URL as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl From<Url> for AnnotatedUrl {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

impl fmt::Display for AnnotatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.url.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let url = AnnotatedUrl::parse("https://example.com/path").unwrap();
        assert_eq!(url.as_str(), "https://example.com/path");
        assert_eq!(url.annotation(), None);
    }

    #[test]
    fn test_parse_invalid() {
        let err = AnnotatedUrl::parse("not a url").unwrap_err();
        assert!(matches!(err, AnnotatedUrlError::InvalidUrl(_)));
    }

    #[test]
    fn test_annotation() {
        let url = AnnotatedUrl::parse("https://example.com/tags/rustlang")
            .unwrap()
            .with_annotation("rustlang");
        assert_eq!(url.annotation(), Some("rustlang"));
    }

    #[test]
    fn test_annotation_affects_equality() {
        let plain = AnnotatedUrl::parse("https://example.com").unwrap();
        let annotated = plain.clone().with_annotation("home");
        assert_ne!(plain, annotated);
        assert_eq!(plain.url(), annotated.url());
    }
}

//! Styled text: owned attribute runs and pure transform operations.
//!
//! [`StyledText`] is an ordered sequence of [`StyledRun`]s, each pairing a
//! text fragment with its display attributes. Runs are contiguous and
//! non-overlapping; the plain string is always exactly the concatenation of
//! the run texts.
//!
//! All transforms are pure: they derive a new `StyledText` and never mutate
//! the receiver. The emphasis pair ([`applying_emphasized_foreground`] and
//! [`restoring_from_emphasized_foreground`]) is exactly reversible because
//! each run records its pre-emphasis foreground in an explicit
//! [`prior_foreground`] field rather than losing it to the substitution.
//!
//! [`applying_emphasized_foreground`]: StyledText::applying_emphasized_foreground
//! [`restoring_from_emphasized_foreground`]: StyledText::restoring_from_emphasized_foreground
//! [`prior_foreground`]: RunAttributes::prior_foreground

use std::ops::Range;

use crate::annotated::AnnotatedUrl;
use crate::attachment::{Attachment, OBJECT_REPLACEMENT};
use crate::color::Color;

/// A run's foreground color as it was before emphasis was applied.
///
/// `Inherited` records that the run had no explicit foreground and was
/// drawing in the context's default color; restoring such a run clears the
/// foreground again instead of pinning it to any concrete color. The outer
/// `Option` on [`RunAttributes::prior_foreground`] distinguishes "never
/// emphasized" (restore is a no-op) from "emphasized while inheriting".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriorForeground {
    /// The run had this explicit foreground color.
    Color(Color),
    /// The run inherited the default foreground.
    Inherited,
}

/// Display attributes attached to a single run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunAttributes {
    /// Explicit foreground color, if any.
    pub foreground: Option<Color>,
    /// Foreground recorded by the emphasis transform, pending restore.
    pub prior_foreground: Option<PriorForeground>,
    /// Explicit background color, if any.
    pub background: Option<Color>,
    /// Whether the run is bold.
    pub bold: bool,
    /// Whether the run is italic.
    pub italic: bool,
    /// Whether the run is underlined.
    pub underline: bool,
    /// Whether the run is struck through.
    pub strikethrough: bool,
    /// Link target, making this run part of a clickable range.
    pub link: Option<AnnotatedUrl>,
    /// Inline attachment occupying this run.
    pub attachment: Option<Attachment>,
}

/// A text fragment with uniform attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    /// The text content of this run.
    pub text: String,
    /// The attributes applied to the whole run.
    pub attrs: RunAttributes,
}

impl StyledRun {
    /// Create a run with plain text and default attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attrs: RunAttributes::default(),
        }
    }

    /// Create a run holding an inline attachment.
    ///
    /// The run's text is the object replacement character, so attachment
    /// runs occupy a well-defined range in the plain string.
    pub fn attachment(attachment: Attachment) -> Self {
        let mut run = Self::new(OBJECT_REPLACEMENT);
        run.attrs.attachment = Some(attachment);
        run
    }

    /// Set the foreground color using builder pattern.
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.attrs.foreground = Some(color);
        self
    }

    /// Set the background color using builder pattern.
    pub fn with_background(mut self, color: Color) -> Self {
        self.attrs.background = Some(color);
        self
    }

    /// Set the link target using builder pattern.
    pub fn with_link(mut self, link: AnnotatedUrl) -> Self {
        self.attrs.link = Some(link);
        self
    }

    /// Make the run bold using builder pattern.
    pub fn bold(mut self) -> Self {
        self.attrs.bold = true;
        self
    }

    /// Make the run italic using builder pattern.
    pub fn italic(mut self) -> Self {
        self.attrs.italic = true;
        self
    }

    /// Underline the run using builder pattern.
    pub fn underlined(mut self) -> Self {
        self.attrs.underline = true;
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// An attribute overlay used by [`StyledText::applying_attributes`].
///
/// Every field is optional; `None` means "leave the run's value as-is",
/// `Some` means "replace it". This gives the overlay precedence on key
/// conflicts without disturbing unrelated attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAttributes {
    foreground: Option<Color>,
    background: Option<Color>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    strikethrough: Option<bool>,
    link: Option<AnnotatedUrl>,
}

impl TextAttributes {
    /// Create an empty overlay that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay the foreground color.
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Overlay the background color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Overlay the bold flag.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Overlay the italic flag.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Overlay the underline flag.
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Overlay the strikethrough flag.
    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    /// Overlay the link target.
    pub fn link(mut self, link: AnnotatedUrl) -> Self {
        self.link = Some(link);
        self
    }

    /// Check if the overlay changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply this overlay to a run's attributes in place.
    fn patch(&self, attrs: &mut RunAttributes) {
        if let Some(color) = self.foreground {
            attrs.foreground = Some(color);
        }
        if let Some(color) = self.background {
            attrs.background = Some(color);
        }
        if let Some(bold) = self.bold {
            attrs.bold = bold;
        }
        if let Some(italic) = self.italic {
            attrs.italic = italic;
        }
        if let Some(underline) = self.underline {
            attrs.underline = underline;
        }
        if let Some(strikethrough) = self.strikethrough {
            attrs.strikethrough = strikethrough;
        }
        if let Some(ref link) = self.link {
            attrs.link = Some(link.clone());
        }
    }
}

/// Styled text content: an ordered sequence of attribute runs.
///
/// `StyledText` owns its content. Transforms return new values; a label
/// replacing its text never aliases the previous value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    /// The runs that make up this text.
    runs: Vec<StyledRun>,
}

impl StyledText {
    /// Create empty styled text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create styled text from a plain string (single unattributed run).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![StyledRun::new(text)],
        }
    }

    /// Get the runs in this text.
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Get the plain text content (without attributes).
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Total length of the plain text in bytes.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.text.len()).sum()
    }

    /// Check if this text is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.is_empty())
    }

    /// Append a run.
    pub fn push_run(&mut self, run: StyledRun) {
        self.runs.push(run);
    }

    /// Append unattributed text.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.runs.push(StyledRun::new(text));
    }

    /// Append a run using builder pattern.
    pub fn with_run(mut self, run: StyledRun) -> Self {
        self.runs.push(run);
        self
    }

    // =========================================================================
    // Transforms
    // =========================================================================

    /// Derive a new text with `overlay` applied to every run.
    ///
    /// Overlay fields take precedence over existing run attributes;
    /// attributes the overlay does not mention are preserved unchanged.
    pub fn applying_attributes(&self, overlay: &TextAttributes) -> Self {
        let mut result = self.clone();
        for run in &mut result.runs {
            overlay.patch(&mut run.attrs);
        }
        result
    }

    /// Derive a new text with `overlay` applied to link runs only.
    ///
    /// Runs without a link target are preserved unchanged. Labels use this
    /// to impose a uniform link style without touching surrounding text.
    pub fn applying_attributes_to_links(&self, overlay: &TextAttributes) -> Self {
        let mut result = self.clone();
        for run in &mut result.runs {
            if run.attrs.link.is_some() {
                overlay.patch(&mut run.attrs);
            }
        }
        result
    }

    /// Derive a new text with every run's foreground replaced by `color`,
    /// recording the prior foreground so the substitution is reversible.
    ///
    /// The recording happens at most once per run: re-emphasizing text that
    /// is already emphasized changes the displayed color but never
    /// overwrites the recorded original, so a single
    /// [`restoring_from_emphasized_foreground`](Self::restoring_from_emphasized_foreground)
    /// still recovers the true pre-emphasis colors.
    pub fn applying_emphasized_foreground(&self, color: Color) -> Self {
        let mut result = self.clone();
        for run in &mut result.runs {
            if run.attrs.prior_foreground.is_none() {
                run.attrs.prior_foreground = Some(match run.attrs.foreground {
                    Some(original) => PriorForeground::Color(original),
                    None => PriorForeground::Inherited,
                });
            }
            run.attrs.foreground = Some(color);
        }
        result
    }

    /// Derive a new text with every run's foreground restored to the value
    /// recorded by [`applying_emphasized_foreground`](Self::applying_emphasized_foreground).
    ///
    /// Runs that were never emphasized are left untouched, so calling this
    /// on unemphasized text returns an equivalent copy.
    pub fn restoring_from_emphasized_foreground(&self) -> Self {
        let mut result = self.clone();
        for run in &mut result.runs {
            match run.attrs.prior_foreground.take() {
                Some(PriorForeground::Color(original)) => {
                    run.attrs.foreground = Some(original);
                }
                Some(PriorForeground::Inherited) => {
                    run.attrs.foreground = None;
                }
                None => {}
            }
        }
        result
    }

    /// Enumerate inline attachments in left-to-right order.
    ///
    /// Yields each attachment with the byte range it occupies in the plain
    /// string. The iterator re-scans on every call, so enumeration is
    /// restartable and independent of prior iterations. Text without
    /// attachments yields nothing.
    pub fn attachments(&self) -> impl Iterator<Item = (Attachment, Range<usize>)> + '_ {
        let mut offset = 0usize;
        self.runs.iter().filter_map(move |run| {
            let start = offset;
            offset += run.text.len();
            run.attrs
                .attachment
                .map(|attachment| (attachment, start..start + run.text.len()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_link() -> AnnotatedUrl {
        AnnotatedUrl::parse("https://example.com").unwrap()
    }

    fn mixed_text() -> StyledText {
        StyledText::new()
            .with_run(StyledRun::new("plain "))
            .with_run(StyledRun::new("red").with_foreground(Color::from_rgb8(255, 0, 0)))
            .with_run(StyledRun::new(" and a ").italic())
            .with_run(StyledRun::new("link").with_link(sample_link()).underlined())
    }

    #[test]
    fn test_plain_text_concatenation() {
        let text = mixed_text();
        assert_eq!(text.plain_text(), "plain red and a link");
        assert_eq!(text.len(), "plain red and a link".len());
    }

    #[test]
    fn test_empty_text() {
        assert!(StyledText::new().is_empty());
        assert!(StyledText::plain("").is_empty());
        assert!(!StyledText::plain("x").is_empty());
    }

    #[test]
    fn test_applying_attributes_overrides_and_preserves() {
        let text = mixed_text();
        let overlay = TextAttributes::new()
            .foreground(Color::BLACK)
            .bold(true);
        let styled = text.applying_attributes(&overlay);

        for run in styled.runs() {
            assert_eq!(run.attrs.foreground, Some(Color::BLACK));
            assert!(run.attrs.bold);
        }
        // Unmentioned attributes survive
        assert!(styled.runs()[2].attrs.italic);
        assert!(styled.runs()[3].attrs.underline);
        assert_eq!(styled.runs()[3].attrs.link, Some(sample_link()));
        // The receiver is untouched
        assert_eq!(text.runs()[0].attrs.foreground, None);
    }

    #[test]
    fn test_applying_attributes_to_links_only() {
        let text = mixed_text();
        let overlay = TextAttributes::new().foreground(Color::LINK).underline(true);
        let styled = text.applying_attributes_to_links(&overlay);

        assert_eq!(styled.runs()[0].attrs.foreground, None);
        assert_eq!(
            styled.runs()[1].attrs.foreground,
            Some(Color::from_rgb8(255, 0, 0))
        );
        assert_eq!(styled.runs()[3].attrs.foreground, Some(Color::LINK));
    }

    #[test]
    fn test_emphasize_restore_round_trip() {
        let text = mixed_text();
        let emphasized = text.applying_emphasized_foreground(Color::WHITE);

        for run in emphasized.runs() {
            assert_eq!(run.attrs.foreground, Some(Color::WHITE));
        }

        let restored = emphasized.restoring_from_emphasized_foreground();
        assert_eq!(restored, text);
    }

    #[test]
    fn test_double_emphasis_keeps_original_colors() {
        // Re-emphasizing must not overwrite the recorded originals.
        let text = mixed_text();
        let twice = text
            .applying_emphasized_foreground(Color::WHITE)
            .applying_emphasized_foreground(Color::SECONDARY_LABEL);

        let restored = twice.restoring_from_emphasized_foreground();
        assert_eq!(restored, text);
    }

    #[test]
    fn test_restore_without_emphasis_is_noop() {
        let text = mixed_text();
        let restored = text.restoring_from_emphasized_foreground();
        assert_eq!(restored, text);
    }

    #[test]
    fn test_emphasize_inherited_foreground_restores_to_inherited() {
        let text = StyledText::plain("no explicit color");
        let restored = text
            .applying_emphasized_foreground(Color::WHITE)
            .restoring_from_emphasized_foreground();
        assert_eq!(restored.runs()[0].attrs.foreground, None);
        assert_eq!(restored.runs()[0].attrs.prior_foreground, None);
    }

    #[test]
    fn test_emphasize_empty_text() {
        let empty = StyledText::new();
        let emphasized = empty.applying_emphasized_foreground(Color::WHITE);
        assert!(emphasized.is_empty());
    }

    #[test]
    fn test_attachments_empty() {
        let text = mixed_text();
        assert_eq!(text.attachments().count(), 0);
    }

    #[test]
    fn test_attachments_in_order() {
        let first = Attachment::new(1, 16.0, 16.0);
        let second = Attachment::new(2, 16.0, 16.0);
        let text = StyledText::new()
            .with_run(StyledRun::new("a"))
            .with_run(StyledRun::attachment(first))
            .with_run(StyledRun::new("bc"))
            .with_run(StyledRun::attachment(second));

        let found: Vec<_> = text.attachments().collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0, first);
        assert_eq!(found[0].1, 1..1 + OBJECT_REPLACEMENT.len());
        assert_eq!(found[1].0, second);
        assert_eq!(
            found[1].1.start,
            1 + OBJECT_REPLACEMENT.len() + 2
        );

        // Restartable: a second pass yields the same sequence.
        let again: Vec<_> = text.attachments().collect();
        assert_eq!(found, again);
    }
}

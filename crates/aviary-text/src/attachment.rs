//! Inline attachments embedded in styled text.
//!
//! An attachment is a non-text object (typically a custom emoji image)
//! occupying a single object-replacement character in the string. The text
//! crate only carries the attachment's identity and display size; decoding
//! and drawing the actual image belongs to the host renderer.

/// The Unicode object replacement character, used as the text content of
/// attachment runs.
pub const OBJECT_REPLACEMENT: &str = "\u{FFFC}";

/// An inline non-text object embedded in styled text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attachment {
    /// Caller-assigned identifier used to look up the actual content.
    pub id: u64,
    /// Display width in logical pixels.
    pub width: f32,
    /// Display height in logical pixels.
    pub height: f32,
}

impl Attachment {
    /// Create a new attachment with the given identity and display size.
    pub fn new(id: u64, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

//! Styled text primitives for Aviary.
//!
//! This crate provides the value types used by the Aviary label widgets:
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`]
//! - **Color**: straight-alpha RGBA [`Color`]
//! - **Styled text**: [`StyledText`], owned attribute runs with pure
//!   transform operations (attribute overlay, emphasis recoloring and its
//!   exact inverse, attachment enumeration)
//! - **Link annotations**: [`AnnotatedUrl`], a URL carrying optional
//!   free-text context
//! - **Hit testing**: [`LineLayout`], fixed-metric glyph positions used to
//!   map pointer coordinates to byte offsets
//!
//! Text shaping and rasterization are deliberately absent: the host
//! renderer owns real layout. [`LineLayout`] exists only so widgets can hit
//! test link ranges with injected [`GlyphMetrics`].
//!
//! # Example
//!
//! ```
//! use aviary_text::{AnnotatedUrl, Color, StyledText, StyledRun};
//!
//! let url = AnnotatedUrl::parse("https://example.com").unwrap();
//! let mut text = StyledText::plain("Visit ");
//! text.push_run(StyledRun::new("example.com").with_link(url));
//!
//! let emphasized = text.applying_emphasized_foreground(Color::WHITE);
//! let restored = emphasized.restoring_from_emphasized_foreground();
//! assert_eq!(text, restored);
//! ```

mod annotated;
mod attachment;
mod color;
mod geometry;
mod layout;
mod styled;

pub use annotated::{AnnotatedUrl, AnnotatedUrlError};
pub use attachment::{Attachment, OBJECT_REPLACEMENT};
pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use layout::{FixedAdvanceMetrics, GlyphMetrics, LineLayout};
pub use styled::{PriorForeground, RunAttributes, StyledRun, StyledText, TextAttributes};

// Re-export the URL type users need to construct resources by hand.
pub use url::Url;

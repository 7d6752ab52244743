//! Aviary widget layer.
//!
//! Label widgets for a desktop social-network client: styled-text labels
//! with a toggleable emphasized foreground and clickable link runs, plus
//! the supporting widget plumbing (base state, events, dispatch, focus,
//! tree searches).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use aviary::widget::widgets::{LinkHandler, LinkLabel};
//! use aviary_text::{AnnotatedUrl, StyledRun, StyledText};
//!
//! struct OpenInBrowser;
//!
//! impl LinkHandler for OpenInBrowser {
//!     fn handle(&self, link: &AnnotatedUrl) {
//!         println!("opening {link}");
//!     }
//! }
//!
//! let mention = AnnotatedUrl::parse("https://example.social/@gargron")
//!     .unwrap()
//!     .with_annotation("@gargron");
//! let text = StyledText::new()
//!     .with_run(StyledRun::new("boosted by "))
//!     .with_run(StyledRun::new("@gargron").with_link(mention));
//!
//! let mut label = LinkLabel::new().with_styled_text(text);
//! label.set_link_handler(Arc::new(OpenInBrowser));
//! assert_eq!(label.link_count(), 1);
//! ```

pub mod widget;

pub use aviary_core::{ConnectionId, Signal};

/// Styled text primitives, re-exported from `aviary-text`.
pub mod text {
    pub use aviary_text::*;
}

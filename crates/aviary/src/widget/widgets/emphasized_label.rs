//! A label whose entire text can be switched to an emphasized color.
//!
//! Emphasis replaces every run's foreground with a single highlight color,
//! typically while the row containing the label is selected. The
//! substitution is exactly reversible: turning emphasis off restores each
//! run's original foreground, including runs that had no explicit color.

use aviary_core::Signal;
use aviary_text::{
    Color, FixedAdvanceMetrics, GlyphMetrics, LineLayout, Size, StyledText,
};
use std::sync::Arc;

use crate::widget::base::WidgetBase;
use crate::widget::traits::{SizeHint, Widget};

/// Default font size for labels, in logical pixels.
pub(crate) const DEFAULT_FONT_SIZE: f32 = 13.0;

/// A styled-text label with a toggleable emphasized foreground.
///
/// `set_emphasized(true)` recolors the whole text with
/// [`emphasized_color`](Self::emphasized_color); `set_emphasized(false)`
/// restores the original colors. Both directions are idempotent, and the
/// plain-text content is unaffected by any toggle history.
///
/// # Example
///
/// ```
/// use aviary::widget::widgets::EmphasizedLabel;
/// use aviary_text::Color;
///
/// let mut label = EmphasizedLabel::new().with_text("Reply from @user");
/// label.set_emphasized(true);
/// assert_eq!(label.displayed_text().plain_text(), "Reply from @user");
/// label.set_emphasized(false);
/// assert_eq!(label.displayed_text(), label.styled_text());
/// ```
pub struct EmphasizedLabel {
    base: WidgetBase,

    /// The content as set by the caller, never emphasized.
    source: StyledText,

    /// The content as currently displayed.
    display: StyledText,

    /// Whether the emphasized foreground is currently applied.
    emphasized: bool,

    /// The foreground used while emphasized.
    emphasized_color: Color,

    /// Font size used for measurement and hit testing.
    font_size: f32,

    /// Metrics used for measurement and hit testing.
    metrics: Arc<dyn GlyphMetrics + Send + Sync>,

    /// Signal emitted when the text content changes.
    pub text_changed: Signal<()>,

    /// Signal emitted when the emphasized state changes.
    pub emphasized_changed: Signal<bool>,
}

impl Default for EmphasizedLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl EmphasizedLabel {
    /// Create an empty label.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            source: StyledText::new(),
            display: StyledText::new(),
            emphasized: false,
            emphasized_color: Color::ALTERNATE_SELECTED_TEXT,
            font_size: DEFAULT_FONT_SIZE,
            metrics: Arc::new(FixedAdvanceMetrics::default()),
            text_changed: Signal::new(),
            emphasized_changed: Signal::new(),
        }
    }

    /// Set plain text content using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_styled_text(StyledText::plain(text));
        self
    }

    /// Set styled text content using builder pattern.
    pub fn with_styled_text(mut self, text: StyledText) -> Self {
        self.set_styled_text(text);
        self
    }

    /// Set the emphasized color using builder pattern.
    pub fn with_emphasized_color(mut self, color: Color) -> Self {
        self.set_emphasized_color(color);
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// The content as set by the caller, without emphasis applied.
    pub fn styled_text(&self) -> &StyledText {
        &self.source
    }

    /// The content as currently displayed, emphasis included.
    pub fn displayed_text(&self) -> &StyledText {
        &self.display
    }

    /// Replace the content with plain text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.set_styled_text(StyledText::plain(text));
    }

    /// Replace the content.
    ///
    /// Emphasis, when active, is re-applied to the new content right away;
    /// the label never shows a mix of old color state and new text.
    pub fn set_styled_text(&mut self, text: StyledText) {
        if self.source == text {
            return;
        }
        self.display = if self.emphasized {
            text.applying_emphasized_foreground(self.emphasized_color)
        } else {
            text.clone()
        };
        self.source = text;
        self.base.update();
        self.text_changed.emit(());
    }

    // =========================================================================
    // Emphasis
    // =========================================================================

    /// Check if the emphasized foreground is currently applied.
    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }

    /// Apply or remove the emphasized foreground.
    ///
    /// Setting the current value again is a no-op.
    pub fn set_emphasized(&mut self, emphasized: bool) {
        if self.emphasized == emphasized {
            return;
        }
        self.emphasized = emphasized;
        self.display = if emphasized {
            self.display.applying_emphasized_foreground(self.emphasized_color)
        } else {
            self.display.restoring_from_emphasized_foreground()
        };
        self.base.update();
        self.emphasized_changed.emit(emphasized);
    }

    /// The foreground used while emphasized.
    pub fn emphasized_color(&self) -> Color {
        self.emphasized_color
    }

    /// Set the foreground used while emphasized.
    ///
    /// Takes effect immediately when the label is currently emphasized.
    pub fn set_emphasized_color(&mut self, color: Color) {
        if self.emphasized_color == color {
            return;
        }
        self.emphasized_color = color;
        if self.emphasized {
            self.display = self
                .display
                .restoring_from_emphasized_foreground()
                .applying_emphasized_foreground(color);
            self.base.update();
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// The font size used for measurement and hit testing.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Set the font size.
    pub fn set_font_size(&mut self, font_size: f32) {
        if self.font_size != font_size {
            self.font_size = font_size;
            self.base.update();
        }
    }

    /// Replace the glyph metrics used for measurement and hit testing.
    ///
    /// Hosts with a real font stack install their own metrics here; the
    /// default is [`FixedAdvanceMetrics`].
    pub fn set_metrics(&mut self, metrics: Arc<dyn GlyphMetrics + Send + Sync>) {
        self.metrics = metrics;
        self.base.update();
    }

    /// Lay out the displayed text at the label's current width.
    pub(crate) fn layout(&self) -> LineLayout {
        let width = self.base.width();
        let max_width = (width > 0.0).then_some(width);
        LineLayout::new(&self.display, self.metrics.as_ref(), self.font_size, max_width)
    }
}

impl Widget for EmphasizedLabel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "EmphasizedLabel"
    }

    fn size_hint(&self) -> SizeHint {
        let layout = LineLayout::new(&self.display, self.metrics.as_ref(), self.font_size, None);
        SizeHint {
            preferred: Size::new(layout.width(), layout.height()),
            minimum: Size::new(0.0, layout.height()),
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

static_assertions::assert_impl_all!(EmphasizedLabel: Send, Sync);

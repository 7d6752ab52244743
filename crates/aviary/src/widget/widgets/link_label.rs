//! A label whose link runs are clickable.
//!
//! `LinkLabel` composes an [`EmphasizedLabel`] and adds link awareness: a
//! registry of the contiguous byte ranges carrying a link target, pointer
//! hit testing against the text layout, and an injected [`LinkHandler`]
//! that receives activated links. Clicks that land outside every link are
//! left unhandled so they fall through to the normal event path.

use std::ops::Range;
use std::sync::Arc;

use aviary_core::Signal;
use aviary_text::{AnnotatedUrl, Color, GlyphMetrics, Point, StyledText, TextAttributes};
use tracing::{debug, trace};

use crate::widget::base::{FocusPolicy, WidgetBase};
use crate::widget::events::{Key, MouseButton, WidgetEvent};
use crate::widget::traits::{SizeHint, Widget};
use crate::widget::widgets::emphasized_label::EmphasizedLabel;

/// Receiver for activated links.
///
/// Handlers are injected with [`LinkLabel::set_link_handler`] and shared
/// between labels; a client typically installs one handler that knows how
/// to open mentions, hashtags, and plain URLs.
pub trait LinkHandler: Send + Sync {
    /// Handle an activated link.
    fn handle(&self, link: &AnnotatedUrl);
}

/// A contiguous byte range of the text sharing one link target.
#[derive(Debug, Clone, PartialEq)]
struct LinkRange {
    range: Range<usize>,
    link: AnnotatedUrl,
}

/// A label with clickable link runs.
///
/// Mouse protocol: a press over a link arms it and is accepted; a release
/// over the same link activates it. A release elsewhere disarms without
/// activating. Keyboard protocol: Enter or Space activates the first link
/// while the label has focus.
///
/// With [`selectable_after_first_click`](Self::set_selectable_after_first_click)
/// enabled, a press on an unfocused label is consumed whole so the click
/// only acquires focus; interaction starts with the next press. Losing
/// focus re-arms that gate.
pub struct LinkLabel {
    label: EmphasizedLabel,

    /// Content before the link styling overlay is applied.
    raw: StyledText,

    /// Styling overlay applied to link runs, when set.
    link_attributes: Option<TextAttributes>,

    /// The injected link receiver. Activation without one is inert.
    handler: Option<Arc<dyn LinkHandler>>,

    /// Link ranges of the current content, in text order.
    links: Vec<LinkRange>,

    /// Index into `links` armed by the last press, if any.
    armed: Option<usize>,

    /// Whether the first click on the unfocused label is consumed for focus.
    selectable_after_first_click: bool,

    /// Signal emitted when a link is activated.
    pub link_activated: Signal<AnnotatedUrl>,
}

impl Default for LinkLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkLabel {
    /// Create an empty link label.
    ///
    /// The label accepts click focus so keyboard activation and the
    /// first-click gate can work.
    pub fn new() -> Self {
        let mut label = EmphasizedLabel::new();
        label.widget_base_mut().set_focus_policy(FocusPolicy::ClickFocus);
        Self {
            label,
            raw: StyledText::new(),
            link_attributes: None,
            handler: None,
            links: Vec::new(),
            armed: None,
            selectable_after_first_click: false,
            link_activated: Signal::new(),
        }
    }

    /// Set styled text content using builder pattern.
    pub fn with_styled_text(mut self, text: StyledText) -> Self {
        self.set_styled_text(text);
        self
    }

    /// Set the link styling overlay using builder pattern.
    pub fn with_link_attributes(mut self, attributes: TextAttributes) -> Self {
        self.set_link_attributes(Some(attributes));
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Replace the content with plain text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.set_styled_text(StyledText::plain(text));
    }

    /// Replace the content and rebuild the link registry.
    pub fn set_styled_text(&mut self, text: StyledText) {
        self.raw = text;
        self.armed = None;
        self.apply_content();
    }

    /// The content as handed to the label, link styling applied.
    pub fn styled_text(&self) -> &StyledText {
        self.label.styled_text()
    }

    /// The content as currently displayed, emphasis included.
    pub fn displayed_text(&self) -> &StyledText {
        self.label.displayed_text()
    }

    /// Signal emitted when the text content changes.
    pub fn text_changed(&self) -> &Signal<()> {
        &self.label.text_changed
    }

    fn apply_content(&mut self) {
        let styled = match &self.link_attributes {
            Some(attributes) => self.raw.applying_attributes_to_links(attributes),
            None => self.raw.clone(),
        };
        self.label.set_styled_text(styled);
        self.rebuild_links();
    }

    /// Rebuild the link registry, merging adjacent runs with equal targets.
    fn rebuild_links(&mut self) {
        self.links.clear();
        let mut offset = 0usize;
        for run in self.label.styled_text().runs() {
            let next = offset + run.text.len();
            if let Some(link) = &run.attrs.link {
                match self.links.last_mut() {
                    Some(last) if last.range.end == offset && last.link == *link => {
                        last.range.end = next;
                    }
                    _ => self.links.push(LinkRange {
                        range: offset..next,
                        link: link.clone(),
                    }),
                }
            }
            offset = next;
        }
    }

    // =========================================================================
    // Link styling
    // =========================================================================

    /// The styling overlay applied to link runs, if any.
    pub fn link_attributes(&self) -> Option<&TextAttributes> {
        self.link_attributes.as_ref()
    }

    /// Set the styling overlay for link runs.
    ///
    /// `None` leaves the source styling in place. The current content is
    /// restyled immediately.
    pub fn set_link_attributes(&mut self, attributes: Option<TextAttributes>) {
        if self.link_attributes == attributes {
            return;
        }
        self.link_attributes = attributes;
        self.apply_content();
    }

    // =========================================================================
    // Link handling
    // =========================================================================

    /// Install the link receiver.
    pub fn set_link_handler(&mut self, handler: Arc<dyn LinkHandler>) {
        self.handler = Some(handler);
    }

    /// Remove the link receiver, making activation inert.
    pub fn clear_link_handler(&mut self) {
        self.handler = None;
    }

    /// Whether the first click on the unfocused label only acquires focus.
    pub fn selectable_after_first_click(&self) -> bool {
        self.selectable_after_first_click
    }

    /// Set whether the first click on the unfocused label only acquires
    /// focus instead of interacting with the text.
    pub fn set_selectable_after_first_click(&mut self, enabled: bool) {
        self.selectable_after_first_click = enabled;
    }

    /// The number of link ranges in the current content.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The link at a byte offset of the plain text, if any.
    pub fn link_at_offset(&self, offset: usize) -> Option<&AnnotatedUrl> {
        self.links
            .iter()
            .find(|l| l.range.contains(&offset))
            .map(|l| &l.link)
    }

    /// The link under a point in widget-local coordinates, if any.
    ///
    /// Out-of-range points simply miss; they are never an error.
    pub fn link_at_point(&self, point: Point) -> Option<&AnnotatedUrl> {
        let index = self.link_index_at_point(point)?;
        Some(&self.links[index].link)
    }

    fn link_index_at_point(&self, point: Point) -> Option<usize> {
        let offset = self.label.layout().byte_offset_at(point)?;
        self.links.iter().position(|l| l.range.contains(&offset))
    }

    /// Activate the link at `index`: invoke the handler and emit
    /// [`link_activated`](Self::link_activated).
    fn activate(&mut self, index: usize) {
        let link = self.links[index].link.clone();
        match &self.handler {
            Some(handler) => {
                debug!(target: "aviary::widget::link", url = %link, "link activated");
                handler.handle(&link);
            }
            None => {
                trace!(target: "aviary::widget::link", url = %link, "link activated with no handler installed");
            }
        }
        self.link_activated.emit(link);
    }

    // =========================================================================
    // Emphasis delegation
    // =========================================================================

    /// Check if the emphasized foreground is currently applied.
    pub fn is_emphasized(&self) -> bool {
        self.label.is_emphasized()
    }

    /// Apply or remove the emphasized foreground.
    pub fn set_emphasized(&mut self, emphasized: bool) {
        self.label.set_emphasized(emphasized);
    }

    /// The foreground used while emphasized.
    pub fn emphasized_color(&self) -> Color {
        self.label.emphasized_color()
    }

    /// Set the foreground used while emphasized.
    pub fn set_emphasized_color(&mut self, color: Color) {
        self.label.set_emphasized_color(color);
    }

    /// Signal emitted when the emphasized state changes.
    pub fn emphasized_changed(&self) -> &Signal<bool> {
        &self.label.emphasized_changed
    }

    // =========================================================================
    // Measurement delegation
    // =========================================================================

    /// The font size used for measurement and hit testing.
    pub fn font_size(&self) -> f32 {
        self.label.font_size()
    }

    /// Set the font size.
    pub fn set_font_size(&mut self, font_size: f32) {
        self.label.set_font_size(font_size);
    }

    /// Replace the glyph metrics used for measurement and hit testing.
    pub fn set_metrics(&mut self, metrics: Arc<dyn GlyphMetrics + Send + Sync>) {
        self.label.set_metrics(metrics);
    }
}

impl Widget for LinkLabel {
    fn widget_base(&self) -> &WidgetBase {
        self.label.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.label.widget_base_mut()
    }

    fn type_name(&self) -> &'static str {
        "LinkLabel"
    }

    fn size_hint(&self) -> SizeHint {
        self.label.size_hint()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(press) if press.button == MouseButton::Left => {
                if self.selectable_after_first_click && !self.widget_base().has_focus() {
                    // First click only acquires focus; consume it whole.
                    press.base.accept();
                    return true;
                }
                if let Some(index) = self.link_index_at_point(press.local_pos) {
                    self.armed = Some(index);
                    press.base.accept();
                    return true;
                }
                false
            }
            WidgetEvent::MouseRelease(release) if release.button == MouseButton::Left => {
                let Some(armed) = self.armed.take() else {
                    return false;
                };
                if self.link_index_at_point(release.local_pos) == Some(armed) {
                    self.activate(armed);
                }
                release.base.accept();
                true
            }
            WidgetEvent::KeyPress(press)
                if matches!(press.key, Key::Enter | Key::Space) && !self.links.is_empty() =>
            {
                press.base.accept();
                self.activate(0);
                true
            }
            WidgetEvent::FocusOut(_) => {
                self.armed = None;
                false
            }
            _ => false,
        }
    }
}

static_assertions::assert_impl_all!(LinkLabel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::events::{KeyPressEvent, KeyboardModifiers, MousePressEvent, MouseReleaseEvent};
    use aviary_text::{Rect, StyledRun};
    use parking_lot::Mutex;

    struct RecordingHandler {
        handled: Mutex<Vec<String>>,
    }

    impl RecordingHandler {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                handled: Mutex::new(Vec::new()),
            })
        }

        fn urls(&self) -> Vec<String> {
            self.handled.lock().clone()
        }
    }

    impl LinkHandler for RecordingHandler {
        fn handle(&self, link: &AnnotatedUrl) {
            self.handled.lock().push(link.as_str().to_string());
        }
    }

    fn link(url: &str) -> AnnotatedUrl {
        AnnotatedUrl::parse(url).unwrap()
    }

    /// "ab<link>cd</link>ef" at font size 10 (5px clusters, 12.5px line).
    fn sample_label() -> LinkLabel {
        let text = StyledText::new()
            .with_run(StyledRun::new("ab"))
            .with_run(StyledRun::new("cd").with_link(link("https://example.com/")))
            .with_run(StyledRun::new("ef"));
        let mut label = LinkLabel::new().with_styled_text(text);
        label.set_font_size(10.0);
        label.set_geometry(Rect::new(0.0, 0.0, 100.0, 20.0));
        label
    }

    fn press(x: f32, y: f32) -> WidgetEvent {
        WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(x, y),
            KeyboardModifiers::NONE,
        ))
    }

    fn release(x: f32, y: f32) -> WidgetEvent {
        WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            Point::new(x, y),
            KeyboardModifiers::NONE,
        ))
    }

    #[test]
    fn test_link_registry_merges_adjacent_runs() {
        let url = link("https://example.com/");
        let text = StyledText::new()
            .with_run(StyledRun::new("see ").with_link(url.clone()))
            .with_run(StyledRun::new("here").with_link(url.clone()).bold())
            .with_run(StyledRun::new(" or ").with_link(link("https://other.example/")));
        let label = LinkLabel::new().with_styled_text(text);
        assert_eq!(label.link_count(), 2);
        assert_eq!(label.link_at_offset(0), Some(&url));
        assert_eq!(label.link_at_offset(7), Some(&url));
        assert_eq!(label.link_at_offset(8).unwrap().as_str(), "https://other.example/");
        assert_eq!(label.link_at_offset(12), None);
    }

    #[test]
    fn test_hit_inside_link_invokes_handler() {
        let mut label = sample_label();
        let handler = RecordingHandler::new();
        label.set_link_handler(handler.clone());

        // "cd" occupies bytes 2..4, x range 10..20.
        assert!(deliver(&mut label, &mut press(12.0, 5.0)));
        assert!(deliver(&mut label, &mut release(17.0, 5.0)));
        assert_eq!(handler.urls(), vec!["https://example.com/".to_string()]);
    }

    #[test]
    fn test_hit_outside_link_does_nothing() {
        let mut label = sample_label();
        let handler = RecordingHandler::new();
        label.set_link_handler(handler.clone());

        // Press over "ab" falls through unhandled.
        assert!(!deliver(&mut label, &mut press(2.0, 5.0)));
        assert!(!deliver(&mut label, &mut release(2.0, 5.0)));
        assert!(handler.urls().is_empty());
    }

    #[test]
    fn test_release_off_link_disarms() {
        let mut label = sample_label();
        let handler = RecordingHandler::new();
        label.set_link_handler(handler.clone());

        assert!(deliver(&mut label, &mut press(12.0, 5.0)));
        // Release over "ef": armed link not activated, event still consumed.
        assert!(deliver(&mut label, &mut release(27.0, 5.0)));
        assert!(handler.urls().is_empty());
        // A later release without a press does nothing.
        assert!(!deliver(&mut label, &mut release(12.0, 5.0)));
    }

    #[test]
    fn test_activation_without_handler_is_inert() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mut label = sample_label();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        label.link_activated.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(deliver(&mut label, &mut press(12.0, 5.0)));
        assert!(deliver(&mut label, &mut release(12.0, 5.0)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_keyboard_activates_first_link() {
        let mut label = sample_label();
        let handler = RecordingHandler::new();
        label.set_link_handler(handler.clone());

        let mut enter =
            WidgetEvent::KeyPress(KeyPressEvent::new(Key::Enter, KeyboardModifiers::NONE, ""));
        assert!(deliver(&mut label, &mut enter));
        assert_eq!(handler.urls(), vec!["https://example.com/".to_string()]);
    }

    #[test]
    fn test_link_attributes_overlay() {
        let mut label = sample_label();
        label.set_link_attributes(Some(
            TextAttributes::new().foreground(Color::LINK).underline(true),
        ));
        let runs = label.styled_text().runs();
        assert_eq!(runs[0].attrs.foreground, None);
        assert_eq!(runs[1].attrs.foreground, Some(Color::LINK));
        assert!(runs[1].attrs.underline);
        // Hit testing still works on the restyled content.
        assert!(label.link_at_point(Point::new(12.0, 5.0)).is_some());
    }

    #[test]
    fn test_content_replacement_clears_stale_links() {
        let mut label = sample_label();
        label.set_text("no links here");
        assert_eq!(label.link_count(), 0);
        assert_eq!(label.link_at_point(Point::new(12.0, 5.0)), None);
    }

    // Sends an event straight to the widget, no storage involved.
    fn deliver(widget: &mut dyn Widget, event: &mut WidgetEvent) -> bool {
        widget.event(event) || event.is_accepted()
    }
}

//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait which is the foundation for all
//! UI elements in Aviary. Widgets embed a [`WidgetBase`] and delegate the
//! common state to it; the trait's default methods do that delegation.

use std::any::Any;

use aviary_text::{Point, Rect, Size};

use super::base::{FocusPolicy, WidgetBase};
use super::events::WidgetEvent;

/// Size preferences reported by a widget for layout purposes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The size the widget would like to have.
    pub preferred: Size,
    /// The smallest size the widget can usefully render at.
    pub minimum: Size,
}

impl SizeHint {
    /// Create a size hint with identical preferred and minimum sizes.
    pub fn fixed(size: Size) -> Self {
        Self {
            preferred: size,
            minimum: size,
        }
    }

    /// Create a size hint from preferred dimensions with a zero minimum.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self {
            preferred: Size::new(width, height),
            minimum: Size::ZERO,
        }
    }
}

/// The core trait for all widgets.
///
/// Implementors provide access to their embedded [`WidgetBase`], a runtime
/// type name, and a size hint; everything else has a default that delegates
/// to the base. Override [`event`](Self::event) to handle input.
///
/// # Example
///
/// ```ignore
/// use aviary::widget::{SizeHint, Widget, WidgetBase};
/// use aviary_text::Size;
///
/// struct Spacer {
///     base: WidgetBase,
/// }
///
/// impl Widget for Spacer {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     fn type_name(&self) -> &'static str { "Spacer" }
///
///     fn size_hint(&self) -> SizeHint {
///         SizeHint::fixed(Size::new(8.0, 8.0))
///     }
///
///     fn as_any(&self) -> &dyn std::any::Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
/// }
/// ```
pub trait Widget: Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The widget's runtime type name, used by tree searches.
    fn type_name(&self) -> &'static str;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    /// Upcast to `Any` for downcasting to the concrete widget type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast to `Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a widget event.
    ///
    /// The default implementation returns `false` to indicate the event was
    /// not handled. Return `true` (or accept the event) to stop it from
    /// propagating further.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    // =========================================================================
    // Visibility / Enabled
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Get the widget's focus policy.
    fn focus_policy(&self) -> FocusPolicy {
        self.widget_base().focus_policy()
    }

    /// Set the widget's focus policy.
    fn set_focus_policy(&mut self, policy: FocusPolicy) {
        self.widget_base_mut().set_focus_policy(policy);
    }

    /// Check if the widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        self.widget_base().is_focusable()
    }

    /// Check if the widget currently has keyboard focus.
    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    // =========================================================================
    // Coordinate Mapping
    // =========================================================================

    /// Map a point from widget-local coordinates to parent coordinates.
    fn map_to_parent(&self, point: Point) -> Point {
        self.widget_base().map_to_parent(point)
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    fn map_from_parent(&self, point: Point) -> Point {
        self.widget_base().map_from_parent(point)
    }

    /// Check if a point (in local coordinates) is inside the widget.
    fn contains_point(&self, point: Point) -> bool {
        self.widget_base().contains_point(point)
    }
}

/// Extension trait for converting to `&dyn Widget`.
pub trait AsWidget {
    /// Get a reference to self as a widget.
    fn as_widget(&self) -> &dyn Widget;
    /// Get a mutable reference to self as a widget.
    fn as_widget_mut(&mut self) -> &mut dyn Widget;
}

impl<W: Widget> AsWidget for W {
    fn as_widget(&self) -> &dyn Widget {
        self
    }

    fn as_widget_mut(&mut self) -> &mut dyn Widget {
        self
    }
}

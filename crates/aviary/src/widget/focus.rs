//! Focus management for widget trees.
//!
//! [`FocusManager`] coordinates keyboard focus across one widget tree. It
//! tracks which widget has focus, sends [`FocusOutEvent`]/[`FocusInEvent`]
//! pairs on changes, and keeps the widgets' focused flags in sync. Events
//! are sent directly (without propagation) since focus events are specific
//! to the target widget.
//!
//! Labels acquire focus by click or programmatically; there is no tab
//! order here.

use tracing::debug;

use super::dispatcher::{EventDispatcher, WidgetAccess, WidgetId};
use super::events::{FocusInEvent, FocusOutEvent, FocusReason, WidgetEvent};

/// Manages keyboard focus for a widget tree.
#[derive(Debug, Default)]
pub struct FocusManager {
    /// The currently focused widget, if any.
    focused_widget: Option<WidgetId>,
}

impl FocusManager {
    /// Create a new focus manager.
    pub fn new() -> Self {
        Self {
            focused_widget: None,
        }
    }

    /// Get the currently focused widget.
    #[inline]
    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.focused_widget
    }

    /// Check if a specific widget has focus.
    #[inline]
    pub fn has_focus(&self, widget_id: WidgetId) -> bool {
        self.focused_widget == Some(widget_id)
    }

    /// Set focus to a specific widget.
    ///
    /// Sends `FocusOut` to the previously focused widget, then `FocusIn` to
    /// the new one. Returns `false` without changing anything when the
    /// target is not focusable (policy `NoFocus`, disabled, or hidden).
    pub fn set_focus<S: WidgetAccess>(
        &mut self,
        storage: &mut S,
        widget_id: WidgetId,
        reason: FocusReason,
    ) -> bool {
        let can_focus = {
            let Some(widget) = storage.get_widget(widget_id) else {
                return false;
            };
            widget.is_focusable()
        };

        if !can_focus {
            return false;
        }

        if self.focused_widget == Some(widget_id) {
            return true;
        }

        if let Some(old_id) = self.focused_widget.take() {
            self.unfocus_widget(storage, old_id, reason);
        }

        self.focus_widget(storage, widget_id, reason);
        self.focused_widget = Some(widget_id);
        debug!(
            target: "aviary::widget::focus",
            ?widget_id,
            ?reason,
            "focus changed"
        );

        true
    }

    /// Clear focus from the currently focused widget.
    pub fn clear_focus<S: WidgetAccess>(&mut self, storage: &mut S, reason: FocusReason) {
        if let Some(old_id) = self.focused_widget.take() {
            self.unfocus_widget(storage, old_id, reason);
            debug!(target: "aviary::widget::focus", ?reason, "focus cleared");
        }
    }

    /// Send `FocusOut` and update the widget's focused flag.
    fn unfocus_widget<S: WidgetAccess>(
        &self,
        storage: &mut S,
        widget_id: WidgetId,
        reason: FocusReason,
    ) {
        if let Some(widget) = storage.get_widget_mut(widget_id) {
            widget.widget_base_mut().set_focused(false);
        }
        let mut event = WidgetEvent::FocusOut(FocusOutEvent::new(reason));
        EventDispatcher::send_event_direct(storage, widget_id, &mut event);
    }

    /// Send `FocusIn` and update the widget's focused flag.
    fn focus_widget<S: WidgetAccess>(
        &self,
        storage: &mut S,
        widget_id: WidgetId,
        reason: FocusReason,
    ) {
        if let Some(widget) = storage.get_widget_mut(widget_id) {
            widget.widget_base_mut().set_focused(true);
        }
        let mut event = WidgetEvent::FocusIn(FocusInEvent::new(reason));
        EventDispatcher::send_event_direct(storage, widget_id, &mut event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::base::{FocusPolicy, WidgetBase};
    use crate::widget::dispatcher::WidgetArena;
    use crate::widget::traits::{SizeHint, Widget};
    use aviary_text::Size;

    struct FocusProbe {
        base: WidgetBase,
        focus_ins: usize,
        focus_outs: usize,
    }

    impl FocusProbe {
        fn new() -> Self {
            let mut base = WidgetBase::new();
            base.set_focus_policy(FocusPolicy::ClickFocus);
            Self {
                base,
                focus_ins: 0,
                focus_outs: 0,
            }
        }
    }

    impl Widget for FocusProbe {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn type_name(&self) -> &'static str {
            "FocusProbe"
        }

        fn size_hint(&self) -> SizeHint {
            SizeHint::fixed(Size::new(10.0, 10.0))
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }

        fn event(&mut self, event: &mut crate::widget::events::WidgetEvent) -> bool {
            match event {
                crate::widget::events::WidgetEvent::FocusIn(_) => {
                    self.focus_ins += 1;
                    true
                }
                crate::widget::events::WidgetEvent::FocusOut(_) => {
                    self.focus_outs += 1;
                    true
                }
                _ => false,
            }
        }
    }

    #[test]
    fn test_focus_change_sends_out_then_in() {
        let mut arena = WidgetArena::new();
        let first = arena.insert(FocusProbe::new());
        let second = arena.insert(FocusProbe::new());
        let mut focus = FocusManager::new();

        assert!(focus.set_focus(&mut arena, first, FocusReason::Other));
        assert!(focus.has_focus(first));
        assert!(arena.get_widget(first).unwrap().has_focus());

        assert!(focus.set_focus(&mut arena, second, FocusReason::Mouse));
        let first_probe = arena.widget::<FocusProbe>(first).unwrap();
        assert_eq!(first_probe.focus_outs, 1);
        assert!(!first_probe.base.has_focus());
        assert_eq!(arena.widget::<FocusProbe>(second).unwrap().focus_ins, 1);
    }

    #[test]
    fn test_refocus_is_noop() {
        let mut arena = WidgetArena::new();
        let id = arena.insert(FocusProbe::new());
        let mut focus = FocusManager::new();

        assert!(focus.set_focus(&mut arena, id, FocusReason::Other));
        assert!(focus.set_focus(&mut arena, id, FocusReason::Other));
        assert_eq!(arena.widget::<FocusProbe>(id).unwrap().focus_ins, 1);
    }

    #[test]
    fn test_rejects_non_focusable() {
        let mut arena = WidgetArena::new();
        let id = arena.insert(FocusProbe::new());
        arena
            .get_widget_mut(id)
            .unwrap()
            .set_focus_policy(FocusPolicy::NoFocus);
        let mut focus = FocusManager::new();

        assert!(!focus.set_focus(&mut arena, id, FocusReason::Other));
        assert_eq!(focus.focused_widget(), None);
    }

    #[test]
    fn test_clear_focus() {
        let mut arena = WidgetArena::new();
        let id = arena.insert(FocusProbe::new());
        let mut focus = FocusManager::new();

        focus.set_focus(&mut arena, id, FocusReason::Other);
        focus.clear_focus(&mut arena, FocusReason::Other);
        assert_eq!(focus.focused_widget(), None);
        assert_eq!(arena.widget::<FocusProbe>(id).unwrap().focus_outs, 1);
    }
}

//! Widget storage and event dispatch.
//!
//! Widgets are identified by [`WidgetId`] and live behind the
//! [`WidgetAccess`] trait so the dispatcher, focus manager, and tree
//! searches work against any host storage. [`WidgetArena`] is the provided
//! implementation: a slotmap of boxed widgets with parent/child
//! bookkeeping.
//!
//! # Event Flow
//!
//! [`EventDispatcher::send_event`] delivers an event to the target widget's
//! `event()` method. If the widget does not accept it and the event type
//! supports propagation, the event bubbles to the parent, continuing up the
//! tree until a widget accepts it or the root is reached.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use super::events::WidgetEvent;
use super::Widget;

new_key_type! {
    /// Identifier of a widget within its storage.
    pub struct WidgetId;
}

/// Result of dispatching an event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The event was accepted/handled.
    Accepted,
    /// The event was not handled by any widget.
    Ignored,
    /// The target widget was not found.
    WidgetNotFound,
}

impl DispatchResult {
    /// Check if the event was handled.
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Trait for accessing widgets by their [`WidgetId`].
///
/// Implement this for your widget storage mechanism to use the event
/// dispatcher, focus manager, and tree searches.
pub trait WidgetAccess {
    /// Get an immutable reference to a widget by its ID.
    fn get_widget(&self, id: WidgetId) -> Option<&dyn Widget>;

    /// Get a mutable reference to a widget by its ID.
    fn get_widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget>;

    /// Get the parent of a widget.
    ///
    /// Default implementation returns `None`. Override for event bubbling
    /// and ancestor searches.
    fn get_parent(&self, _id: WidgetId) -> Option<WidgetId> {
        None
    }

    /// Get the children of a widget in z-order (back to front).
    ///
    /// Default implementation returns an empty vec. Override for descendant
    /// searches.
    fn get_children(&self, _id: WidgetId) -> Vec<WidgetId> {
        Vec::new()
    }
}

/// Event dispatcher for the widget system.
pub struct EventDispatcher;

impl EventDispatcher {
    /// Send an event to a widget, bubbling unaccepted events to ancestors.
    pub fn send_event<S: WidgetAccess>(
        storage: &mut S,
        target_id: WidgetId,
        event: &mut WidgetEvent,
    ) -> DispatchResult {
        let mut current = target_id;
        loop {
            let handled = {
                let Some(widget) = storage.get_widget_mut(current) else {
                    return DispatchResult::WidgetNotFound;
                };
                widget.event(event)
            };

            if handled || event.is_accepted() {
                return DispatchResult::Accepted;
            }
            if !event.should_propagate() {
                return DispatchResult::Ignored;
            }
            match storage.get_parent(current) {
                Some(parent) => current = parent,
                None => return DispatchResult::Ignored,
            }
        }
    }

    /// Send an event directly to a widget, without propagation.
    ///
    /// Used for events that are specific to one widget, like focus changes.
    pub fn send_event_direct<S: WidgetAccess>(
        storage: &mut S,
        target_id: WidgetId,
        event: &mut WidgetEvent,
    ) -> DispatchResult {
        let handled = {
            let Some(widget) = storage.get_widget_mut(target_id) else {
                return DispatchResult::WidgetNotFound;
            };
            widget.event(event)
        };

        if handled || event.is_accepted() {
            DispatchResult::Accepted
        } else {
            DispatchResult::Ignored
        }
    }
}

/// Slotmap-backed widget storage with parent/child bookkeeping.
///
/// Children are kept in insertion order, which is also z-order (later
/// siblings draw in front). Removing a widget removes its whole subtree.
#[derive(Default)]
pub struct WidgetArena {
    widgets: SlotMap<WidgetId, Box<dyn Widget>>,
    parents: SecondaryMap<WidgetId, WidgetId>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
}

impl WidgetArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a widget with no parent.
    pub fn insert(&mut self, widget: impl Widget + 'static) -> WidgetId {
        self.widgets.insert(Box::new(widget))
    }

    /// Insert a widget as the last child of `parent`.
    ///
    /// Returns `None` (without inserting) if the parent does not exist.
    pub fn insert_child(
        &mut self,
        parent: WidgetId,
        widget: impl Widget + 'static,
    ) -> Option<WidgetId> {
        if !self.widgets.contains_key(parent) {
            return None;
        }
        let id = self.widgets.insert(Box::new(widget));
        self.parents.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        } else {
            self.children.insert(parent, vec![id]);
        }
        Some(id)
    }

    /// Remove a widget and its entire subtree.
    pub fn remove(&mut self, id: WidgetId) {
        if let Some(parent) = self.parents.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent) {
                siblings.retain(|&child| child != id);
            }
        }
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: WidgetId) {
        if let Some(child_ids) = self.children.remove(id) {
            for child in child_ids {
                self.parents.remove(child);
                self.remove_subtree(child);
            }
        }
        self.widgets.remove(id);
    }

    /// Check if a widget exists.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// The number of widgets in the arena.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Check if the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Get a widget downcast to its concrete type.
    pub fn widget<T: Widget + 'static>(&self, id: WidgetId) -> Option<&T> {
        self.widgets.get(id)?.as_any().downcast_ref::<T>()
    }

    /// Get a widget mutably, downcast to its concrete type.
    pub fn widget_mut<T: Widget + 'static>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.widgets.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }
}

impl WidgetAccess for WidgetArena {
    fn get_widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|w| w.as_ref())
    }

    fn get_widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.widgets.get_mut(id).map(|w| &mut **w as &mut dyn Widget)
    }

    fn get_parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parents.get(id).copied()
    }

    fn get_children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.children.get(id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::base::WidgetBase;
    use crate::widget::events::{FocusInEvent, FocusReason, KeyPressEvent, KeyboardModifiers, Key};
    use crate::widget::traits::SizeHint;
    use aviary_text::Size;

    struct Probe {
        base: WidgetBase,
        accepts_keys: bool,
        seen_keys: usize,
    }

    impl Probe {
        fn new(accepts_keys: bool) -> Self {
            Self {
                base: WidgetBase::new(),
                accepts_keys,
                seen_keys: 0,
            }
        }
    }

    impl Widget for Probe {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn type_name(&self) -> &'static str {
            "Probe"
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

        fn event(&mut self, event: &mut WidgetEvent) -> bool {
            if let WidgetEvent::KeyPress(_) = event {
                self.seen_keys += 1;
                if self.accepts_keys {
                    event.accept();
                    return true;
                }
            }
            false
        }
    }

    fn key_event() -> WidgetEvent {
        WidgetEvent::KeyPress(KeyPressEvent::new(Key::Enter, KeyboardModifiers::NONE, ""))
    }

    #[test]
    fn test_bubbles_to_accepting_parent() {
        let mut arena = WidgetArena::new();
        let root = arena.insert(Probe::new(true));
        let child = arena.insert_child(root, Probe::new(false)).unwrap();

        let result = EventDispatcher::send_event(&mut arena, child, &mut key_event());
        assert_eq!(result, DispatchResult::Accepted);
        assert_eq!(arena.widget::<Probe>(child).unwrap().seen_keys, 1);
        assert_eq!(arena.widget::<Probe>(root).unwrap().seen_keys, 1);
    }

    #[test]
    fn test_ignored_at_root() {
        let mut arena = WidgetArena::new();
        let root = arena.insert(Probe::new(false));
        let result = EventDispatcher::send_event(&mut arena, root, &mut key_event());
        assert_eq!(result, DispatchResult::Ignored);
    }

    #[test]
    fn test_direct_delivery_does_not_bubble() {
        let mut arena = WidgetArena::new();
        let root = arena.insert(Probe::new(true));
        let child = arena.insert_child(root, Probe::new(false)).unwrap();

        let mut event = WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Other));
        EventDispatcher::send_event_direct(&mut arena, child, &mut event);
        assert_eq!(arena.widget::<Probe>(root).unwrap().seen_keys, 0);
    }

    #[test]
    fn test_remove_subtree() {
        let mut arena = WidgetArena::new();
        let root = arena.insert(Probe::new(false));
        let child = arena.insert_child(root, Probe::new(false)).unwrap();
        let grandchild = arena.insert_child(child, Probe::new(false)).unwrap();

        arena.remove(child);
        assert!(arena.contains(root));
        assert!(!arena.contains(child));
        assert!(!arena.contains(grandchild));
        assert!(arena.get_children(root).is_empty());
    }

    #[test]
    fn test_insert_child_of_missing_parent() {
        let mut arena = WidgetArena::new();
        let root = arena.insert(Probe::new(false));
        arena.remove(root);
        assert!(arena.insert_child(root, Probe::new(false)).is_none());
        assert!(arena.is_empty());
    }
}

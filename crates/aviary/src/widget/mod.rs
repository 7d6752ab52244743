//! The widget system.
//!
//! Widgets embed a [`WidgetBase`] and implement the [`Widget`] trait. They
//! live in a [`WidgetArena`] (or any [`WidgetAccess`] storage), receive
//! [`WidgetEvent`]s through the [`EventDispatcher`], and get keyboard focus
//! from a per-tree [`FocusManager`]. [`tree`] provides searches over the
//! widget hierarchy.

pub mod base;
pub mod dispatcher;
pub mod events;
pub mod focus;
pub mod traits;
pub mod tree;
pub mod widgets;


pub use base::{FocusPolicy, WidgetBase};
pub use dispatcher::{DispatchResult, EventDispatcher, WidgetAccess, WidgetArena, WidgetId};
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers,
    MouseButton, MousePressEvent, MouseReleaseEvent, WidgetEvent,
};
pub use focus::FocusManager;
pub use traits::{AsWidget, SizeHint, Widget};

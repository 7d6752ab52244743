//! Signal/slot system for Aviary.
//!
//! This module provides a type-safe signal/slot mechanism for component
//! communication. Signals are emitted by widgets when their state changes,
//! and connected slots (callbacks) are invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Invocation Model
//!
//! Slots are always invoked directly, on the emitting thread. The widget
//! subsystem runs on a single UI thread: input events, state changes, and
//! signal emissions are serialized by the host event loop, so there is no
//! queued or cross-thread delivery here. Slots must still be `Send + Sync`
//! so that widgets holding signals can be moved between threads before the
//! event loop starts.
//!
//! # Re-entrancy
//!
//! The connection list is snapshotted before slots run, so a slot may
//! connect or disconnect other slots (or itself) while the signal is being
//! emitted. Connections made during an emission are first invoked on the
//! next emission.
//!
//! # Example
//!
//! ```
//! use aviary_core::Signal;
//!
//! let emphasized_changed = Signal::<bool>::new();
//!
//! let id = emphasized_changed.connect(|on| {
//!     println!("emphasized: {on}");
//! });
//!
//! emphasized_changed.emit(true);
//! emphasized_changed.disconnect(id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke.
    slot: Arc<dyn Fn(Args) + Send + Sync>,
}

/// Shared state between signal handles.
struct SignalInner<Args> {
    /// Connected slots, keyed by connection ID.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether emission is currently suppressed.
    blocked: AtomicBool,
}

/// A typed signal that notifies connected slots when emitted.
///
/// `Signal` is cheap to clone; clones share the same connection list, which
/// lets a widget hand out a signal handle while keeping the ability to emit.
///
/// # Type Parameters
///
/// - `Args`: The argument type passed to slots on emission. Use `()` for
///   signals that carry no data, or a tuple for multiple values.
pub struct Signal<Args> {
    inner: Arc<SignalInner<Args>>,
}

impl<Args: Clone + 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalInner {
                connections: Mutex::new(SlotMap::with_key()),
                blocked: AtomicBool::new(false),
            }),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// The slot is invoked every time the signal is emitted, receiving a
    /// clone of the emitted arguments. Returns a [`ConnectionId`] that can
    /// be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(Args) + Send + Sync + 'static,
    {
        self.inner.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a previously connected slot.
    ///
    /// Returns `true` if the connection existed and was removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.inner.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.inner.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.inner.connections.lock().len()
    }

    /// Block or unblock emission.
    ///
    /// While blocked, [`emit`](Self::emit) is a no-op. Connections are
    /// unaffected and resume receiving once unblocked.
    pub fn set_blocked(&self, blocked: bool) {
        self.inner.blocked.store(blocked, Ordering::Release);
    }

    /// Check whether emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.inner.blocked.load(Ordering::Acquire)
    }

    /// Emit the signal, invoking every connected slot with `args`.
    ///
    /// Slots run in connection order. The connection list is snapshotted
    /// before any slot runs, so slots may freely connect/disconnect during
    /// emission.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            return;
        }

        // Snapshot under the lock, invoke outside it.
        let slots: Vec<Arc<dyn Fn(Args) + Send + Sync>> = self
            .inner
            .connections
            .lock()
            .values()
            .map(|conn| Arc::clone(&conn.slot))
            .collect();

        tracing::trace!(
            target: "aviary_core::signal",
            slots = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(args.clone());
        }
    }
}

impl<Args: Clone + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Clone for Signal<Args> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.inner.connections.lock().len())
            .field("blocked", &self.inner.blocked.load(Ordering::Relaxed))
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

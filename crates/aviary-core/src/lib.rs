//! Core systems for Aviary.
//!
//! This crate provides the foundational pieces shared by the Aviary widget
//! crates:
//!
//! - **Signal/Slot System**: Type-safe change notification between components
//! - **Logging**: `tracing` integration and filter targets
//!
//! # Signal Example
//!
//! ```
//! use aviary_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};

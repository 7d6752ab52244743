//! Logging facilities for Aviary.
//!
//! Aviary uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Log volume can be controlled per subsystem with `tracing` directives,
//! e.g. `RUST_LOG=aviary::widget::link=trace` to trace link hit testing and
//! activation only.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "aviary_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "aviary_core::signal";
    /// Widget state changes.
    pub const WIDGET: &str = "aviary::widget";
    /// Focus management.
    pub const FOCUS: &str = "aviary::widget::focus";
    /// Link hit testing and activation.
    pub const LINK: &str = "aviary::widget::link";
}

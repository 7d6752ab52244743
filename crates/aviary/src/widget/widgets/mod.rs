//! Built-in widgets.

mod emphasized_label;
mod link_label;

pub use emphasized_label::EmphasizedLabel;
pub use link_label::{LinkHandler, LinkLabel};

//! UI module - TUI rendering components.
//!
//! - `layout.rs`: header, body, footer
//! - `variables.rs`: error banner and variable list
//! - `widgets/`: overlays drawn on top (help, toasts)

mod layout;
mod variables;

pub mod widgets;

pub use layout::render;

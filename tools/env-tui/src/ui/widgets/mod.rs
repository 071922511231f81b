//! Reusable UI components.

mod help_overlay;
mod toast;

pub use help_overlay::render_help_overlay;
pub use toast::render_toasts;

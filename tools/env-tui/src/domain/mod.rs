//! Client-side state.

mod app;
mod toast;

pub use app::{App, AppState, Command, FetchState, UNKNOWN_ERROR_MESSAGE};
pub use toast::{Toast, ToastKind, ToastQueue, DEFAULT_TOAST_LIFETIME, MAX_VISIBLE_TOASTS};

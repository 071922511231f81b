//! env-tui: terminal client for `env-api`.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Environment Variables Tester        [R] Refresh Variables   │
//! │  Test and view your environment variables safely             │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Error: ...                                    (when failed) │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Environment Variables (N)                                   │
//! │  NODE_ENV: development                                       │
//! │  NEXT_PUBLIC_X: (empty)                      ┌────────────┐  │
//! │                                              │ toast      │  │
//! └──────────────────────────────────────────────┴────────────┴──┘
//! ```
//!
//! The fetch runs on a spawned task; its outcome reaches the UI loop over
//! an mpsc channel and drives [`FetchState`](domain::FetchState).

pub mod api;
pub mod domain;
pub mod ui;

pub use api::{ClientError, EnvApiClient};
pub use domain::{App, AppState, Command, FetchState, Toast, ToastKind, ToastQueue};

//! # Env-Inspector Test Suite
//!
//! End-to-end tests that run the real `env-api` server on an ephemeral port
//! and talk to it with `reqwest` and the `env-tui` client.
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── http_api.rs      # Wire contract of every route
//!     └── client_flow.rs   # Fetch → state → render through the TUI model
//! ```
//!
//! ```bash
//! cargo test -p env-tests
//! ```

pub mod integration;

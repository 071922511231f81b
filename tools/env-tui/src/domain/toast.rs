//! Transient notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen unless configured otherwise.
pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Toasts shown at once; older ones are dropped.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    pub created_at: Instant,
}

/// Newest-first toast stack with expiry.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_LIFETIME)
    }
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(MAX_VISIBLE_TOASTS),
            lifetime,
        }
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, kind: ToastKind) {
        self.push_at(title, description, kind, Instant::now());
    }

    pub fn push_at(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ToastKind,
        now: Instant,
    ) {
        self.toasts.push_front(Toast {
            title: title.into(),
            description: description.into(),
            kind,
            created_at: now,
        });
        self.toasts.truncate(MAX_VISIBLE_TOASTS);
    }

    /// Drop toasts older than the lifetime.
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < lifetime);
    }

    /// Toasts newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

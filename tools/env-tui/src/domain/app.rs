//! Application state management.

use std::fmt::Display;
use std::time::{Duration, Instant};

use env_types::{EnvMap, EnvResponse, FETCH_FAILED_MESSAGE};

use super::toast::{ToastKind, ToastQueue};

/// Banner text for a transport error with no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Which view has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Variable list.
    #[default]
    Main,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Lifecycle of the environment fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Side effect requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    /// A fetch was started; the caller must issue the request.
    Fetch,
}

/// Main application model.
pub struct App {
    /// Current view.
    pub state: AppState,
    /// Fetch lifecycle.
    pub fetch_state: FetchState,
    /// Last successfully fetched variables.
    pub variables: EnvMap,
    /// Count reported with `variables`.
    pub count: usize,
    /// Banner message from the last failed fetch.
    pub error_message: Option<String>,
    /// Notification stack.
    pub toasts: ToastQueue,
    /// First visible row of the variable list.
    pub scroll: u16,
    /// Time of the last successful fetch.
    pub last_refresh: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self::with_toast_lifetime(super::toast::DEFAULT_TOAST_LIFETIME)
    }

    pub fn with_toast_lifetime(lifetime: Duration) -> Self {
        Self {
            state: AppState::Main,
            fetch_state: FetchState::Idle,
            variables: EnvMap::new(),
            count: 0,
            error_message: None,
            toasts: ToastQueue::new(lifetime),
            scroll: 0,
            last_refresh: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetch_state == FetchState::Loading
    }

    /// Enter `Loading` and clear the error. Refused while a fetch is
    /// already outstanding.
    pub fn begin_fetch(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.fetch_state = FetchState::Loading;
        self.error_message = None;
        true
    }

    /// Apply the outcome of a fetch.
    pub fn complete_fetch<E: Display>(&mut self, result: Result<EnvResponse, E>) {
        match result {
            Ok(response) if response.success => {
                let count = response.count;
                self.variables = response.environment_variables;
                self.count = count;
                self.error_message = None;
                self.fetch_state = FetchState::Loaded;
                self.last_refresh = Some(chrono::Utc::now());
                self.clamp_scroll();
                self.toasts.push(
                    "Environment variables loaded",
                    format!("Found {} environment variables", count),
                    ToastKind::Success,
                );
            }
            Ok(response) => {
                let message = response
                    .error
                    .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string());
                self.fail(message);
            }
            Err(e) => {
                let text = e.to_string();
                let message = if text.is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_string()
                } else {
                    text
                };
                self.fail(message);
            }
        }
    }

    // Previous variables and count stay on screen.
    fn fail(&mut self, message: String) {
        self.toasts
            .push("Error", message.clone(), ToastKind::Destructive);
        self.error_message = Some(message);
        self.fetch_state = FetchState::Failed;
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: char) -> Command {
        match self.state {
            AppState::Main => self.handle_main_key(key),
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Main;
                Command::None
            }
            AppState::Quit => Command::None,
        }
    }

    fn handle_main_key(&mut self, key: char) -> Command {
        match key {
            'q' | 'Q' => self.state = AppState::Quit,
            '?' => self.state = AppState::Help,
            'r' | 'R' => {
                if self.begin_fetch() {
                    return Command::Fetch;
                }
            }
            'k' => self.scroll_up(),
            'j' => self.scroll_down(),
            _ => {}
        }
        Command::None
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max = self.variables.len().saturating_sub(1);
        self.scroll = self.scroll.min(u16::try_from(max).unwrap_or(u16::MAX));
    }

    /// Expire old toasts.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.prune(now);
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    /// Error whose display text is empty.
    #[derive(Debug)]
    struct Silent;

    impl fmt::Display for Silent {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    fn loaded(pairs: &[(&str, &str)]) -> EnvResponse {
        EnvResponse::success(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_initial_state() {
        let app = App::new();
        assert_eq!(app.fetch_state, FetchState::Idle);
        assert_eq!(app.count, 0);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_begin_fetch_refused_while_loading() {
        let mut app = App::new();
        assert!(app.begin_fetch());
        assert_eq!(app.fetch_state, FetchState::Loading);
        assert!(!app.begin_fetch());
        assert_eq!(app.handle_key('r'), Command::None);
    }

    #[test]
    fn test_success() {
        let mut app = App::new();
        app.begin_fetch();
        app.complete_fetch::<Silent>(Ok(loaded(&[("FOO", "bar"), ("NEXT_PUBLIC_X", "")])));

        assert_eq!(app.fetch_state, FetchState::Loaded);
        assert_eq!(app.count, 2);
        assert_eq!(app.variables["NEXT_PUBLIC_X"], "");
        assert!(app.last_refresh.is_some());

        let toast = app.toasts.iter().next().unwrap();
        assert_eq!(toast.title, "Environment variables loaded");
        assert_eq!(toast.description, "Found 2 environment variables");
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_explicit_failure_keeps_previous_data() {
        let mut app = App::new();
        app.begin_fetch();
        app.complete_fetch::<Silent>(Ok(loaded(&[("A", "1")])));

        app.begin_fetch();
        app.complete_fetch::<Silent>(Ok(EnvResponse::fetch_failed()));

        assert_eq!(app.fetch_state, FetchState::Failed);
        assert_eq!(
            app.error_message.as_deref(),
            Some("Failed to fetch environment variables")
        );
        assert_eq!(app.count, 1);
        assert_eq!(app.variables["A"], "1");

        let toast = app.toasts.iter().next().unwrap();
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.kind, ToastKind::Destructive);
    }

    #[test]
    fn test_failure_without_message() {
        let mut app = App::new();
        app.begin_fetch();
        let mut response = EnvResponse::fetch_failed();
        response.error = None;
        app.complete_fetch::<Silent>(Ok(response));

        assert_eq!(app.error_message.as_deref(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn test_transport_error_message() {
        let mut app = App::new();
        app.begin_fetch();
        app.complete_fetch(Err::<EnvResponse, _>("Connection failed: Cannot connect"));
        assert_eq!(
            app.error_message.as_deref(),
            Some("Connection failed: Cannot connect")
        );

        app.begin_fetch();
        app.complete_fetch(Err::<EnvResponse, _>(Silent));
        assert_eq!(app.error_message.as_deref(), Some(UNKNOWN_ERROR_MESSAGE));
    }

    #[test]
    fn test_refresh_clears_error() {
        let mut app = App::new();
        app.begin_fetch();
        app.complete_fetch(Err::<EnvResponse, _>("boom"));
        assert!(app.error_message.is_some());

        assert_eq!(app.handle_key('r'), Command::Fetch);
        assert!(app.error_message.is_none());
        assert!(app.is_loading());
    }

    #[test]
    fn test_help_and_quit_keys() {
        let mut app = App::new();
        app.handle_key('?');
        assert_eq!(app.state, AppState::Help);
        // Any key closes help, including 'q'
        app.handle_key('q');
        assert_eq!(app.state, AppState::Main);
        app.handle_key('q');
        assert!(app.should_quit());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = App::new();
        app.begin_fetch();
        app.complete_fetch::<Silent>(Ok(loaded(&[("A", "1"), ("B", "2")])));

        app.handle_key('j');
        app.handle_key('j');
        app.handle_key('j');
        assert_eq!(app.scroll, 1);

        app.handle_key('k');
        app.handle_key('k');
        assert_eq!(app.scroll, 0);
    }
}

//! # Client Flow
//!
//! Fetch with `EnvApiClient`, feed the outcome to the `App` state machine
//! and render it the way the terminal would.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use env_api::{ApiConfig, ExposurePolicy};
    use env_tui::{App, ClientError, EnvApiClient, FetchState, ToastKind};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::integration::harness::{FailingEnvironment, TestServer};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| env_tui::ui::render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn fetch_into(app: &mut App, client: &EnvApiClient) {
        assert!(app.begin_fetch());
        app.complete_fetch(client.fetch_env().await);
    }

    #[tokio::test]
    async fn loads_and_renders_variables() {
        let server =
            TestServer::with_policy(ExposurePolicy::Unfiltered, [("FOO", "bar"), ("NEXT_PUBLIC_X", "")])
                .await;
        let client = EnvApiClient::new(server.url(), Some(Duration::from_secs(5))).unwrap();

        let mut app = App::new();
        fetch_into(&mut app, &client).await;

        assert_eq!(app.fetch_state, FetchState::Loaded);
        assert_eq!(app.count, 2);

        let text = screen(&app);
        assert!(text.contains("Environment Variables (2)"));
        assert!(text.contains("NEXT_PUBLIC_X: (empty)"));
        assert!(text.contains("Found 2 environment variables"));
    }

    #[tokio::test]
    async fn server_failure_shows_banner_and_keeps_data() {
        let server = TestServer::with_policy(ExposurePolicy::Unfiltered, [("KEEP", "me")]).await;
        let client = EnvApiClient::new(server.url(), None).unwrap();

        let mut app = App::new();
        fetch_into(&mut app, &client).await;
        server.stop().await;

        let failing = TestServer::start(ApiConfig::default(), Arc::new(FailingEnvironment)).await;
        let client = EnvApiClient::new(failing.url(), None).unwrap();
        fetch_into(&mut app, &client).await;

        assert_eq!(app.fetch_state, FetchState::Failed);
        assert_eq!(app.count, 1);
        assert_eq!(app.toasts.iter().next().unwrap().kind, ToastKind::Destructive);

        let text = screen(&app);
        assert!(text.contains("Error: Failed to fetch environment variables"));
        assert!(text.contains("KEEP: me"));
    }

    #[tokio::test]
    async fn unreachable_server_message() {
        let server = TestServer::with_policy(ExposurePolicy::Filtered, [("PORT", "1")]).await;
        let url = server.url();
        server.stop().await;

        let client = EnvApiClient::new(url, Some(Duration::from_secs(2))).unwrap();
        let mut app = App::new();
        assert!(app.begin_fetch());

        let result = client.fetch_env().await;
        let expected = match &result {
            Err(e @ ClientError::Connection(_)) => e.to_string(),
            other => panic!("expected connection error, got {:?}", other),
        };
        app.complete_fetch(result);

        assert_eq!(app.error_message.as_deref(), Some(expected.as_str()));
        assert!(screen(&app).contains("Cannot connect to"));
    }
}

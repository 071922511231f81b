//! env-tui: terminal client for env-api.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use env_tui::api::{ClientError, EnvApiClient};
use env_tui::domain::{App, Command};
use env_tui::ui;
use env_types::EnvResponse;

type FetchResult = Result<EnvResponse, ClientError>;

/// env-tui: view the environment exposed by env-api
#[derive(Parser, Debug)]
#[command(name = "env-tui")]
#[command(about = "Terminal client for the env-api environment inspector", version)]
struct Args {
    /// Base URL of the env-api server
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Request timeout in seconds (none by default)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// How long notifications stay on screen, in milliseconds
    #[arg(long, default_value = "4000")]
    toast_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let client = EnvApiClient::new(&args.url, args.timeout_secs.map(Duration::from_secs))
        .context("creating HTTP client")?;

    // Restore the terminal before the default hook prints the panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::with_toast_lifetime(Duration::from_millis(args.toast_ms));
    let result = run_app(&mut terminal, &mut app, client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: EnvApiClient,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<FetchResult>(4);

    // Initial load
    if app.begin_fetch() {
        spawn_fetch(&client, &tx);
    }

    loop {
        while let Ok(result) = rx.try_recv() {
            app.complete_fetch(result);
        }
        app.tick(Instant::now());

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let command = match key.code {
                        KeyCode::Char(c) => app.handle_key(c),
                        KeyCode::Up => app.handle_key('k'),
                        KeyCode::Down => app.handle_key('j'),
                        KeyCode::Esc => app.handle_key('q'),
                        _ => Command::None,
                    };
                    if command == Command::Fetch {
                        spawn_fetch(&client, &tx);
                    }
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn spawn_fetch(client: &EnvApiClient, tx: &mpsc::Sender<FetchResult>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_env().await;
        // Receiver is gone only after quitting
        let _ = tx.send(result).await;
    });
}

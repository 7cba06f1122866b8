//! PLEDGE TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pledge_core::DashboardModel;
use pledge_tui::config::TuiConfig;
use pledge_tui::error::TuiError;
use pledge_tui::events::TuiEvent;
use pledge_tui::keys::map_key;
use pledge_tui::loader::source_from_config;
use pledge_tui::logging::init_tracing;
use pledge_tui::state::App;
use pledge_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

const LOAD_FAILURE_NOTICE: &str = "Error loading dashboard data. Check the data file formatting.";

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_tracing(&config.log_path)?;

    let source = source_from_config(&config)?;
    let model = match DashboardModel::load(source.as_ref(), config.score.scale).await {
        Ok(model) => model,
        Err(err) => {
            tracing::error!(source = %source.describe(), error = %err, "Dashboard load failed");
            eprintln!("{}", LOAD_FAILURE_NOTICE);
            return Err(err.into());
        }
    };
    let mut app = App::new(config, model);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx);

    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {}
            maybe_event = event_rx.recv() => {
                let Some(event) = maybe_event else {
                    break;
                };
                if handle_event(&mut app, event) {
                    break;
                }
            }
        }
    }

    tracing::info!("Dashboard closed");
    Ok(())
}

fn handle_event(app: &mut App, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Input(key) => match map_key(key, app.mode) {
            Some(action) => app.handle_action(action),
            None => false,
        },
        TuiEvent::Resize { .. } | TuiEvent::Tick => false,
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) => sender.blocking_send(TuiEvent::Input(key)),
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}

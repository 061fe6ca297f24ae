//! Front desk - hotel admin dashboard
//!
//! The loop is the usual one:
//! 1. Event (keyboard/mouse) -> DeskUi.map_event() -> Actions
//! 2. Actions dispatched to the store
//! 3. Reducer updates state
//! 4. Re-render
//!
//! Every input event triggers a render, even when no action changed the
//! state: the time fields keep an edit on screen after the reducer has
//! rejected it.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p front-desk -- --hotel "Hotel Chevalier" --check-in 14:00
//!
//! # Log to a file (the terminal belongs to the UI)
//! RUST_LOG=debug cargo run -p front-desk -- --log-file front-desk.log
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hotel_admin::{
    process_raw_event, spawn_event_poller, ActionSummary, LoggingMiddleware, RawEvent, Store,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use front_desk::action::Action;
use front_desk::reducer::reducer;
use front_desk::state::{is_valid_time, AppState};
use front_desk::ui::DeskUi;

/// Hotel admin dashboard
#[derive(Parser, Debug)]
#[command(name = "front-desk")]
#[command(about = "A hotel admin dashboard in the terminal")]
struct Args {
    /// Property name shown in the status line
    #[arg(long, default_value = "Grand Budapest")]
    hotel: String,

    /// Standard check-in time (HH:MM)
    #[arg(long, default_value = "15:00", value_parser = parse_time_arg)]
    check_in: String,

    /// Standard check-out time (HH:MM)
    #[arg(long, default_value = "11:00", value_parser = parse_time_arg)]
    check_out: String,

    /// Write logs to this file; filter with RUST_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log actions before and after dispatch
    #[arg(long)]
    verbose: bool,
}

fn parse_time_arg(value: &str) -> Result<String, String> {
    if is_valid_time(value) {
        Ok(value.to_string())
    } else {
        Err(format!("'{value}' is not a 24-hour HH:MM time"))
    }
}

/// Install a file subscriber; the guard flushes pending lines on drop
fn init_logging(path: &Path) -> WorkerGuard {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "front-desk.log".into());

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let _guard = args.log_file.as_deref().map(init_logging);
    tracing::info!(hotel = %args.hotel, "Starting front desk");

    let state = AppState::new(args.hotel, &args.check_in, &args.check_out);
    let middleware = if args.verbose {
        LoggingMiddleware::verbose()
    } else {
        LoggingMiddleware::new()
    };

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state, middleware).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Front desk exited with an error");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: AppState,
    middleware: LoggingMiddleware,
) -> io::Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let mut store = Store::new(state, reducer, middleware);
    let mut ui = DeskUi::new();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, frame.area(), store.state()))?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);
                for action in ui.map_event(&event, store.state()) {
                    let _ = action_tx.send(action);
                }
                should_render = true;
            }

            Some(action) = action_rx.recv() => {
                tracing::trace!(action = %action.summary(), "Received action");
                if matches!(action, Action::Quit) {
                    break;
                }
                should_render |= store.dispatch(action);
            }
        }
    }

    cancel_token.cancel();
    tracing::info!("Front desk stopped");
    Ok(())
}

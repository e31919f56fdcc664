//! Greetings TUI - actor-based rendition of the Sample List demo
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - single owner of all state, driven by events and frames
//! - Image Layer (Tokio) - async avatar fetch

mod animation;
mod app;
mod components;
mod config;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use app::AppActor;
use config::Config;
use messages::ui_events::key_to_ui_event;
use messages::{ImageCommand, ImageEvent, RenderState, UiEvent};
use network::ImageLoader;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();

    // Initialize logging to file
    let log_path = config.log_path();
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let log_name = log_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log_file has no file name: {}", log_path.display()))?;
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    tracing::info!(?config, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (image_cmd_tx, image_cmd_rx) = mpsc::unbounded_channel::<ImageCommand>();
    let (image_event_tx, image_event_rx) = mpsc::unbounded_channel::<ImageEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn image loader
    let image_loader = ImageLoader::new(image_event_tx);
    tokio::spawn(image_loader.run(image_cmd_rx));

    // Spawn app actor, the screen root lives here
    let app_actor = AppActor::new(&config, image_cmd_tx, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx, image_event_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    let _ = app_handle.await;
    tracing::info!("Stopped");

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut viewport = (0u16, 0u16);

    loop {
        // Tell the app how much room each list has
        let size = terminal.size()?;
        let rows = ui::viewport_rows(Rect::new(0, 0, size.width, size.height));
        if rows != viewport {
            viewport = rows;
            let _ = ui_tx.send(UiEvent::ViewportResized {
                name_rows: rows.0,
                image_rows: rows.1,
            });
        }

        // Draw with current state
        terminal.draw(|f| ui::draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.active_tab, current_state.show_help)
                {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

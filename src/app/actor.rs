//! App actor - message loop processing UI events, frames and image events
//!
//! This task is the single owner of every state cell. Events are applied
//! in arrival order and each applied change is followed by one render
//! snapshot, so the UI never observes a half-applied update.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::{ImageCommand, ImageEvent, RenderState, UiEvent};

/// App actor that processes UI events, animation frames and image events
pub struct AppActor {
    state: AppState,
    frame_interval: Duration,
    image_tx: mpsc::UnboundedSender<ImageCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &Config,
        image_tx: mpsc::UnboundedSender<ImageCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config),
            frame_interval: config.frame_interval(),
            image_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut image_rx: mpsc::UnboundedReceiver<ImageEvent>,
    ) {
        let mut frames = tokio::time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Send initial render state
        self.render();

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        if let Some(cmd) = self.state.cancel_image() {
                            let _ = self.image_tx.send(cmd);
                        }
                        let _ = self.image_tx.send(ImageCommand::Shutdown);
                        break;
                    }
                    self.render();
                }
                Some(event) = image_rx.recv() => {
                    self.state.handle_image_event(event);
                    self.render();
                }
                _ = frames.tick(), if self.state.is_animating() => {
                    if self.state.tick() {
                        self.render();
                    }
                }
                else => break,
            }
        }
    }

    fn render(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::SwitchTab(tab) => {
                if let Some(cmd) = self.state.switch_tab(tab) {
                    let _ = self.image_tx.send(cmd);
                }
            }

            // Sample List
            UiEvent::CursorUp => self.state.cursor_up(),
            UiEvent::CursorDown => self.state.cursor_down(),
            UiEvent::PageUp => self.state.page_up(),
            UiEvent::PageDown => self.state.page_down(),
            UiEvent::CursorHome => self.state.cursor_home(),
            UiEvent::CursorEnd => self.state.cursor_end(),
            UiEvent::ActivateLabel => self.state.activate_label(),
            UiEvent::ClickCounter => self.state.click_counter(),

            // Simple List
            UiEvent::ScrollToStart => self.state.scroll_to_start(),
            UiEvent::ScrollToEnd => self.state.scroll_to_end(),

            // Codelab
            UiEvent::Favorite => self.state.favorite(),
            UiEvent::ClickCard => self.state.click_card(),

            UiEvent::ViewportResized { name_rows, image_rows } => {
                self.state.resize(name_rows, image_rows)
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::label::SELECTED_BACKGROUND;
    use crate::messages::ui_events::AppTab;
    use tokio::time::timeout;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        _image_events: mpsc::UnboundedSender<ImageEvent>,
        image_rx: mpsc::UnboundedReceiver<ImageCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn(config: Config) -> Harness {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (image_events, image_events_rx) = mpsc::unbounded_channel();
        let (image_tx, image_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let actor = AppActor::new(&config, image_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, image_events_rx));
        Harness {
            ui_tx,
            _image_events: image_events,
            image_rx,
            render_rx,
            handle,
        }
    }

    fn quiet_config() -> Config {
        Config {
            fps: 200,
            color_fade_ms: 50,
            scroll_ms: 50,
            fetch_image: false,
            ..Config::default()
        }
    }

    async fn next_render(rx: &mut mpsc::UnboundedReceiver<RenderState>) -> RenderState {
        timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("render timed out")
            .expect("render channel closed")
    }

    #[tokio::test]
    async fn test_six_clicks_render_in_order() {
        let mut h = spawn(quiet_config());
        let initial = next_render(&mut h.render_rx).await;
        assert_eq!(initial.counter, 0);

        for _ in 0..6 {
            h.ui_tx.send(UiEvent::ClickCounter).unwrap();
        }
        for expected in 1..=6 {
            let render = next_render(&mut h.render_rx).await;
            assert_eq!(render.counter, expected);
        }

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_frames_drive_label_fade_to_completion() {
        let mut h = spawn(quiet_config());
        next_render(&mut h.render_rx).await;

        h.ui_tx
            .send(UiEvent::ViewportResized { name_rows: 9, image_rows: 10 })
            .unwrap();
        h.ui_tx.send(UiEvent::ActivateLabel).unwrap();

        let mut frames = 0;
        loop {
            let render = next_render(&mut h.render_rx).await;
            let first = &render.labels[0];
            if first.selected && first.background == SELECTED_BACKGROUND {
                break;
            }
            frames += 1;
        }
        // Two event renders, then at least one intermediate frame
        assert!(frames >= 3);

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_quit_cancels_fetch_and_shuts_down_loader() {
        let mut h = spawn(Config {
            fetch_image: true,
            ..quiet_config()
        });
        h.ui_tx.send(UiEvent::SwitchTab(AppTab::SimpleList)).unwrap();
        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();

        let Some(ImageCommand::Fetch { id, .. }) = h.image_rx.recv().await else {
            panic!("expected fetch first");
        };
        assert!(matches!(h.image_rx.recv().await, Some(ImageCommand::Cancel(c)) if c == id));
        assert!(matches!(h.image_rx.recv().await, Some(ImageCommand::Shutdown)));
    }
}

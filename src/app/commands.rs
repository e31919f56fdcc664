//! Command handlers - state transitions for UI events, frames and image events

use crate::app::AppState;
use crate::components::codelab;
use crate::components::list::items_in_rows;
use crate::messages::ui_events::AppTab;
use crate::messages::{ImageCommand, ImageEvent};
use crate::models::ImageStatus;

impl AppState {
    // ========================
    // Navigation
    // ========================

    /// Switch screens. Showing the image list for the first time asks the
    /// loader for the avatar.
    pub fn switch_tab(&mut self, tab: AppTab) -> Option<ImageCommand> {
        self.active_tab = tab;
        if tab == AppTab::SimpleList {
            self.request_image()
        } else {
            None
        }
    }

    pub fn resize(&mut self, name_rows: u16, image_rows: u16) {
        self.screen.names.set_viewport(name_rows);
        self.images.set_viewport(items_in_rows(image_rows, false));
    }

    // ========================
    // Sample List
    // ========================

    pub fn cursor_up(&mut self) {
        self.screen.names.move_cursor(-1);
    }

    pub fn cursor_down(&mut self) {
        self.screen.names.move_cursor(1);
    }

    pub fn page_up(&mut self) {
        self.screen.names.page(false);
    }

    pub fn page_down(&mut self) {
        self.screen.names.page(true);
    }

    pub fn cursor_home(&mut self) {
        self.screen.names.cursor_home();
    }

    pub fn cursor_end(&mut self) {
        self.screen.names.cursor_end();
    }

    pub fn activate_label(&mut self) {
        let names = &mut self.screen.names;
        if names.activate_focused() {
            tracing::debug!(
                index = names.cursor(),
                selected = names.is_selected(names.cursor()),
                "Label activated"
            );
        }
    }

    pub fn click_counter(&mut self) {
        self.screen.click_counter();
        tracing::debug!(count = self.screen.counter(), "Counter clicked");
    }

    // ========================
    // Simple List
    // ========================

    pub fn scroll_to_start(&mut self) {
        self.images.scroll_to_start();
        tracing::debug!(index = self.images.index(), "Scrolling to start");
    }

    pub fn scroll_to_end(&mut self) {
        self.images.scroll_to_end();
        tracing::debug!(index = self.images.index(), "Scrolling to end");
    }

    // ========================
    // Codelab
    // ========================

    pub fn favorite(&mut self) {
        codelab::on_favorite();
    }

    pub fn click_card(&mut self) {
        codelab::on_card_click(&self.card);
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Frames
    // ========================

    pub fn is_animating(&self) -> bool {
        self.screen.names.is_animating() || self.images.is_animating()
    }

    /// Advance every running animation one frame. Returns true if anything moved.
    pub fn tick(&mut self) -> bool {
        let labels = self.screen.names.tick();
        let scroll = self.images.tick();
        labels || scroll
    }

    // ========================
    // Image loading
    // ========================

    /// Fetch command for the avatar, unless it was already requested
    pub fn request_image(&mut self) -> Option<ImageCommand> {
        if !self.fetch_image || self.image_status != ImageStatus::Idle {
            return None;
        }
        let id = self.next_id();
        self.pending_image = Some(id);
        self.image_status = ImageStatus::Loading { received: 0 };
        tracing::info!(id, url = %self.image_url, "Requesting avatar image");
        Some(ImageCommand::Fetch {
            id,
            url: self.image_url.clone(),
            size: self.avatar_size,
        })
    }

    /// Cancel command for the avatar fetch, if one is in flight
    pub fn cancel_image(&mut self) -> Option<ImageCommand> {
        self.pending_image.take().map(ImageCommand::Cancel)
    }

    pub fn handle_image_event(&mut self, event: ImageEvent) {
        if self.pending_image != Some(event.id()) {
            tracing::debug!(id = event.id(), "Ignoring stale image event");
            return;
        }
        if event.is_terminal() {
            self.pending_image = None;
        }
        match event {
            ImageEvent::Progress { received, .. } => {
                self.image_status = ImageStatus::Loading { received };
            }
            ImageEvent::Loaded { bytes, content_type, time_ms, .. } => {
                tracing::info!(bytes, time_ms, "Avatar image loaded");
                self.image_status = ImageStatus::Loaded { bytes, content_type };
            }
            ImageEvent::Failed { message, .. } => {
                tracing::warn!(%message, "Avatar image failed");
                self.image_status = ImageStatus::Failed(message);
            }
            ImageEvent::Cancelled { .. } => {
                self.image_status = ImageStatus::Idle;
            }
        }
    }
}

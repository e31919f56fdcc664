//! App state - pure data structure with no I/O logic

use crate::components::codelab::PhotographerCard;
use crate::components::{NameList, ScrollController};
use crate::config::Config;
use crate::constants::{GREETING_COUNT, IMAGE_LIST_SIZE, SAMPLE_LIST_TITLE};
use crate::messages::ui_events::AppTab;
use crate::messages::{LabelView, RenderState};
use crate::models::{greetings, ImageStatus};

/// The Sample List screen root. Owns the click counter and nothing else;
/// each greeting label owns its own selection.
#[derive(Clone, Debug)]
pub struct SampleListScreen {
    counter: u32,
    pub names: NameList,
}

impl SampleListScreen {
    pub fn new(fade_frames: u32) -> Self {
        SampleListScreen {
            counter: 0,
            names: NameList::new(greetings(GREETING_COUNT), fade_frames),
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Forward a click to the stateless button, handing it our update callback
    pub fn click_counter(&mut self) {
        let count = self.counter;
        crate::components::counter::click(count, |next| self.counter = next);
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub active_tab: AppTab,

    // Sample List
    pub screen: SampleListScreen,

    // Simple List
    pub images: ScrollController,
    pub image_status: ImageStatus,
    pub image_url: String,
    pub avatar_size: u16,
    pub fetch_image: bool,
    pub pending_image: Option<u64>,

    // Codelab
    pub card: PhotographerCard,

    // Popups
    pub show_help: bool,

    next_request_id: u64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            active_tab: AppTab::SampleList,
            screen: SampleListScreen::new(config.fade_frames()),
            images: ScrollController::new(IMAGE_LIST_SIZE, config.scroll_frames()),
            image_status: ImageStatus::Idle,
            image_url: config.image_url.clone(),
            avatar_size: config.avatar_size,
            fetch_image: config.fetch_image,
            pending_image: None,
            card: PhotographerCard::default(),
            show_help: false,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let names = &self.screen.names;
        let labels = names
            .window()
            .filter_map(|index| {
                let item = names.item(index)?;
                let label = names.label(index)?;
                Some(LabelView {
                    index,
                    text: item.greeting(),
                    selected: label.is_selected(),
                    background: label.background(),
                })
            })
            .collect();

        RenderState {
            active_tab: self.active_tab,
            title: SAMPLE_LIST_TITLE,
            labels,
            labels_first: names.first(),
            labels_len: names.len(),
            cursor: names.cursor(),
            counter: self.screen.counter(),
            image_rows: self.images.window().collect(),
            images_first: self.images.first_visible(),
            images_len: self.images.len(),
            image_status: self.image_status.clone(),
            avatar_size: self.avatar_size,
            show_help: self.show_help,
        }
    }
}

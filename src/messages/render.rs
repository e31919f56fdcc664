//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::{DEFAULT_AVATAR_SIZE, GREETING_COUNT, IMAGE_LIST_SIZE, SAMPLE_LIST_TITLE};
use crate::messages::ui_events::AppTab;
use crate::models::{ImageStatus, Rgba};

/// One materialized greeting label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    pub index: usize,
    pub text: String,
    pub selected: bool,
    pub background: Rgba,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub active_tab: AppTab,

    // Sample List
    pub title: &'static str,
    /// Materialized labels in index order
    pub labels: Vec<LabelView>,
    pub labels_first: usize,
    pub labels_len: usize,
    pub cursor: usize,
    pub counter: u32,

    // Simple List
    /// Materialized image rows
    pub image_rows: Vec<usize>,
    pub images_first: usize,
    pub images_len: usize,
    pub image_status: ImageStatus,
    pub avatar_size: u16,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Labels to draw starting at the viewport's first index
    pub fn visible_labels(&self) -> impl Iterator<Item = &LabelView> {
        let first = self.labels_first;
        self.labels.iter().filter(move |l| l.index >= first)
    }

    /// Image rows to draw starting at the viewport's first index
    pub fn visible_image_rows(&self) -> impl Iterator<Item = usize> + '_ {
        let first = self.images_first;
        self.image_rows.iter().copied().filter(move |i| *i >= first)
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            active_tab: AppTab::SampleList,
            title: SAMPLE_LIST_TITLE,
            labels: Vec::new(),
            labels_first: 0,
            labels_len: GREETING_COUNT,
            cursor: 0,
            counter: 0,
            image_rows: Vec::new(),
            images_first: 0,
            images_len: IMAGE_LIST_SIZE,
            image_status: ImageStatus::Idle,
            avatar_size: DEFAULT_AVATAR_SIZE,
            show_help: false,
        }
    }
}

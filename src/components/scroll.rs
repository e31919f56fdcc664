//! Scroll controller - animated jumps to the start or end of a list

use std::ops::Range;

use crate::animation::Animated;
use crate::components::list::visible_window;
use crate::constants::LIST_OVERSCAN;

/// Scroll position of a fixed-length list.
///
/// `index()` is the settled position other components may observe. The
/// interpolated offset used while gliding stays inside the list renderer.
/// The offset never heads past the point where the last item sits at the
/// bottom of the viewport, so every frame of a glide moves the list.
#[derive(Clone, Debug)]
pub struct ScrollController {
    len: usize,
    index: usize,
    offset: Animated<f32>,
    viewport_items: usize,
}

impl ScrollController {
    pub fn new(len: usize, scroll_frames: u32) -> Self {
        ScrollController {
            len,
            index: 0,
            offset: Animated::new(0.0, scroll_frames),
            viewport_items: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Target index of the latest scroll request
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_running()
    }

    /// Largest first-visible index that still fills the viewport
    fn max_first(&self) -> usize {
        self.len.saturating_sub(self.viewport_items)
    }

    fn offset_for(&self, index: usize) -> f32 {
        index.min(self.max_first()) as f32
    }

    pub fn set_viewport(&mut self, viewport_items: usize) {
        let viewport_items = viewport_items.max(1);
        if viewport_items == self.viewport_items {
            return;
        }
        self.viewport_items = viewport_items;
        let offset = self.offset_for(self.index);
        if self.offset.is_running() {
            self.offset.animate_to(offset);
        } else {
            self.offset.snap_to(offset);
        }
    }

    pub fn scroll_to_start(&mut self) {
        self.animate_to_item(0);
    }

    pub fn scroll_to_end(&mut self) {
        if let Some(last) = self.len.checked_sub(1) {
            self.animate_to_item(last);
        }
    }

    /// Start gliding toward `index`. Supersedes any scroll still in flight.
    pub fn animate_to_item(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        let index = index.min(self.len - 1);
        if self.offset.is_running() && index != self.index {
            tracing::debug!(from = self.index, to = index, "Scroll superseded");
        }
        self.index = index;
        self.offset.animate_to(self.offset_for(index));
    }

    pub fn tick(&mut self) -> bool {
        self.offset.tick()
    }

    /// First item drawn this frame
    pub fn first_visible(&self) -> usize {
        (self.offset.value().round().max(0.0) as usize).min(self.max_first())
    }

    /// Indices to materialize this frame
    pub fn window(&self) -> Range<usize> {
        visible_window(self.first_visible(), self.viewport_items, self.len, LIST_OVERSCAN)
    }
}

//! List container - lazily materialized greeting labels with separators
//!
//! Only the viewport window (plus a small overscan margin) is mounted.
//! A label's selection state lives exactly as long as the label stays in
//! that window; scrolling it far enough away unmounts it.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::components::label::SelectableLabel;
use crate::constants::LIST_OVERSCAN;
use crate::models::DisplayItem;

/// Indices to materialize for a viewport starting at item `first` and
/// showing `viewport_items` items, padded by `overscan` on both sides.
///
/// The result is bounded by the viewport, never by `len`.
pub fn visible_window(first: usize, viewport_items: usize, len: usize, overscan: usize) -> Range<usize> {
    let first = first.min(len);
    let start = first.saturating_sub(overscan);
    let end = first
        .saturating_add(viewport_items)
        .saturating_add(overscan)
        .min(len);
    start..end
}

/// Separators go between consecutive items, never after the last one
pub fn has_separator_after(index: usize, len: usize) -> bool {
    index + 1 < len
}

pub fn separator_count(len: usize) -> usize {
    len.saturating_sub(1)
}

/// How many items fit in `rows`; separated items need one extra row each
/// except the last.
pub fn items_in_rows(rows: u16, separated: bool) -> usize {
    if separated {
        (rows as usize + 1) / 2
    } else {
        rows as usize
    }
}

/// Greeting list state: items, keyboard focus, viewport and mounted labels
#[derive(Clone, Debug)]
pub struct NameList {
    items: Vec<DisplayItem>,
    labels: BTreeMap<usize, SelectableLabel>,
    cursor: usize,
    first: usize,
    viewport_rows: u16,
    fade_frames: u32,
}

impl NameList {
    pub fn new(items: Vec<DisplayItem>, fade_frames: u32) -> Self {
        let mut list = NameList {
            items,
            labels: BTreeMap::new(),
            cursor: 0,
            first: 0,
            viewport_rows: 0,
            fade_frames,
        };
        list.remount();
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&DisplayItem> {
        self.items.get(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first item in the viewport
    pub fn first(&self) -> usize {
        self.first
    }

    fn viewport_items(&self) -> usize {
        items_in_rows(self.viewport_rows, true).max(1)
    }

    /// Indices currently mounted
    pub fn window(&self) -> Range<usize> {
        visible_window(self.first, self.viewport_items(), self.len(), LIST_OVERSCAN)
    }

    /// Mounted label at `index`, if any
    pub fn label(&self, index: usize) -> Option<&SelectableLabel> {
        self.labels.get(&index)
    }

    /// Selection flag of `index`; unmounted labels read as unselected
    pub fn is_selected(&self, index: usize) -> bool {
        self.labels.get(&index).is_some_and(|l| l.is_selected())
    }

    pub fn set_viewport(&mut self, rows: u16) {
        if self.viewport_rows == rows {
            return;
        }
        self.viewport_rows = rows;
        self.follow_cursor();
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.is_empty() {
            return;
        }
        let last = self.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.follow_cursor();
    }

    pub fn page(&mut self, down: bool) {
        let step = self.viewport_items() as isize;
        self.move_cursor(if down { step } else { -step });
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
        self.follow_cursor();
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.len().saturating_sub(1);
        self.follow_cursor();
    }

    /// Activate the label at `index`. Only mounted labels can be activated.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.labels.get_mut(&index) {
            Some(label) => {
                label.activate();
                true
            }
            None => false,
        }
    }

    pub fn activate_focused(&mut self) -> bool {
        self.activate(self.cursor)
    }

    pub fn is_animating(&self) -> bool {
        self.labels.values().any(|l| l.is_animating())
    }

    /// Advance every mounted label one frame
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for label in self.labels.values_mut() {
            changed |= label.tick();
        }
        changed
    }

    fn follow_cursor(&mut self) {
        let visible = self.viewport_items();
        if self.cursor < self.first {
            self.first = self.cursor;
        } else if self.cursor >= self.first + visible {
            self.first = self.cursor + 1 - visible;
        }
        let max_first = self.len().saturating_sub(visible);
        self.first = self.first.min(max_first);
        self.remount();
    }

    fn remount(&mut self) {
        let window = self.window();
        let before = self.labels.len();
        self.labels.retain(|index, _| window.contains(index));
        let unmounted = before - self.labels.len();
        for index in window.clone() {
            self.labels
                .entry(index)
                .or_insert_with(|| SelectableLabel::new(self.fade_frames));
        }
        if unmounted > 0 {
            tracing::debug!(?window, unmounted, "Greeting labels unmounted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::greetings;

    fn mounted(list: &NameList) -> usize {
        list.labels.len()
    }

    fn abc() -> NameList {
        let items = ["A", "B", "C"].into_iter().map(DisplayItem::new).collect();
        NameList::new(items, 3)
    }

    #[test]
    fn test_visible_window_pads_and_clamps() {
        assert_eq!(visible_window(0, 5, 100, 2), 0..7);
        assert_eq!(visible_window(50, 5, 100, 2), 48..57);
        assert_eq!(visible_window(98, 5, 100, 2), 96..100);
        assert_eq!(visible_window(0, 5, 0, 2), 0..0);
        assert_eq!(visible_window(500, 5, 10, 2), 8..10);
    }

    #[test]
    fn test_window_size_does_not_grow_with_list() {
        for len in [10usize, 1_000, 1_000_000] {
            let window = visible_window(len / 2, 8, len, LIST_OVERSCAN);
            assert!(window.len() <= 8 + 2 * LIST_OVERSCAN);
        }
    }

    #[test]
    fn test_separator_rule() {
        assert_eq!(separator_count(0), 0);
        assert_eq!(separator_count(1), 0);
        assert_eq!(separator_count(101), 100);
        assert!(has_separator_after(0, 2));
        assert!(!has_separator_after(1, 2));
        let counted = (0..7).filter(|i| has_separator_after(*i, 7)).count();
        assert_eq!(counted, separator_count(7));
    }

    #[test]
    fn test_items_in_rows() {
        assert_eq!(items_in_rows(1, true), 1);
        assert_eq!(items_in_rows(5, true), 3);
        assert_eq!(items_in_rows(6, true), 3);
        assert_eq!(items_in_rows(6, false), 6);
    }

    #[test]
    fn test_click_b_twice_scenario() {
        let mut list = abc();
        list.set_viewport(10);

        assert!(list.activate(1));
        assert!(!list.is_selected(0));
        assert!(list.is_selected(1));
        assert!(!list.is_selected(2));

        list.activate(1);
        assert!((0..3).all(|i| !list.is_selected(i)));
    }

    #[test]
    fn test_toggling_one_leaves_others_unchanged() {
        let mut list = NameList::new(greetings(20), 3);
        list.set_viewport(40);
        list.activate(3);
        list.activate(7);
        let before: Vec<bool> = (0..20).map(|i| list.is_selected(i)).collect();

        list.activate(12);
        for i in 0..20 {
            if i != 12 {
                assert_eq!(list.is_selected(i), before[i], "item {} changed", i);
            }
        }
        assert!(list.is_selected(12));
    }

    #[test]
    fn test_only_window_is_mounted() {
        let mut list = NameList::new(greetings(101), 3);
        list.set_viewport(9);
        // 9 rows hold 5 separated items, plus overscan after
        assert_eq!(list.window(), 0..7);
        assert_eq!(mounted(&list), 7);
        assert!(list.label(50).is_none());
        assert!(!list.activate(50));
    }

    #[test]
    fn test_cursor_drags_viewport_and_unmounts() {
        let mut list = NameList::new(greetings(101), 3);
        list.set_viewport(9);
        list.activate_focused();
        assert!(list.is_selected(0));

        list.cursor_end();
        assert_eq!(list.cursor(), 100);
        assert_eq!(list.first(), 96);
        assert!(list.label(0).is_none());
        assert!(!list.is_selected(0));

        list.cursor_home();
        assert_eq!(list.first(), 0);
        assert!(!list.is_selected(0));
    }

    #[test]
    fn test_move_cursor_clamps() {
        let mut list = abc();
        list.move_cursor(-5);
        assert_eq!(list.cursor(), 0);
        list.move_cursor(50);
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut list = NameList::new(Vec::new(), 3);
        list.set_viewport(10);
        list.move_cursor(1);
        list.cursor_end();
        assert!(!list.activate_focused());
        assert_eq!(mounted(&list), 0);
    }
}

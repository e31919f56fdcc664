//! Selectable label - a greeting that highlights itself when activated

use crate::animation::Animated;
use crate::models::Rgba;

/// Background of a selected label
pub const SELECTED_BACKGROUND: Rgba = Rgba::RED;

/// Background of an unselected label
pub const UNSELECTED_BACKGROUND: Rgba = Rgba::TRANSPARENT;

/// Per-label state: the selection flag and its animated background.
///
/// Owned by exactly one mounted label node. Toggling never touches any
/// other label.
#[derive(Clone, Debug)]
pub struct SelectableLabel {
    selected: bool,
    background: Animated<Rgba>,
}

impl SelectableLabel {
    /// Fresh, unselected label whose fade spans `fade_frames` frames
    pub fn new(fade_frames: u32) -> Self {
        SelectableLabel {
            selected: false,
            background: Animated::new(UNSELECTED_BACKGROUND, fade_frames),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Flip the selection flag and start fading toward the matching color
    pub fn activate(&mut self) {
        self.selected = !self.selected;
        self.background.animate_to(background_for(self.selected));
    }

    /// Background to draw this frame
    pub fn background(&self) -> Rgba {
        self.background.value()
    }

    pub fn is_animating(&self) -> bool {
        self.background.is_running()
    }

    pub fn tick(&mut self) -> bool {
        self.background.tick()
    }
}

/// Resting background for a selection flag
pub fn background_for(selected: bool) -> Rgba {
    if selected {
        SELECTED_BACKGROUND
    } else {
        UNSELECTED_BACKGROUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(label: &mut SelectableLabel) {
        while label.tick() {}
    }

    #[test]
    fn test_starts_unselected_and_transparent() {
        let label = SelectableLabel::new(5);
        assert!(!label.is_selected());
        assert!(label.background().is_transparent());
        assert!(!label.is_animating());
    }

    #[test]
    fn test_activate_toggles_and_fades() {
        let mut label = SelectableLabel::new(5);
        label.activate();
        assert!(label.is_selected());
        // Color changes over frames, not instantly
        assert_eq!(label.background(), UNSELECTED_BACKGROUND);
        assert!(label.is_animating());

        settle(&mut label);
        assert_eq!(label.background(), SELECTED_BACKGROUND);

        label.activate();
        assert!(!label.is_selected());
        settle(&mut label);
        assert_eq!(label.background(), UNSELECTED_BACKGROUND);
    }

    #[test]
    fn test_double_activation_mid_fade_returns_to_default() {
        let mut label = SelectableLabel::new(10);
        label.activate();
        label.tick();
        label.activate();
        assert!(!label.is_selected());
        settle(&mut label);
        assert_eq!(label.background(), UNSELECTED_BACKGROUND);
    }
}

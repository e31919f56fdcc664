//! Counter button - stateless; the caller owns the count

use crate::constants::COUNTER_ACTIVE_THRESHOLD;
use crate::models::Rgba;

/// Button background once the count is above the threshold
pub const ACTIVE_BACKGROUND: Rgba = Rgba::GREEN;

/// Button background at or below the threshold
pub const IDLE_BACKGROUND: Rgba = Rgba::WHITE;

/// Color of the embedded count
pub const COUNT_COLOR: Rgba = Rgba::RED;

pub fn is_active(count: u32) -> bool {
    count > COUNTER_ACTIVE_THRESHOLD
}

pub fn background(count: u32) -> Rgba {
    if is_active(count) {
        ACTIVE_BACKGROUND
    } else {
        IDLE_BACKGROUND
    }
}

/// Button label split around the count: (before, count, after)
pub fn label_parts(count: u32) -> (&'static str, String, &'static str) {
    ("I have been clicked ", count.to_string(), " times")
}

/// Handle a click: hands `count + 1` to whoever owns the count
pub fn click(count: u32, update: impl FnOnce(u32)) {
    update(count.saturating_add(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n_clicks_yield_n() {
        let mut count = 0;
        for _ in 0..42 {
            let current = count;
            click(current, |next| count = next);
        }
        assert_eq!(count, 42);
    }

    #[test]
    fn test_active_only_above_threshold() {
        assert_eq!(background(0), IDLE_BACKGROUND);
        assert_eq!(background(5), IDLE_BACKGROUND);
        assert_eq!(background(6), ACTIVE_BACKGROUND);
        assert!(is_active(u32::MAX));
    }

    #[test]
    fn test_six_clicks_scenario() {
        let mut count = 0;
        for click_no in 1..=6 {
            let current = count;
            click(current, |next| count = next);
            assert_eq!(is_active(count), click_no == 6);
        }
        let (before, value, after) = label_parts(count);
        assert_eq!(format!("{}{}{}", before, value, after), "I have been clicked 6 times");
    }

    #[test]
    fn test_click_saturates() {
        let mut count = u32::MAX;
        let current = count;
        click(current, |next| count = next);
        assert_eq!(count, u32::MAX);
    }
}

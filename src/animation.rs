//! Frame-driven animations
//!
//! Animations do not own a timer. The app actor ticks every running
//! animation once per frame, so all of them advance in lockstep on the
//! same task that owns the state they animate.
//!
//! Each animated property holds at most one transition. Starting a new one
//! replaces the in-flight transition, beginning from the value currently
//! displayed.

use std::time::Duration;

use crate::models::Rgba;

/// Values that can be blended between two endpoints
pub trait Interpolate: Copy + PartialEq {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Rgba {
    fn lerp(self, to: Self, t: f32) -> Self {
        let channel = |a: u8, b: u8| (a as f32).lerp(b as f32, t).round().clamp(0.0, 255.0) as u8;
        Rgba {
            r: channel(self.r, to.r),
            g: channel(self.g, to.g),
            b: channel(self.b, to.b),
            a: channel(self.a, to.a),
        }
    }
}

/// Cubic ease-out: fast start, gentle landing
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Number of frames an animation of `duration` spans at `fps`. Never zero.
pub fn frames_for(duration: Duration, fps: u16) -> u32 {
    let frames = (duration.as_secs_f64() * fps.max(1) as f64).round() as u32;
    frames.max(1)
}

/// A single from -> to transition over a fixed number of frames
#[derive(Clone, Copy, Debug)]
struct Transition<T> {
    from: T,
    to: T,
    frame: u32,
    frames: u32,
}

impl<T: Interpolate> Transition<T> {
    fn value(&self) -> T {
        let t = self.frame as f32 / self.frames as f32;
        self.from.lerp(self.to, ease_out_cubic(t))
    }

    fn is_finished(&self) -> bool {
        self.frame >= self.frames
    }
}

/// A value that glides toward its target one frame at a time
#[derive(Clone, Debug)]
pub struct Animated<T> {
    current: T,
    transition: Option<Transition<T>>,
    frames: u32,
}

impl<T: Interpolate> Animated<T> {
    pub fn new(value: T, frames: u32) -> Self {
        Animated {
            current: value,
            transition: None,
            frames: frames.max(1),
        }
    }

    /// Value to draw this frame
    pub fn value(&self) -> T {
        self.current
    }

    /// Value the animation is heading to (or resting at)
    pub fn target(&self) -> T {
        self.transition.map(|t| t.to).unwrap_or(self.current)
    }

    pub fn is_running(&self) -> bool {
        self.transition.is_some()
    }

    /// Retarget. An in-flight transition is replaced, starting from the
    /// currently displayed value.
    pub fn animate_to(&mut self, target: T) {
        if self.target() == target {
            return;
        }
        self.transition = Some(Transition {
            from: self.current,
            to: target,
            frame: 0,
            frames: self.frames,
        });
    }

    /// Jump to a value without animating
    pub fn snap_to(&mut self, value: T) {
        self.current = value;
        self.transition = None;
    }

    /// Advance one frame. Returns true if the displayed value may have changed.
    pub fn tick(&mut self) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.frame += 1;
        self.current = transition.value();
        if transition.is_finished() {
            self.current = transition.to;
            self.transition = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_for_rounds_and_never_returns_zero() {
        assert_eq!(frames_for(Duration::from_millis(300), 60), 18);
        assert_eq!(frames_for(Duration::ZERO, 60), 1);
        assert_eq!(frames_for(Duration::from_millis(500), 0), 1);
    }

    #[test]
    fn test_animation_lands_exactly_on_target() {
        let mut value = Animated::new(0.0_f32, 4);
        value.animate_to(10.0);
        let mut ticks = 0;
        while value.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 4);
        assert_eq!(value.value(), 10.0);
        assert!(!value.is_running());
    }

    #[test]
    fn test_retarget_starts_from_displayed_value() {
        let mut color = Animated::new(Rgba::TRANSPARENT, 10);
        color.animate_to(Rgba::RED);
        color.tick();
        color.tick();
        let midway = color.value();
        assert_ne!(midway, Rgba::TRANSPARENT);
        assert_ne!(midway, Rgba::RED);

        color.animate_to(Rgba::TRANSPARENT);
        assert_eq!(color.value(), midway);
        assert_eq!(color.target(), Rgba::TRANSPARENT);

        color.tick();
        assert!(color.value().a < midway.a);
    }

    #[test]
    fn test_snap_cancels_transition() {
        let mut value = Animated::new(0.0_f32, 10);
        value.animate_to(5.0);
        value.tick();
        value.snap_to(2.0);
        assert!(!value.is_running());
        assert!(!value.tick());
        assert_eq!(value.value(), 2.0);
    }
}

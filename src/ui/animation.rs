//! Frame-driven show/hide transitions using `iced_anim`
//!
//! Every animated surface (toast, dialog, busy overlay) owns one
//! [`Transition`] that tweens 0.0..=1.0 and is advanced by the shared
//! `AnimationTick` subscription. Retargeting an in-flight transition
//! (e.g. closing a dialog during its entrance) reuses the same animated
//! value, so there is never an orphaned frame loop to race against.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Entrance/exit duration (matches the portal's 300ms CSS transitions)
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Progress below this is treated as fully hidden
const HIDDEN_EPSILON: f32 = 0.01;

fn transition_easing() -> Easing {
    Easing::EASE.with_duration(TRANSITION_DURATION)
}

/// A single show/hide fade transition
#[derive(Debug)]
pub struct Transition {
    anim: Animated<f32>,
}

impl Default for Transition {
    fn default() -> Self {
        Self::hidden()
    }
}

impl Transition {
    /// Create a transition resting in the hidden state
    pub fn hidden() -> Self {
        Self {
            anim: Animated::transition(0.0, transition_easing()),
        }
    }

    /// Animate towards fully visible
    pub fn show(&mut self) {
        self.anim.update(1.0.into());
    }

    /// Animate towards fully hidden
    pub fn hide(&mut self) {
        self.anim.update(0.0.into());
    }

    /// Current progress (0.0 hidden .. 1.0 visible)
    pub fn progress(&self) -> f32 {
        *self.anim.value()
    }

    /// Whether the tween is still moving
    pub fn is_animating(&self) -> bool {
        self.anim.is_animating()
    }

    /// Whether the transition has fully settled in the hidden state
    pub fn is_settled_hidden(&self) -> bool {
        self.progress() < HIDDEN_EPSILON && !self.is_animating()
    }

    /// Advance the tween; must be called on each animation frame
    pub fn tick(&mut self, now: Instant) {
        self.anim.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let t = Transition::hidden();
        assert_eq!(t.progress(), 0.0);
        assert!(t.is_settled_hidden());
    }

    #[test]
    fn show_leaves_hidden_state() {
        let mut t = Transition::hidden();
        t.show();
        assert!(!t.is_settled_hidden());
        assert!(t.is_animating() || t.progress() > 0.0);
    }

    #[test]
    fn retarget_mid_flight_keeps_progress_in_range() {
        let mut t = Transition::hidden();
        t.show();
        t.tick(Instant::now());
        // Reverse before the entrance finishes
        t.hide();
        t.tick(Instant::now());
        assert!(t.progress() >= 0.0);
        assert!(t.progress() <= 1.0);
    }
}

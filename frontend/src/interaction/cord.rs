//! Pull-cord light switch.
//!
//! A gesture starts with [`CordState::press`], follows the pointer with
//! [`CordState::drag_to`] and ends with [`CordState::release`]. The offset
//! is clamped to `[0, max]` and the light flips at most once per gesture.

use std::rc::Rc;

use yew::prelude::*;

/// What a pull past the threshold does to the light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePolicy {
    /// First full pull turns the light on and it stays on.
    Latch,
    /// Every full pull flips the light.
    Toggle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CordConfig {
    max: f64,
    threshold: f64,
    policy: GesturePolicy,
}

impl CordConfig {
    /// `threshold` is clamped into `(0, max]` so a pull to `max` always counts.
    pub fn new(max: f64, threshold: f64, policy: GesturePolicy) -> Self {
        let max = max.max(1.0);
        let threshold = if threshold > 0.0 { threshold.min(max) } else { max };
        Self { max, threshold, policy }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn policy(&self) -> GesturePolicy {
        self.policy
    }
}

impl Default for CordConfig {
    fn default() -> Self {
        Self::new(80.0, 70.0, GesturePolicy::Toggle)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CordState {
    config: CordConfig,
    offset: f64,
    origin: Option<f64>,
    light_on: bool,
    toggled: bool,
}

impl CordState {
    pub fn new(config: CordConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            origin: None,
            light_on: false,
            toggled: false,
        }
    }

    pub fn press(&mut self, y: f64) {
        self.origin = Some(y);
        self.offset = 0.0;
        self.toggled = false;
    }

    /// Returns the new light state when this move flipped it.
    pub fn drag_to(&mut self, y: f64) -> Option<bool> {
        let origin = self.origin?;
        self.offset = (y - origin).clamp(0.0, self.config.max);

        if self.offset < self.config.threshold || self.toggled {
            return None;
        }
        self.toggled = true;

        match self.config.policy {
            GesturePolicy::Toggle => self.light_on = !self.light_on,
            GesturePolicy::Latch if self.light_on => return None,
            GesturePolicy::Latch => self.light_on = true,
        }
        Some(self.light_on)
    }

    pub fn release(&mut self) {
        self.origin = None;
        self.offset = 0.0;
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    pub fn config(&self) -> &CordConfig {
        &self.config
    }

    /// Pull progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.offset / self.config.max
    }
}

impl Default for CordState {
    fn default() -> Self {
        Self::new(CordConfig::default())
    }
}

pub enum CordAction {
    Press(f64),
    Move(f64),
    Release,
}

impl Reducible for CordState {
    type Action = CordAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CordAction::Move(_) | CordAction::Release if !self.is_dragging() => self,
            CordAction::Press(y) => {
                let mut next = (*self).clone();
                next.press(y);
                next.into()
            }
            CordAction::Move(y) => {
                let mut next = (*self).clone();
                if let Some(on) = next.drag_to(y) {
                    log::debug!("Cord pulled, light {}", if on { "on" } else { "off" });
                }
                if next == *self {
                    return self;
                }
                next.into()
            }
            CordAction::Release => {
                let mut next = (*self).clone();
                next.release();
                next.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_cord() -> CordState {
        CordState::new(CordConfig::new(80.0, 70.0, GesturePolicy::Toggle))
    }

    #[test]
    fn short_pull_leaves_light_unchanged() {
        let mut cord = toggle_cord();
        cord.press(100.0);
        for y in [110.0, 140.0, 169.0, 120.0] {
            assert_eq!(cord.drag_to(y), None);
        }
        cord.release();
        assert!(!cord.light_on());
        assert_eq!(cord.offset(), 0.0);
        assert!(!cord.is_dragging());
    }

    #[test]
    fn pull_past_threshold_toggles_once() {
        let mut cord = toggle_cord();
        cord.press(0.0);
        assert_eq!(cord.drag_to(90.0), Some(true));
        assert_eq!(cord.offset(), 80.0);
        cord.release();
        assert!(cord.light_on());
        assert_eq!(cord.offset(), 0.0);
    }

    #[test]
    fn recrossing_threshold_in_one_gesture_does_not_flip_again() {
        let mut cord = toggle_cord();
        cord.press(0.0);
        let flips = [75.0, 10.0, 78.0, 0.0, 200.0, 30.0, 71.0]
            .into_iter()
            .filter_map(|y| cord.drag_to(y))
            .count();
        assert_eq!(flips, 1);
        assert!(cord.light_on());
    }

    #[test]
    fn each_gesture_flips_under_toggle() {
        let mut cord = toggle_cord();
        for expected in [true, false, true] {
            cord.press(20.0);
            cord.drag_to(100.0);
            cord.release();
            assert_eq!(cord.light_on(), expected);
        }
    }

    #[test]
    fn offset_stays_within_bounds() {
        let mut cord = toggle_cord();
        cord.press(50.0);
        for y in [-300.0, 0.0, 49.0, 50.0, 90.0, 130.0, 131.0, 1e6] {
            cord.drag_to(y);
            assert!((0.0..=80.0).contains(&cord.offset()), "offset {}", cord.offset());
            assert!((0.0..=1.0).contains(&cord.progress()));
        }
    }

    #[test]
    fn latch_stays_on() {
        let mut cord = CordState::new(CordConfig::new(80.0, 80.0, GesturePolicy::Latch));
        cord.press(0.0);
        assert_eq!(cord.drag_to(79.0), None);
        assert_eq!(cord.drag_to(80.0), Some(true));
        cord.release();

        cord.press(0.0);
        assert_eq!(cord.drag_to(100.0), None);
        cord.release();
        assert!(cord.light_on());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut cord = toggle_cord();
        assert_eq!(cord.drag_to(500.0), None);
        assert_eq!(cord.offset(), 0.0);
    }

    #[test]
    fn threshold_is_clamped_to_max() {
        let config = CordConfig::new(60.0, 90.0, GesturePolicy::Toggle);
        assert_eq!(config.threshold(), 60.0);
        let config = CordConfig::new(60.0, 0.0, GesturePolicy::Toggle);
        assert_eq!(config.threshold(), 60.0);
    }

    #[test]
    fn reducer_follows_gesture() {
        let state = Rc::new(toggle_cord());
        let state = state.reduce(CordAction::Move(100.0));
        assert!(!state.is_dragging());

        let state = state.reduce(CordAction::Press(10.0));
        let state = state.reduce(CordAction::Move(95.0));
        assert_eq!(state.offset(), 80.0);
        assert!(state.light_on());

        let state = state.reduce(CordAction::Release);
        assert_eq!(state.offset(), 0.0);
        assert!(state.light_on());
    }
}

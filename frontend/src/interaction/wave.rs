//! Decorative motion of the pull cord: a sine sway driven by a phase
//! accumulator, plus the springy return of the handle after release.

use std::f64::consts::PI;
use std::rc::Rc;

use yew::prelude::*;

/// Phase added on every tick.
pub const PHASE_STEP: f64 = 0.12;

/// Ticks the handle takes to spring back after release.
pub const RETURN_TICKS: u32 = 30;

/// Handle travelling back to rest after a drag ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringReturn {
    from: f64,
    elapsed: u32,
}

impl SpringReturn {
    pub fn new(from: f64) -> Self {
        Self { from, elapsed: 0 }
    }

    /// Displayed offset. Overshoots slightly past rest before settling.
    pub fn offset(&self) -> f64 {
        let t = (self.elapsed as f64 / RETURN_TICKS as f64).min(1.0);
        self.from * (1.0 - ease_out_back(t))
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= RETURN_TICKS
    }
}

fn ease_out_back(t: f64) -> f64 {
    const C1: f64 = 1.70158;
    const C3: f64 = C1 + 1.0;
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveState {
    phase: f64,
    spring: Option<SpringReturn>,
    pulled: f64,
}

impl WaveState {
    pub fn tick(&mut self) {
        self.phase += PHASE_STEP;
        if let Some(spring) = self.spring.as_mut() {
            spring.elapsed += 1;
            if spring.is_done() {
                self.spring = None;
            }
        }
    }

    pub fn release_from(&mut self, offset: f64) {
        self.spring = (offset > 0.0).then(|| SpringReturn::new(offset));
    }

    /// Follows the cord. While dragging it remembers the pull and drops any
    /// running spring; when the drag ends it springs back from the last pull.
    pub fn track(&mut self, dragging: bool, offset: f64) {
        if dragging {
            self.pulled = offset;
            self.spring = None;
        } else if self.pulled > 0.0 {
            let from = std::mem::take(&mut self.pulled);
            self.release_from(from);
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Offset to draw while the handle is springing back.
    pub fn return_offset(&self) -> Option<f64> {
        self.spring.map(|spring| spring.offset())
    }

    pub fn is_returning(&self) -> bool {
        self.spring.is_some()
    }
}

pub enum WaveAction {
    Tick,
    Track { dragging: bool, offset: f64 },
}

impl Reducible for WaveState {
    type Action = WaveAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            WaveAction::Tick => next.tick(),
            WaveAction::Track { dragging, offset } => next.track(dragging, offset),
        }
        if next == *self {
            self
        } else {
            next.into()
        }
    }
}

/// The ticker only runs while someone is interacting with the cord, or while
/// the handle is still springing back.
pub fn should_animate(hovered: bool, dragging: bool, returning: bool) -> bool {
    hovered || dragging || returning
}

/// Where the cord hangs inside its SVG viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CordGeometry {
    pub anchor_x: f64,
    pub rest_length: f64,
    pub amplitude: f64,
}

impl Default for CordGeometry {
    fn default() -> Self {
        Self {
            anchor_x: 30.0,
            rest_length: 120.0,
            amplitude: 6.0,
        }
    }
}

impl CordGeometry {
    /// Y coordinate of the handle for a given pull offset.
    pub fn handle_y(&self, offset: f64) -> f64 {
        self.rest_length + offset
    }
}

/// Cubic bezier from the anchor to the handle. The control points sway with
/// `phase` and the sway flattens out as `progress` approaches 1.
pub fn cord_path(geometry: &CordGeometry, offset: f64, progress: f64, phase: f64) -> String {
    let end_y = geometry.handle_y(offset);
    let sway = geometry.amplitude * (1.0 - 0.8 * progress.clamp(0.0, 1.0));
    let x = geometry.anchor_x;

    let c1x = x + sway * phase.sin();
    let c2x = x - sway * (phase + PI * 0.6).sin();

    format!(
        "M {x:.2} 0 C {c1x:.2} {:.2}, {c2x:.2} {:.2}, {x:.2} {end_y:.2}",
        end_y / 3.0,
        end_y * 2.0 / 3.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_only_grows() {
        let mut state = Rc::new(WaveState::default());
        let mut last = state.phase();
        for _ in 0..100 {
            state = state.reduce(WaveAction::Tick);
            assert!(state.phase() > last);
            last = state.phase();
        }
    }

    #[test]
    fn animates_only_while_active() {
        assert!(!should_animate(false, false, false));
        assert!(should_animate(true, false, false));
        assert!(should_animate(false, true, false));
        assert!(should_animate(false, false, true));
    }

    #[test]
    fn spring_settles_at_rest() {
        let mut wave = WaveState::default();
        wave.release_from(64.0);
        let start = wave.return_offset().unwrap();
        assert!((start - 64.0).abs() < 1e-9);

        for _ in 0..RETURN_TICKS - 1 {
            wave.tick();
            assert!(wave.is_returning());
        }
        wave.tick();
        assert!(!wave.is_returning());
        assert_eq!(wave.return_offset(), None);
    }

    #[test]
    fn spring_reaches_zero_on_last_frame() {
        let spring = SpringReturn { from: 50.0, elapsed: RETURN_TICKS };
        assert!(spring.offset().abs() < 1e-9);
        assert!(spring.is_done());
    }

    #[test]
    fn drag_end_springs_from_last_pull() {
        let mut wave = WaveState::default();
        wave.track(true, 20.0);
        wave.track(true, 64.0);
        assert!(!wave.is_returning());

        wave.track(false, 0.0);
        let start = wave.return_offset().unwrap();
        assert!((start - 64.0).abs() < 1e-9);

        // Repeated idle updates do not restart the spring.
        wave.tick();
        let mid = wave.return_offset().unwrap();
        wave.track(false, 0.0);
        assert_eq!(wave.return_offset(), Some(mid));
    }

    #[test]
    fn press_during_spring_cancels_it() {
        let state = Rc::new(WaveState::default());
        let state = state.reduce(WaveAction::Track { dragging: true, offset: 64.0 });
        let state = state.reduce(WaveAction::Track { dragging: false, offset: 0.0 });
        let state = state.reduce(WaveAction::Tick);
        assert!(state.is_returning());

        let state = state.reduce(WaveAction::Track { dragging: true, offset: 0.0 });
        assert!(!state.is_returning());
        assert_eq!(state.return_offset(), None);
    }

    #[test]
    fn idle_tracking_leaves_state_untouched() {
        let state = Rc::new(WaveState::default());
        let same = state.clone().reduce(WaveAction::Track { dragging: false, offset: 0.0 });
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn release_at_rest_does_not_spring() {
        let mut wave = WaveState::default();
        wave.release_from(0.0);
        assert!(!wave.is_returning());
    }

    #[test]
    fn path_runs_from_anchor_to_handle() {
        let geometry = CordGeometry::default();
        let path = cord_path(&geometry, 40.0, 0.5, 1.3);
        assert!(path.starts_with("M 30.00 0 C "));
        assert!(path.ends_with(", 30.00 160.00"));
    }

    #[test]
    fn sway_follows_phase_and_tension() {
        let geometry = CordGeometry::default();
        let still = cord_path(&geometry, 0.0, 0.0, 0.0);
        assert!(still.contains("C 30.00 40.00"));

        let relaxed = cord_path(&geometry, 0.0, 0.0, 1.0);
        let taut = cord_path(&geometry, 80.0, 1.0, 1.0);
        assert_ne!(relaxed, taut);
    }
}

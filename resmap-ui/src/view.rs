//! Camera flight to a reservoir.
//!
//! A flight runs two timed view animations at once: a pan to the target,
//! and a zoom sub-animation that backs out one level before dropping onto
//! the target zoom. [`AnimationJoin`] merges their completion reports so
//! the caller's callback fires exactly once — when the last phase
//! completes, or as soon as any phase is cut short by a user gesture.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::js_bridge;

/// Total flight time in milliseconds; the zoom phase spends half on each leg.
pub const FLIGHT_DURATION_MS: f64 = 2000.0;

/// Zoom level a flight lands on.
pub const FLIGHT_TARGET_ZOOM: f64 = 11.0;

/// Countdown join over N animation phases with a once-only latch.
#[derive(Debug)]
pub struct AnimationJoin {
    remaining: Cell<u32>,
    called: Cell<bool>,
}

impl AnimationJoin {
    pub fn new(parts: u32) -> Self {
        AnimationJoin {
            remaining: Cell::new(parts),
            called: Cell::new(false),
        }
    }

    /// Record one phase's completion report.
    ///
    /// Returns `Some(outcome)` the single time the joint outcome becomes
    /// known: `Some(true)` once every phase has completed, `Some(false)`
    /// on the first phase that reports an interruption. All later reports
    /// return `None`.
    pub fn phase_done(&self, complete: bool) -> Option<bool> {
        if self.called.get() {
            return None;
        }
        self.remaining.set(self.remaining.get().saturating_sub(1));
        if self.remaining.get() == 0 || !complete {
            self.called.set(true);
            Some(complete)
        } else {
            None
        }
    }
}

/// Fly the view to `(longitude, latitude)` and report the joint outcome
/// through `on_done` exactly once.
pub fn fly_to(lon: f64, lat: f64, on_done: impl FnMut(bool) + 'static) {
    let join = Rc::new(AnimationJoin::new(2));
    let done: Rc<RefCell<Box<dyn FnMut(bool)>>> = Rc::new(RefCell::new(Box::new(on_done)));

    let pan_done = phase_callback(join.clone(), done.clone());
    let zoom_done = phase_callback(join, done);

    let zoom = js_bridge::view_zoom();
    js_bridge::animate_center(lon, lat, FLIGHT_DURATION_MS, &pan_done);
    js_bridge::animate_zoom(
        zoom - 1.0,
        FLIGHT_TARGET_ZOOM,
        FLIGHT_DURATION_MS / 2.0,
        &zoom_done,
    );

    // The map library holds these until each animation settles; they must
    // outlive this call.
    pan_done.forget();
    zoom_done.forget();
}

fn phase_callback(
    join: Rc<AnimationJoin>,
    done: Rc<RefCell<Box<dyn FnMut(bool)>>>,
) -> Closure<dyn FnMut(bool)> {
    Closure::new(move |complete: bool| {
        if let Some(outcome) = join.phase_done(complete) {
            (done.borrow_mut())(outcome);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_true_once_when_both_phases_complete() {
        let join = AnimationJoin::new(2);
        assert_eq!(join.phase_done(true), None);
        assert_eq!(join.phase_done(true), Some(true));
    }

    #[test]
    fn test_fires_false_on_first_interrupt() {
        let join = AnimationJoin::new(2);
        assert_eq!(join.phase_done(false), Some(false));
        // The other phase's report arrives later and must be swallowed.
        assert_eq!(join.phase_done(true), None);
    }

    #[test]
    fn test_interrupt_after_completed_phase() {
        let join = AnimationJoin::new(2);
        assert_eq!(join.phase_done(true), None);
        assert_eq!(join.phase_done(false), Some(false));
    }

    #[test]
    fn test_never_fires_twice() {
        let join = AnimationJoin::new(2);
        assert_eq!(join.phase_done(false), Some(false));
        assert_eq!(join.phase_done(false), None);
        assert_eq!(join.phase_done(true), None);
    }
}

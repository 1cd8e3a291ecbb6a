//! Lazy enumeration of candidate legs on a stepped grid.
//!
//! Model
//! - `StepRange`: `step, 2·step, 3·step, …` while the value stays `<= bound`.
//!   Values are `k · step`, never a running sum, so they stay exact multiples.
//! - `Candidates`: x ascending, then y ascending up to `min(max_y, x)`, which
//!   yields each right triangle once with `x >= y`.

use crate::params::Params;
use crate::triple::Triple;

/// Ascending multiples of `step` up to and including `bound`.
#[derive(Clone, Copy, Debug)]
pub struct StepRange {
    step: f64,
    bound: f64,
    k: u64,
}

impl StepRange {
    /// `step` must be positive and finite; `Params::validate` guarantees this.
    #[inline]
    pub fn new(step: f64, bound: f64) -> Self {
        debug_assert!(step > 0.0 && step.is_finite());
        Self { step, bound, k: 1 }
    }
}

impl Iterator for StepRange {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        let v = self.k as f64 * self.step;
        if v <= self.bound {
            self.k += 1;
            Some(v)
        } else {
            None
        }
    }
}

/// Restartable stream of `Triple` candidates in grid order.
#[derive(Clone, Debug)]
pub struct Candidates {
    xs: StepRange,
    step_y: f64,
    max_y: f64,
    current: Option<(f64, StepRange)>,
}

impl Candidates {
    pub fn new(params: &Params) -> Self {
        Self {
            xs: StepRange::new(params.step_x, params.max_x),
            step_y: params.step_y,
            max_y: params.max_y,
            current: None,
        }
    }
}

impl Iterator for Candidates {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        loop {
            if let Some((x, ys)) = self.current.as_mut() {
                if let Some(y) = ys.next() {
                    return Some(Triple::new(*x, y));
                }
            }
            let x = self.xs.next()?;
            self.current = Some((x, StepRange::new(self.step_y, self.max_y.min(x))));
        }
    }
}

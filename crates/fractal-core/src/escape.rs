use std::f64::consts::LN_2;

use crate::{Complex, Fractal};

/// Orbits whose squared magnitude exceeds this are treated as diverging.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

// ---------------------------------------------------------------------------
// IterationResult
// ---------------------------------------------------------------------------

/// Terminal state of the escape loop for one plane point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationResult {
    /// The orbit left the escape radius after `iterations` steps. `smooth`
    /// is the continuous iteration count, `iterations − ln(ln(val))/ln(2)`
    /// with `val` the squared magnitude at the moment of escape.
    Escaped { iterations: u32, smooth: f64 },
    /// The orbit ran to the iteration cap without leaving the radius.
    Bounded,
}

impl IterationResult {
    pub fn escaped(&self) -> bool {
        matches!(self, IterationResult::Escaped { .. })
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Run the escape-time recurrence for the plane point `c`.
///
/// The radius is tested before each step and the step is counted after it
/// is applied, so an orbit that leaves the radius exactly on the step that
/// reaches `max_iterations` still counts as `Bounded`.
pub fn escape_time(fractal: &dyn Fractal, c: Complex, max_iterations: u32) -> IterationResult {
    if fractal.known_bounded(c) {
        return IterationResult::Bounded;
    }

    let mut z = Complex::ZERO;
    let mut val = 0.0;
    let mut iterations = 0;
    while val <= ESCAPE_RADIUS_SQ && iterations < max_iterations {
        z = fractal.step(z, c);
        val = z.norm_sqr();
        iterations += 1;
    }

    if iterations == max_iterations {
        IterationResult::Bounded
    } else {
        // val > 4 here, so the nested log is always defined.
        let smooth = f64::from(iterations) - val.ln().ln() / LN_2;
        IterationResult::Escaped { iterations, smooth }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

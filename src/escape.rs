//! Escape-time classification of a single point.

use num_complex::Complex64;

/// Orbits whose modulus exceeds this are treated as divergent.
pub const ESCAPE_RADIUS: f64 = 4.0;

/// Outcome of iterating `z ← z² + c` from `z = c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Escape {
    /// The orbit left the escape radius. `iteration` is the zero-based step at
    /// which it did and `magnitude` is `|z|` at that step.
    Divergent { iteration: u32, magnitude: f64 },
    /// The orbit stayed inside the escape radius for every step.
    Bounded,
}

impl Escape {
    pub fn is_bounded(&self) -> bool {
        matches!(self, Escape::Bounded)
    }
}

/// Runs `maxiters + 1` steps of the Mandelbrot iteration for `c`.
///
/// The test is against the true modulus `|z|`, not `|z|²`.
pub fn classify(c: Complex64, maxiters: u32) -> Escape {
    let mut z = c;
    for iteration in 0..=maxiters {
        z = z * z + c;
        let magnitude = z.norm();
        if magnitude > ESCAPE_RADIUS {
            return Escape::Divergent {
                iteration,
                magnitude,
            };
        }
    }
    Escape::Bounded
}

//! Injectable randomness.
//!
//! Every random decision the engine makes (topic pick, decoy pick, decoy
//! sentence pick, shuffle partner) is a uniform index draw, so the capability
//! is a single method. Any `rand::Rng` is a `RandomSource`; tests can plug in
//! a scripted source to pin exact option orderings.

use rand::Rng;

pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is always non-zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

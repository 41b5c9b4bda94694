//! RNG module - where new piece shapes come from
//!
//! The controller draws shapes through the [`ShapeSource`] trait so games can
//! be driven by a seeded LCG in play or by a fixed script in tests and
//! replays.

/// A source of uniform random integers.
pub trait ShapeSource {
    /// Next value in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would only ever produce the increment sequence.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // state = a * state + c (mod 2^32), a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are far better distributed than the low ones.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Current state, usable as a seed to resume the same sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.next_range(bound as u32) as usize
    }
}

/// Replays a fixed list of indices, cycling when it runs out.
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "scripted source needs at least one index");
        Self { script, cursor: 0 }
    }
}

impl ShapeSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        value % bound
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for &mut S {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

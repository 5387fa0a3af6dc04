//! Seeded linear congruential generator driving the shuffle.
//!
//! `x' = (1664525 * x + 1013904223) mod 2^32`, output `x' / 2^32`.
//! Wrapping `u32` arithmetic is the `mod 2^32`, so the sequence is identical
//! on every platform.

pub const MULTIPLIER: u32 = 1_664_525;
pub const INCREMENT: u32 = 1_013_904_223;
pub const MODULUS: f64 = 4_294_967_296.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Pure step: the successor generator and the state it produced.
    pub fn step(self) -> (Self, u32) {
        let next = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        (Self { state: next }, next)
    }

    pub fn next_u32(&mut self) -> u32 {
        let (next, value) = self.step();
        *self = next;
        value
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / MODULUS
    }

    /// `floor(r * bound)` for the next `r`, computed exactly in integers.
    ///
    /// Always `< bound` for `bound >= 1`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        let scaled = (u128::from(self.next_u32()) * bound as u128) >> 32;
        scaled as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_zero_reference_sequence() {
        let mut lcg = Lcg::new(0);
        assert_eq!(lcg.next_u32(), 1_013_904_223);
        assert_eq!(lcg.next_u32(), 1_196_435_762);
        assert_eq!(lcg.next_u32(), 3_519_870_697);
    }

    #[test]
    fn test_wraps_modulo_2_pow_32() {
        let mut lcg = Lcg::new(u32::MAX);
        assert_eq!(lcg.next_u32(), 1_012_239_698);
        assert_eq!(lcg.next_u32(), 806_866_057);
    }

    #[test]
    fn test_first_fraction_for_seed_zero() {
        let mut lcg = Lcg::new(0);
        assert_eq!(lcg.next_f64(), 1_013_904_223.0 / MODULUS);
    }

    #[test]
    fn test_step_is_pure() {
        let lcg = Lcg::new(42);
        let (a, va) = lcg.step();
        let (b, vb) = lcg.step();
        assert_eq!(a, b);
        assert_eq!(va, vb);
        assert_eq!(lcg.state(), 42);
        assert_eq!(a.state(), va);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Lcg::new(0xDEAD_BEEF);
        let mut b = Lcg::new(0xDEAD_BEEF);
        for _ in 0..1_000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_fractions_stay_below_one() {
        let mut lcg = Lcg::new(7);
        for _ in 0..10_000 {
            let r = lcg.next_f64();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_next_index_matches_float_floor() {
        let mut ints = Lcg::new(0x1A2B_3C4D);
        let mut floats = Lcg::new(0x1A2B_3C4D);
        for bound in 1..2_000usize {
            let j = ints.next_index(bound);
            let expected = (floats.next_f64() * bound as f64).floor() as usize;
            assert_eq!(j, expected);
            assert!(j < bound);
        }
    }
}

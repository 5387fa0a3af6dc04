use crate::core::lcg::Lcg;

// Fisher-Yates, per Knuth: i runs n-1 down to 1, one draw per step.
// https://en.wikipedia.org/wiki/Fisher%E2%80%93Yates_shuffle

/// Returns a seeded permutation of `items`; the input slice is left untouched.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut result = items.to_vec();
    shuffle_in_place(&mut result, seed);
    result
}

pub fn shuffle_in_place<T>(items: &mut [T], seed: u32) {
    let mut rng = Lcg::new(seed);
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

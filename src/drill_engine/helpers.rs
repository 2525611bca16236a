//! Small shared builders used by every pattern generator.

use rand::{Rng, RngCore};

/// Uniformly pick one entry of a non-empty lexicon table.
///
/// All callers pass lexicon tables, which are never empty.
pub fn pick<'a, T, R: RngCore + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn pick_reaches_every_entry() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c", "d", "e"];
        let seen: HashSet<&str> = (0..200).map(|_| *pick(&mut rng, &items)).collect();
        assert_eq!(seen.len(), items.len());
    }
}

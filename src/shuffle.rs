use rand::Rng;

/// In-place Fisher-Yates shuffle: for each i from the last index down to 1,
/// swap with a uniformly drawn j in [0, i]. Only used for the initial display
/// order, never for scoring.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_output_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<u32> = (0..8).collect();
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut rng);

        assert_eq!(shuffled.len(), original.len());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_empty_and_single_are_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![7];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn test_positions_are_roughly_uniform() {
        // 1000 trials over 8 elements: each element lands in each position
        // 125 times in expectation. Allow a generous band; this is a sanity
        // check for bias, not a chi-squared test.
        const TRIALS: usize = 1000;
        const N: usize = 8;
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = [[0usize; N]; N];

        for _ in 0..TRIALS {
            let mut items: Vec<usize> = (0..N).collect();
            shuffle(&mut items, &mut rng);
            for (pos, &elem) in items.iter().enumerate() {
                counts[elem][pos] += 1;
            }
        }

        for (elem, row) in counts.iter().enumerate() {
            for (pos, &count) in row.iter().enumerate() {
                assert!(
                    (50..=220).contains(&count),
                    "element {} at position {} occurred {} times",
                    elem,
                    pos,
                    count
                );
            }
        }
    }
}

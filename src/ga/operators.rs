//! Genetic operators: order crossover and adjacent-swap mutation.

use rand::Rng;

/// Order crossover (OX) between two equal-length permutations.
///
/// A contiguous segment `[start, end)` is chosen uniformly (`start` in
/// `[0, n-1]`, `end` in `[start+1, n]`) and copied from `parent_a` into the
/// same positions of the child. The remaining positions are filled in
/// ascending order with `parent_b`'s genes in `parent_b`'s own order,
/// skipping genes already present in the segment.
///
/// The child is always a permutation of the same index set as its parents:
/// the fill writes into a fixed-size buffer by target position, so earlier
/// fills can never shift later ones.
///
/// # Examples
///
/// ```
/// use evoroute::ga::order_crossover;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let a: Vec<usize> = (0..10).collect();
/// let b: Vec<usize> = (0..10).rev().collect();
/// let child = order_crossover(&a, &b, &mut rng);
///
/// let mut sorted = child.clone();
/// sorted.sort();
/// assert_eq!(sorted, a);
/// ```
pub fn order_crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent_a.len();
    debug_assert_eq!(n, parent_b.len());
    if n == 0 {
        return Vec::new();
    }

    let start = rng.random_range(0..n);
    let end = rng.random_range(start + 1..=n);

    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];
    for pos in start..end {
        child[pos] = parent_a[pos];
        in_segment[parent_a[pos]] = true;
    }

    let mut donor = parent_b.iter().copied().filter(|&g| !in_segment[g]);
    for pos in (0..start).chain(end..n) {
        child[pos] = donor
            .next()
            .expect("parents must be permutations of the same index set");
    }

    child
}

/// With probability `probability`, swaps two adjacent genes at a uniformly
/// random position. A single Bernoulli trial per individual, not per gene.
/// No-op for tours shorter than 2.
///
/// # Examples
///
/// ```
/// use evoroute::ga::swap_mutation;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let mut genes = vec![0, 1, 2, 3];
/// swap_mutation(&mut genes, 1.0, &mut rng);
///
/// let mut sorted = genes.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3]);
/// ```
pub fn swap_mutation<R: Rng>(genes: &mut [usize], probability: f64, rng: &mut R) {
    if genes.len() < 2 {
        return;
    }
    if rng.random::<f64>() < probability {
        let i = rng.random_range(0..genes.len() - 1);
        genes.swap(i, i + 1);
    }
}

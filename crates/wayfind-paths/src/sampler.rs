use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

/// Draws elements with probability proportional to their weight.
///
/// Adding an element twice accumulates its weight. Elements keep their
/// insertion order, which makes draws reproducible under a seeded RNG.
#[derive(Clone, Debug)]
pub struct WeightedSampler<T> {
    entries: Vec<(T, f64)>,
    index: HashMap<T, usize>,
    total: f64,
}

impl<T> Default for WeightedSampler<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            total: 0.0,
        }
    }
}

impl<T> WeightedSampler<T>
where
    T: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to `element`, inserting it if needed.
    ///
    /// Weights must be non-negative. A zero-weight element is only drawn
    /// when every weight is zero.
    pub fn add(&mut self, element: T, weight: f64) {
        debug_assert!(weight >= 0.0, "negative sampling weight {weight}");
        match self.index.get(&element) {
            Some(&i) => self.entries[i].1 += weight,
            None => {
                self.index.insert(element, self.entries.len());
                self.entries.push((element, weight));
            }
        }
        self.total += weight;
    }

    /// Accumulated weight of `element`, `None` if it was never added.
    pub fn weight_of(&self, element: &T) -> Option<f64> {
        self.index.get(element).map(|&i| self.entries[i].1)
    }

    /// Sum of all weights.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw one element, `None` only if the sampler is empty.
    ///
    /// Scans the entries with a uniform value in `[0, total)`. If rounding
    /// runs the scan off the end, or every weight is zero, an element is
    /// picked uniformly instead.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        let mut value = rng.random::<f64>() * self.total;
        for &(element, weight) in &self.entries {
            if value < weight {
                return Some(element);
            }
            value -= weight;
        }
        let i = rng.random_range(0..self.entries.len());
        Some(self.entries[i].0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn duplicate_add_accumulates() {
        let mut s = WeightedSampler::new();
        s.add('a', 3.0);
        s.add('a', 2.0);
        assert_eq!(s.weight_of(&'a'), Some(5.0));
        assert_eq!(s.total_weight(), 5.0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.weight_of(&'b'), None);
    }

    #[test]
    fn single_element_always_drawn() {
        let mut s = WeightedSampler::new();
        s.add('a', 3.0);
        s.add('a', 2.0);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            assert_eq!(s.sample(&mut rng), Some('a'));
        }
    }

    #[test]
    fn empty_sampler_draws_nothing() {
        let s: WeightedSampler<u32> = WeightedSampler::new();
        assert!(s.is_empty());
        assert_eq!(s.sample(&mut StdRng::seed_from_u64(0)), None);
    }

    #[test]
    fn zero_weight_is_never_drawn_beside_positive_weight() {
        let mut s = WeightedSampler::new();
        s.add(1u32, 0.0);
        s.add(2u32, 1.0);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            assert_eq!(s.sample(&mut rng), Some(2));
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let mut s = WeightedSampler::new();
        s.add(1u32, 0.0);
        s.add(2u32, 0.0);
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let x = s.sample(&mut rng).unwrap();
            seen[x as usize] = true;
        }
        assert!(seen[1] && seen[2]);
    }

    #[test]
    fn frequencies_follow_weights() {
        let mut s = WeightedSampler::new();
        s.add(0usize, 1.0);
        s.add(1usize, 3.0);
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = [0u32; 2];
        for _ in 0..20_000 {
            counts[s.sample(&mut rng).unwrap()] += 1;
        }
        let ratio = f64::from(counts[1]) / f64::from(counts[0]);
        assert!((2.6..3.4).contains(&ratio), "ratio {ratio}");
    }
}

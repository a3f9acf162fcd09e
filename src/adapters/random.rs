use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LOREM_POOL: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "in",
    "pharetra", "nisi", "auctor", "tempus",
];

/// Source of randomness for value generation.
///
/// Generation code only talks to this trait so that tests can replay a fixed
/// sequence and assert exact outputs.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Returns `low` when the range is empty.
    fn int_between(&mut self, low: i64, high: i64) -> i64;

    /// Any 64-bit integer, negative values included.
    fn any_i64(&mut self) -> i64;

    /// Float in `low..high`. Returns `low` when the range is empty.
    fn float_between(&mut self, low: f64, high: f64) -> f64;

    fn coin(&mut self) -> bool;

    /// Uniform index into a collection of `len` elements; `len` must be > 0.
    fn index(&mut self, len: usize) -> usize {
        self.int_between(0, len.saturating_sub(1) as i64) as usize
    }

    /// A single filler word.
    fn word(&mut self) -> String {
        LOREM_POOL[self.index(LOREM_POOL.len())].to_string()
    }
}

/// Production source, seeded from OS entropy. Not reproducible.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn int_between(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn any_i64(&mut self) -> i64 {
        self.rng.gen()
    }

    fn float_between(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..high)
    }

    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn word(&mut self) -> String {
        Word().fake_with_rng::<String, _>(&mut self.rng)
    }
}

/// Replays a fixed list of values, starting over when exhausted.
///
/// Every draw consumes one value. Range requests clamp the value into the
/// range: a queued 9 asked for a value in `1..=5` yields 5. `coin` is `true`
/// for any non-zero value.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<i64>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    fn next_value(&mut self) -> i64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

impl RandomSource for SequenceSource {
    fn int_between(&mut self, low: i64, high: i64) -> i64 {
        let value = self.next_value();
        if low >= high {
            return low;
        }
        value.clamp(low, high)
    }

    fn any_i64(&mut self) -> i64 {
        self.next_value()
    }

    fn float_between(&mut self, low: f64, high: f64) -> f64 {
        let value = self.next_value() as f64;
        if low >= high {
            return low;
        }
        // largest step below `high` that is still representable
        let below_high = high - (high.abs() * f64::EPSILON).max(f64::MIN_POSITIVE);
        value.clamp(low, below_high.max(low))
    }

    fn coin(&mut self) -> bool {
        self.next_value() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_source_ranges() {
        let mut source = EntropySource::new();
        for _ in 0..500 {
            let value = source.int_between(1, 9999);
            assert!((1..=9999).contains(&value));

            let float = source.float_between(1.0, 10000.0);
            assert!((1.0..10000.0).contains(&float));

            assert!(source.index(3) < 3);
        }
    }

    #[test]
    fn test_entropy_source_words() {
        let mut source = EntropySource::new();
        let word = source.word();
        assert!(!word.is_empty());
        assert!(!word.contains(' '));
    }

    #[test]
    fn test_empty_ranges_return_low() {
        let mut source = EntropySource::new();
        assert_eq!(source.int_between(4, 4), 4);
        assert_eq!(source.int_between(5, 1), 5);
        assert_eq!(source.float_between(2.0, 2.0), 2.0);
    }

    #[test]
    fn test_sequence_source_replays_and_clamps() {
        let mut source = SequenceSource::new(vec![3, 9, -2]);
        assert_eq!(source.int_between(1, 5), 3);
        assert_eq!(source.int_between(1, 5), 5);
        assert_eq!(source.int_between(1, 5), 1);
        // wraps around
        assert_eq!(source.any_i64(), 3);
        assert!(source.coin());
        assert_eq!(source.float_between(1.0, 100.0), 1.0);
    }

    #[test]
    fn test_sequence_source_float_excludes_upper_bound() {
        let mut source = SequenceSource::new(vec![10000, 50_000, 250]);
        for _ in 0..3 {
            let float = source.float_between(1.0, 10000.0);
            assert!((1.0..10000.0).contains(&float));
        }
        assert_eq!(source.float_between(1.0, 10000.0), 10000.0 - 10000.0 * f64::EPSILON);
    }

    #[test]
    fn test_sequence_source_words_come_from_pool() {
        let mut source = SequenceSource::new(vec![0, 1]);
        assert_eq!(source.word(), "lorem");
        assert_eq!(source.word(), "ipsum");
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        let mut source = SequenceSource::new(vec![]);
        assert_eq!(source.any_i64(), 0);
        assert!(!source.coin());
    }
}

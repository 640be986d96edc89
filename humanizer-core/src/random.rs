use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Picks one element uniformly at random.
///
/// Returns `None` if `items` is empty.
pub fn sample<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
	items.choose(rng)
}

/// Returns `true` with the given probability.
///
/// Uses a uniform draw in `[0, 1)`, so `0.0` never succeeds and `1.0`
/// always does. Values outside `[0, 1]` behave like the nearest bound.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
	if probability <= 0.0 {
		return false;
	}
	rng.random::<f64>() < probability
}

/// Returns a shuffled copy of `items`. The input slice is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
	let mut shuffled = items.to_vec();
	shuffled.shuffle(rng);
	shuffled
}

/// Returns an integer in `[min, max]` (both inclusive).
///
/// Swapped bounds are accepted and normalized.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
	let (low, high) = if min <= max { (min, max) } else { (max, min) };
	rng.random_range(low..=high)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn sample_returns_none_on_empty_slice() {
		let mut rng = StdRng::seed_from_u64(1);
		let empty: [&str; 0] = [];
		assert!(sample(&mut rng, &empty).is_none());
	}

	#[test]
	fn sample_stays_within_items() {
		let mut rng = StdRng::seed_from_u64(2);
		let items = ["a", "b", "c"];
		for _ in 0..100 {
			let picked = sample(&mut rng, &items).unwrap();
			assert!(items.contains(picked));
		}
	}

	#[test]
	fn chance_bounds_are_exact() {
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..1000 {
			assert!(!chance(&mut rng, 0.0));
			assert!(chance(&mut rng, 1.0));
		}
	}

	#[test]
	fn chance_roughly_follows_probability() {
		let mut rng = StdRng::seed_from_u64(4);
		let hits = (0..10_000).filter(|_| chance(&mut rng, 0.3)).count();
		assert!((2_500..3_500).contains(&hits), "got {hits} hits");
	}

	#[test]
	fn shuffle_keeps_elements_and_original() {
		let mut rng = StdRng::seed_from_u64(5);
		let items = vec![1, 2, 3, 4, 5, 6, 7, 8];
		let mut shuffled = shuffle(&mut rng, &items);
		assert_eq!(items, vec![1, 2, 3, 4, 5, 6, 7, 8]);
		shuffled.sort();
		assert_eq!(shuffled, items);
	}

	#[test]
	fn random_int_is_inclusive() {
		let mut rng = StdRng::seed_from_u64(6);
		let mut seen_min = false;
		let mut seen_max = false;
		for _ in 0..1000 {
			let n = random_int(&mut rng, 3, 1);
			assert!((1..=3).contains(&n));
			seen_min |= n == 1;
			seen_max |= n == 3;
		}
		assert!(seen_min && seen_max);
	}
}

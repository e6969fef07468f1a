use std::collections::{HashMap, HashSet};

use rand::Rng;


/// Maximum number of draws attempted while filling the requested sample size.
const MAX_RETRIES: usize = 100;

/// Draws one index from a categorical distribution using inverse-CDF sampling.
///
/// Accumulates probabilities until the running sum exceeds a uniform draw.
/// Rounding can leave the accumulated sum just below 1.0, in which case the
/// last index is returned.
fn sample_index<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> usize {
	let r: f64 = rng.random();
	let mut acc = 0.0;
	for (index, probability) in probabilities.iter().enumerate() {
		acc += probability;
		if r < acc {
			return index;
		}
	}
	probabilities.len() - 1
}

/// Samples a subset of a token frequency map via softmax-weighted draws.
///
/// Counts are converted to a probability distribution with
/// `exp(count / temperature)` and repeatedly drawn from until up to
/// `max_outputs` distinct keys are accumulated, or the retry budget of
/// 100 draws is exhausted. The returned map is the restriction of
/// `frequencies` to the drawn keys; values are the original counts and
/// are NOT renormalized.
///
/// Temperature controls concentration: high values flatten the
/// distribution toward a diverse pool, low values sharpen it toward a
/// near-argmax pick. A temperature of 0.0 (or below) is handled as the
/// limiting case and returns the single highest-count entry.
///
/// ## Notes
/// - Entries are visited in sorted key order, so a seeded `rng` makes the
///   draw sequence reproducible across runs.
/// - Scores are max-shifted before exponentiation; the resulting
///   distribution is unchanged and large counts cannot overflow.
/// - An empty `frequencies` map yields an empty result.
pub fn softmax_sample<R: Rng + ?Sized>(
	frequencies: &HashMap<String, usize>,
	temperature: f64,
	max_outputs: usize,
	rng: &mut R,
) -> HashMap<String, usize> {
	if frequencies.is_empty() || max_outputs == 0 {
		return HashMap::new();
	}

	let mut entries: Vec<(&String, usize)> = frequencies.iter().map(|(key, count)| (key, *count)).collect();
	entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

	let max_count = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);

	// Limiting case: the distribution collapses onto the highest count,
	// so every draw would return the same entry. Ties break on key order.
	if temperature <= 0.0 {
		// Should not fail, entries is non-empty
		return entries
			.iter()
			.find(|(_, count)| *count == max_count)
			.map(|(key, count)| HashMap::from([((*key).to_owned(), *count)]))
			.unwrap_or_default();
	}

	let scores: Vec<f64> = entries
		.iter()
		.map(|(_, count)| ((*count as f64 - max_count as f64) / temperature).exp())
		.collect();
	let sum: f64 = scores.iter().sum();
	let probabilities: Vec<f64> = scores.iter().map(|score| score / sum).collect();

	let wanted = max_outputs.min(entries.len());
	let mut selected: HashSet<usize> = HashSet::new();
	let mut attempts = 0;
	while attempts < MAX_RETRIES && selected.len() < wanted {
		selected.insert(sample_index(&probabilities, rng));
		attempts += 1;
	}

	selected
		.into_iter()
		.map(|index| (entries[index].0.to_owned(), entries[index].1))
		.collect()
}

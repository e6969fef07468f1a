use super::state::State;
use super::vocabulary::Vocabulary;
use rand::Rng;
use rand::prelude::IteratorRandom;
use std::collections::HashMap;

/// Represents a first-order Markov chain model over word tokens.
///
/// The `MarkovModel` owns the token corpus, the vocabulary derived from it,
/// and the transition table mapping every distinct token to the frequency
/// of the tokens observed immediately after it.
///
/// # Responsibilities
/// - Build the corpus and vocabulary from raw training text
/// - Accumulate successor counts for each distinct token
/// - Expose successor frequencies for next-token sampling
///
/// # Invariants
/// - The corpus and vocabulary are derived deterministically from the text
///   and never mutated afterward
/// - Every token with at least one non-final occurrence has a non-empty
///   state; a token occurring only at the final position has no state
#[derive(Clone, Debug)]
pub struct MarkovModel {
	/// Ordered token sequence produced from the training text.
	corpus: Vec<String>,

	/// Distinct tokens and their occurrence positions.
	vocabulary: Vocabulary,

	/// Mapping from a token to its successor frequencies.
	states: HashMap<String, State>,
}

impl MarkovModel {
	/// Builds the corpus and vocabulary from raw training text.
	///
	/// The text is split on runs of whitespace; each token is recorded in
	/// the vocabulary along with its corpus position. Empty or
	/// whitespace-only text produces an empty corpus.
	///
	/// The transition table stays empty until [`train`](Self::train) is
	/// called.
	pub fn build(text: &str) -> Self {
		let corpus: Vec<String> = text.split_whitespace().map(str::to_owned).collect();

		let mut vocabulary = Vocabulary::new();
		for (position, token) in corpus.iter().enumerate() {
			vocabulary.record(token, position);
		}

		Self { corpus, vocabulary, states: HashMap::new() }
	}

	/// Trains the transition table from the corpus and vocabulary.
	///
	/// For every distinct token, walks its recorded positions and counts
	/// the token found immediately after each one. The final corpus
	/// position has no successor and is skipped, so a token occurring only
	/// there gets no state.
	///
	/// # Notes
	/// - Retraining replaces the previous table.
	pub fn train(&mut self) {
		self.states.clear();

		for token in self.vocabulary.tokens() {
			let mut state = State::new();

			// Should not fail, every vocabulary token has recorded positions
			if let Some(positions) = self.vocabulary.positions(token) {
				for &position in positions {
					if let Some(successor) = self.corpus.get(position + 1) {
						state.add_transition(successor);
					}
				}
			}

			if !state.is_empty() {
				self.states.insert(token.clone(), state);
			}
		}
	}

	/// Returns the successor frequencies of `token`.
	///
	/// Returns `None` if the token is unknown or was only ever observed at
	/// the final corpus position (no continuation exists).
	pub fn successors(&self, token: &str) -> Option<&HashMap<String, usize>> {
		Some(self.states.get(token)?.successors())
	}

	/// Returns a random token (seed) from the vocabulary.
	///
	/// Useful for starting a generation sequence.
	/// Returns `None` if the model has no tokens.
	pub fn random_token<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.vocabulary.tokens().iter().choose(rng).map(String::as_str)
	}

	/// The full ordered token sequence of the training text.
	pub fn corpus(&self) -> &[String] {
		&self.corpus
	}

	/// Number of tokens in the corpus.
	pub fn corpus_size(&self) -> usize {
		self.corpus.len()
	}

	/// Number of distinct tokens.
	pub fn vocabulary_size(&self) -> usize {
		self.vocabulary.size()
	}

	/// Returns `true` if the training text held no token at all.
	pub fn is_empty(&self) -> bool {
		self.corpus.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CORPUS: &str = "the cat sat the cat ran the dog sat";

	fn trained(text: &str) -> MarkovModel {
		let mut model = MarkovModel::build(text);
		model.train();
		model
	}

	#[test]
	fn building_twice_is_deterministic() {
		let first = MarkovModel::build(CORPUS);
		let second = MarkovModel::build(CORPUS);

		assert_eq!(first.corpus(), second.corpus());
		assert_eq!(first.vocabulary.tokens(), second.vocabulary.tokens());
		for token in first.vocabulary.tokens() {
			assert_eq!(first.vocabulary.positions(token), second.vocabulary.positions(token));
		}
	}

	#[test]
	fn whitespace_runs_delimit_tokens() {
		let model = MarkovModel::build("  the\tcat \n sat  ");

		assert_eq!(model.corpus(), ["the", "cat", "sat"]);
		assert_eq!(model.vocabulary_size(), 3);
	}

	#[test]
	fn empty_text_yields_an_empty_model() {
		for text in ["", "   \n\t  "] {
			let model = trained(text);
			assert!(model.is_empty());
			assert_eq!(model.corpus_size(), 0);
			assert_eq!(model.vocabulary_size(), 0);
			assert!(model.states.is_empty());
		}
	}

	#[test]
	fn successor_counts_match_the_corpus() {
		let model = trained(CORPUS);

		let the = model.successors("the").unwrap();
		assert_eq!(the.get("cat"), Some(&2));
		assert_eq!(the.get("dog"), Some(&1));
		assert_eq!(the.len(), 2);

		let cat = model.successors("cat").unwrap();
		assert_eq!(cat.get("sat"), Some(&1));
		assert_eq!(cat.get("ran"), Some(&1));
	}

	#[test]
	fn transition_counts_are_conserved() {
		let model = trained(CORPUS);

		// For every token, the transition total equals the number of its
		// occurrences at a non-final corpus position
		let last = model.corpus_size() - 1;
		for token in model.vocabulary.tokens() {
			let non_final = model
				.vocabulary
				.positions(token)
				.unwrap()
				.iter()
				.filter(|&&position| position != last)
				.count();
			let total = model.states.get(token).map(State::total).unwrap_or(0);
			assert_eq!(total, non_final, "token {token}");
		}
	}

	#[test]
	fn final_only_token_has_no_state() {
		// "sat" also occurs mid-corpus, but "end" only closes it
		let model = trained("the cat sat the end");

		assert_eq!(model.successors("end"), None);
		assert!(model.successors("the").is_some());
	}

	#[test]
	fn unknown_token_has_no_successors() {
		let model = trained(CORPUS);
		assert_eq!(model.successors("shrek"), None);
	}

	#[test]
	fn random_token_comes_from_the_vocabulary() {
		use rand::SeedableRng;
		use rand::rngs::StdRng;

		let model = trained(CORPUS);
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..10 {
			let token = model.random_token(&mut rng).unwrap();
			assert!(model.vocabulary.tokens().contains(&token.to_owned()));
		}

		assert_eq!(trained("").random_token(&mut rng), None);
	}
}

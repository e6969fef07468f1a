use crate::io;
use crate::model::generation_input::{GenerationInput, SeedWord};
use crate::model::markov_model::MarkovModel;
use crate::model::sampler;
use rand::Rng;
use std::collections::HashMap;
use std::path::Path;

/// High-level generator managing one trained model per dataset.
///
/// # Responsibilities
/// - Build and train a `MarkovModel` for every named dataset
/// - Resolve the seed token for a generation run
/// - Walk the chain, applying the two-stage sampling at every step
#[derive(Debug)]
pub struct Generator {
	models: HashMap<String, MarkovModel>,
}

impl Generator {
	/// Creates a generator from a mapping of dataset name to raw text.
	///
	/// Every dataset is tokenized and trained immediately; the resulting
	/// models are read-only for the lifetime of the generator.
	pub fn new(datasets: HashMap<String, String>) -> Self {
		let mut models = HashMap::new();
		for (name, text) in datasets {
			let mut model = MarkovModel::build(&text);
			model.train();
			models.insert(name, model);
		}
		Self { models }
	}

	/// Creates a generator by loading all `.txt` datasets from a directory.
	///
	/// # Parameters
	/// - `filepath`: Path to a directory containing dataset files.
	///   Both `"folder"` and `"folder/"` are accepted.
	///
	/// # Behavior
	/// - Lists all files with the `.txt` extension in the given directory.
	/// - The dataset name is derived from the file name (without extension).
	///
	/// # Errors
	/// - Returns an error if the path does not exist or is not a directory.
	/// - Returns an error if a dataset fails to load.
	///
	/// # Notes
	/// - Only files directly contained in the directory are loaded
	///   (subdirectories are ignored).
	pub fn from_dir<P: AsRef<Path>>(filepath: P) -> Result<Self, Box<dyn std::error::Error>> {
		let string_path = match filepath.as_ref().to_str() {
			Some(s) => s,
			None => return Err("Invalid filepath".into()),
		};
		// Normalize "folder" / "folder/"
		let folder = io::normalize_folder(string_path);

		if !folder.is_dir() {
			return Err(format!("Expected a directory, got: {}", folder.display()).into());
		}

		Ok(Self::new(io::load_datasets(&folder)?))
	}

	/// Returns the list of loaded dataset names.
	pub fn dataset_names(&self) -> Vec<String> {
		self.models.keys().map(|k| k.to_owned()).collect::<Vec<_>>()
	}

	/// Returns the trained model for `name`, if loaded.
	pub fn model(&self, name: &str) -> Option<&MarkovModel> {
		self.models.get(name)
	}

	/// Picks the next token after `token`, or `None` if the chain ends.
	///
	/// A token with no recorded continuation (unknown, or only ever seen at
	/// the final corpus position) terminates the walk; the sampler is never
	/// invoked on an empty map.
	fn next_token<R: Rng + ?Sized>(
		model: &MarkovModel,
		input: &GenerationInput,
		token: &str,
		rng: &mut R,
	) -> Option<String> {
		let candidates = model.successors(token)?;

		// Stage 1: flatten the distribution to admit a pool of plausible
		// continuations
		let pool = sampler::softmax_sample(candidates, input.pool_temperature(), input.pool_size(), rng);
		// Stage 2: sharpen over the pool and commit to a single winner
		sampler::softmax_sample(&pool, input.pick_temperature(), 1, rng).into_keys().next()
	}

	/// Generates a token sequence using an explicit random source.
	///
	/// The sequence starts with the resolved seed token and grows by one
	/// sampled continuation per step, up to `input.length` additions.
	/// Reaching a token with no continuation stops the walk early; the
	/// sequence is returned as-is rather than padded.
	///
	/// Passing a seeded `StdRng` makes the run reproducible.
	///
	/// # Errors
	/// - The dataset named by `input` is not loaded.
	/// - A random seed was requested from an empty model.
	pub fn generate_sequence_with<R: Rng + ?Sized>(
		&self,
		input: &GenerationInput,
		rng: &mut R,
	) -> Result<Vec<String>, String> {
		let model = match self.models.get(&input.dataset) {
			Some(model) => model,
			None => return Err(format!("Dataset '{}' not found", input.dataset)),
		};

		let seed = match &input.seed {
			SeedWord::Custom(token) => token.to_owned(),
			SeedWord::Random => match model.random_token(rng) {
				Some(token) => token.to_owned(),
				None => return Err("No seed available for generation".to_owned()),
			},
		};

		let mut current = seed.clone();
		let mut sequence = vec![seed];
		for _ in 0..input.length {
			match Self::next_token(model, input, &current, rng) {
				Some(token) => {
					sequence.push(token.clone());
					current = token;
				}
				None => break,
			}
		}

		Ok(sequence)
	}

	/// Generates a token sequence using the thread-local random source.
	pub fn generate_sequence(&self, input: &GenerationInput) -> Result<Vec<String>, String> {
		self.generate_sequence_with(input, &mut rand::rng())
	}

	/// Generates a sequence and joins it into a whitespace-separated string.
	pub fn generate(&self, input: &GenerationInput) -> Result<String, String> {
		Ok(self.generate_sequence(input)?.join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const CORPUS: &str = "the cat sat the cat ran the dog sat";

	fn generator() -> Generator {
		Generator::new(HashMap::from([("test".to_owned(), CORPUS.to_owned())]))
	}

	fn input(seed: &str, length: usize) -> GenerationInput {
		let mut input = GenerationInput::new("test");
		input.seed = SeedWord::Custom(seed.to_owned());
		input.length = length;
		input
	}

	#[test]
	fn zero_length_returns_only_the_seed() {
		let mut rng = StdRng::seed_from_u64(7);
		let sequence = generator().generate_sequence_with(&input("the", 0), &mut rng).unwrap();
		assert_eq!(sequence, ["the"]);
	}

	#[test]
	fn unknown_seed_stops_immediately() {
		let mut rng = StdRng::seed_from_u64(7);
		let sequence = generator().generate_sequence_with(&input("shrek", 10), &mut rng).unwrap();
		assert_eq!(sequence, ["shrek"]);
	}

	#[test]
	fn every_step_follows_an_observed_transition() {
		let generator = generator();
		let model = generator.model("test").unwrap();

		let mut rng = StdRng::seed_from_u64(42);
		let sequence = generator.generate_sequence_with(&input("the", 30), &mut rng).unwrap();

		assert_eq!(sequence[0], "the");
		for pair in sequence.windows(2) {
			let successors = model.successors(&pair[0]).unwrap();
			assert!(successors.contains_key(&pair[1]), "{} -> {}", pair[0], pair[1]);
		}
	}

	#[test]
	fn walk_stops_at_the_terminal_token() {
		// "end" closes the corpus and has no successor
		let generator = Generator::new(HashMap::from([("test".to_owned(), "one way to the end".to_owned())]));

		let mut rng = StdRng::seed_from_u64(7);
		let sequence = generator.generate_sequence_with(&input("one", 50), &mut rng).unwrap();

		assert_eq!(sequence, ["one", "way", "to", "the", "end"]);
	}

	#[test]
	fn seeded_generation_is_reproducible() {
		let generator = generator();

		let mut first_rng = StdRng::seed_from_u64(42);
		let mut second_rng = StdRng::seed_from_u64(42);
		let first = generator.generate_sequence_with(&input("the", 40), &mut first_rng).unwrap();
		let second = generator.generate_sequence_with(&input("the", 40), &mut second_rng).unwrap();

		assert_eq!(first, second);
	}

	#[test]
	fn random_seed_comes_from_the_vocabulary() {
		let generator = generator();
		let mut generation_input = GenerationInput::new("test");
		generation_input.seed = SeedWord::Random;
		generation_input.length = 0;

		let mut rng = StdRng::seed_from_u64(7);
		let sequence = generator.generate_sequence_with(&generation_input, &mut rng).unwrap();
		assert!(CORPUS.split_whitespace().any(|token| token == sequence[0]));
	}

	#[test]
	fn unknown_dataset_is_an_error() {
		let mut generation_input = GenerationInput::new("missing");
		generation_input.seed = SeedWord::Custom("the".to_owned());

		let mut rng = StdRng::seed_from_u64(7);
		assert!(generator().generate_sequence_with(&generation_input, &mut rng).is_err());
	}

	#[test]
	fn empty_dataset_never_continues() {
		let generator = Generator::new(HashMap::from([("empty".to_owned(), "   ".to_owned())]));

		let mut generation_input = GenerationInput::new("empty");
		generation_input.seed = SeedWord::Custom("the".to_owned());
		generation_input.length = 10;

		let mut rng = StdRng::seed_from_u64(7);
		let sequence = generator.generate_sequence_with(&generation_input, &mut rng).unwrap();
		assert_eq!(sequence, ["the"]);

		// A random seed cannot be drawn from an empty vocabulary
		generation_input.seed = SeedWord::Random;
		assert!(generator.generate_sequence_with(&generation_input, &mut rng).is_err());
	}

	#[test]
	fn generated_string_is_whitespace_joined() {
		let generator = Generator::new(HashMap::from([("test".to_owned(), "one way out".to_owned())]));
		let generated = generator.generate(&input("one", 10)).unwrap();
		assert_eq!(generated, "one way out");
	}
}

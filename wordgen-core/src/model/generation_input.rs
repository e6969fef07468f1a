/// Strategy used to select the seed token when generating a sequence.
///
/// The seed becomes the first element of the generated sequence and the
/// starting point of the chain walk.
///
/// # Variants
/// - `Custom(String)`: use the provided token as the seed.
/// - `Random`: pick a uniformly random token from the model vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedWord {
	Custom(String),
	Random,
}

/// Input parameters for generating a sequence from a trained model.
///
/// `GenerationInput` contains both **selection parameters** (dataset name,
/// seed strategy, sequence length) and the **two sampling stages** applied
/// at every step: a pool stage whose high temperature flattens the successor
/// distribution into a diverse candidate pool, and a pick stage whose low
/// temperature collapses that pool toward a near-argmax winner.
///
/// # Responsibilities
/// - Track generation parameters (`dataset`, `seed`, `length`)
/// - Hold the validated stage parameters behind setters
///
/// # Invariants
/// - `pool_temperature` and `pick_temperature` are never negative
///   (0.0 is accepted and means an argmax pick)
/// - `pool_size` is at least 1
pub struct GenerationInput {
	/// Name of the dataset (model) to generate from.
	pub dataset: String,

	/// Seed strategy for the first token of the sequence.
	pub seed: SeedWord,

	/// Maximum number of tokens generated after the seed. Generation stops
	/// earlier when a token with no recorded continuation is reached.
	pub length: usize,

	/// Stage 1 temperature; high values admit a diverse candidate pool.
	pool_temperature: f64,

	/// Stage 1 cap on the candidate pool size.
	pool_size: usize,

	/// Stage 2 temperature; low values sharpen toward the likeliest candidate.
	pick_temperature: f64,
}

impl GenerationInput {
	/// Creates a new `GenerationInput` for the given dataset.
	///
	/// Defaults: random seed, 50 generated tokens, pool stage at
	/// temperature 50.0 capped to 10 candidates, pick stage at
	/// temperature 1.0.
	pub fn new(dataset: &str) -> Self {
		Self {
			dataset: dataset.to_owned(),
			seed: SeedWord::Random,
			length: 50,
			pool_temperature: 50.0,
			pool_size: 10,
			pick_temperature: 1.0,
		}
	}

	/// Returns the pool stage temperature.
	pub fn pool_temperature(&self) -> f64 {
		self.pool_temperature
	}

	/// Returns the pool stage candidate cap.
	pub fn pool_size(&self) -> usize {
		self.pool_size
	}

	/// Returns the pick stage temperature.
	pub fn pick_temperature(&self) -> f64 {
		self.pick_temperature
	}

	/// Sets the pool stage parameters.
	///
	/// # Errors
	/// Returns an error if `temperature` is negative or `size` is 0.
	pub fn set_pool_stage(&mut self, temperature: f64, size: usize) -> Result<(), String> {
		if temperature < 0.0 {
			return Err(format!("Temperature must be >= 0.0, got {}", temperature));
		}
		if size == 0 {
			return Err("Pool size must be at least 1".to_owned());
		}
		self.pool_temperature = temperature;
		self.pool_size = size;
		Ok(())
	}

	/// Sets the pick stage temperature.
	///
	/// A temperature of 0.0 turns the pick into a plain argmax.
	///
	/// # Errors
	/// Returns an error if `temperature` is negative.
	pub fn set_pick_temperature(&mut self, temperature: f64) -> Result<(), String> {
		if temperature < 0.0 {
			return Err(format!("Temperature must be >= 0.0, got {}", temperature));
		}
		self.pick_temperature = temperature;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_recommended_stages() {
		let input = GenerationInput::new("tiny_shakespeare");

		assert_eq!(input.dataset, "tiny_shakespeare");
		assert_eq!(input.seed, SeedWord::Random);
		assert_eq!(input.pool_temperature(), 50.0);
		assert_eq!(input.pool_size(), 10);
		assert_eq!(input.pick_temperature(), 1.0);
	}

	#[test]
	fn negative_temperatures_are_rejected() {
		let mut input = GenerationInput::new("test");

		assert!(input.set_pool_stage(-1.0, 10).is_err());
		assert!(input.set_pick_temperature(-0.5).is_err());

		// Rejected values leave the input untouched
		assert_eq!(input.pool_temperature(), 50.0);
		assert_eq!(input.pick_temperature(), 1.0);
	}

	#[test]
	fn zero_pool_size_is_rejected() {
		let mut input = GenerationInput::new("test");
		assert!(input.set_pool_stage(50.0, 0).is_err());
		assert_eq!(input.pool_size(), 10);
	}

	#[test]
	fn zero_temperature_is_accepted() {
		let mut input = GenerationInput::new("test");
		assert!(input.set_pool_stage(0.0, 5).is_ok());
		assert!(input.set_pick_temperature(0.0).is_ok());
	}
}

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use wordgen_core::model::generation_input::{GenerationInput, SeedWord};
use wordgen_core::model::generator::Generator;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	dataset: Option<String>,
	length: Option<usize>,
	pool_temperature: Option<f64>,
	pool_size: Option<usize>,
	pick_temperature: Option<f64>,
	seed: Option<String> // -> custom(token) or random if missing
}

struct SharedData {
	generator: Generator
}

impl GenerateParams {
	/// Determines the seed strategy for sequence generation.
	fn seed_word(&self) -> Result<SeedWord, String> {
		match &self.seed {
			None => Ok(SeedWord::Random),
			Some(s) if s.to_lowercase() == "random" => Ok(SeedWord::Random),
			Some(s) if s.to_lowercase().starts_with("custom:") => {
				let value = &s["custom:".len()..];
				if value.is_empty() {
					Err("Custom seed cannot be empty".into())
				} else {
					Ok(SeedWord::Custom(value.to_owned()))
				}
			}
			Some(_) => Err("Seed must start with 'custom:' or be 'random'".into()),
		}
	}

	/// Builds a validated `GenerationInput` from the query parameters.
	fn generation_input(&self, dataset: &str) -> Result<GenerationInput, String> {
		let mut input = GenerationInput::new(dataset);
		input.seed = self.seed_word()?;
		input.length = self.length.unwrap_or(50);
		input.set_pool_stage(self.pool_temperature.unwrap_or(50.0), self.pool_size.unwrap_or(10))?;
		input.set_pick_temperature(self.pick_temperature.unwrap_or(1.0))?;
		Ok(input)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a word sequence from the named dataset based on query
/// parameters. Returns the whitespace-joined sequence as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let dataset = match &query.dataset {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty dataset name"),
	};

	let input = match query.generation_input(dataset) {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	match data.generator.generate(&input) {
		Ok(result) => HttpResponse::Ok().body(result),
		Err(e) => HttpResponse::InternalServerError().body(e),
	}
}

#[get("/v1/datasets")]
async fn get_datasets(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().body(data.generator.dataset_names().join("\n"))
}

/// Main entry point for the server.
///
/// Loads and trains every dataset under `./datasets` once at startup,
/// then starts an Actix-web HTTP server over the read-only generator.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Generation only needs `&self`, so the shared state carries no lock.
/// - Currently, the dataset directory is hardcoded and should be made configurable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let generator = match Generator::from_dir("./datasets") {
		Ok(generator) => generator,
		Err(e) => return Err(std::io::Error::other(format!("Failed to load datasets: {e}"))),
	};
	let shared_data = web::Data::new(SharedData { generator });

	HttpServer::new(move || {
		App::new()
			.app_data(shared_data.clone())
			.service(get_generated)
			.service(get_datasets)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

use std::time::Instant;

use wordgen_core::model::generation_input::{GenerationInput, SeedWord};
use wordgen_core::model::generator::Generator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load all datasets from the "datasets" directory (.txt files)
    // and train one Markov model per dataset
    let start = Instant::now();
    let app: Generator = Generator::from_dir("./datasets")?;
    println!("Models trained in {:.3} seconds", start.elapsed().as_secs_f64());

    for name in app.dataset_names() {
        // Should not fail, the name comes from the generator itself
        if let Some(model) = app.model(&name) {
            println!(
                "Loaded dataset '{}': {} tokens, {} distinct",
                name,
                model.corpus_size(),
                model.vocabulary_size()
            );
        }
    }

    // Create a generation input; defaults are a random seed, 50 tokens,
    // pool stage (50.0, 10) and pick stage temperature 1.0
    let mut input = GenerationInput::new("tiny_shakespeare");

    // Number of tokens generated after the seed. Generation can stop
    // earlier if a token without continuation is reached
    input.length = 250;

    // Seed can be set to
    // 'Custom' to start the sequence from a token of your choice
    // 'Random' to draw the first token from the model vocabulary
    input.seed = SeedWord::Custom("How".to_owned());

    // Stage 1: a high temperature flattens the successor distribution,
    // admitting a pool of up to 10 plausible continuations
    input.set_pool_stage(50.0, 10)?;

    // Stage 2: a low temperature sharpens over the pool and commits to
    // a single winner (0.0 would turn the pick into a plain argmax)
    input.set_pick_temperature(1.0)?;

    // Attempting to set invalid sampling parameters
    match input.set_pool_stage(-1.0, 10) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Temperature -1.0 is invalid, must be >= 0.0"),
    }
    match input.set_pool_stage(50.0, 0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Pool size 0 is invalid, must be at least 1"),
    }

    // Generate one long snippet from the custom seed
    println!("{}", app.generate(&input)?);

    // Generate 5 short snippets from random seed words
    input.seed = SeedWord::Random;
    input.length = 25;
    for i in 0..5 {
        println!("Generated snippet {}: {}", i + 1, app.generate(&input)?);
    }

    Ok(())
}

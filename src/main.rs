use log::{error, warn};

use crossgen::game::{seed_from_env, GenerateOptions, PuzzleGenerator};
use crossgen::model::Difficulty;

fn init_logging() {
    env_logger::init();
}

fn options_from_env() -> GenerateOptions {
    let mut options = GenerateOptions::default();

    if let Ok(raw) = std::env::var("DIFFICULTY") {
        match Difficulty::from_name(&raw) {
            Some(difficulty) => options.difficulty = difficulty,
            None => warn!(
                target: "main",
                "unknown DIFFICULTY '{}', using {}",
                raw,
                options.difficulty.as_str()
            ),
        }
    }

    if let Ok(raw) = std::env::var("SIZE") {
        match raw.parse() {
            Ok(size) => options.size = size,
            Err(_) => warn!(
                target: "main",
                "unparseable SIZE '{}', using {}",
                raw,
                options.size
            ),
        }
    }

    options.seed = seed_from_env();
    options
}

fn main() {
    init_logging();

    let options = options_from_env();
    let generator = PuzzleGenerator::new();

    match generator.generate(&options) {
        Ok(puzzle) => {
            let json = serde_json::to_string_pretty(&puzzle)
                .expect("a generated puzzle always serializes");
            println!("{}", json);
        }
        Err(err) => {
            error!(target: "main", "generation failed: {}", err);
            std::process::exit(1);
        }
    }
}

pub mod generator;
pub mod lexicon;
pub mod templates;
mod word_list;

pub use generator::{
    seed_from_env, validate_puzzle, GenerateOptions, GenerationError, PuzzleGenerator,
};
pub use lexicon::{Lexicon, LexiconEntry};

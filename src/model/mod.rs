mod cell;
mod difficulty;
mod grid;
mod puzzle;
mod template;
mod word;

pub use cell::Cell;
pub use difficulty::Difficulty;
pub use grid::{Grid, GridStatistics};
pub use puzzle::{ClueEntry, Clues, Puzzle, PuzzleMetadata};
pub use template::{GridTemplate, Slot, TemplateError};
pub use word::{Direction, Word};

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::model::{Difficulty, Grid};

/// One numbered clue as it appears in the printed clue list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClueEntry {
    pub number: u32,
    pub clue: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Clues {
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleMetadata {
    pub seed: u64,
    pub template: String,
    /// Unix timestamp of the generation run.
    pub generated_at: i64,
    pub fill_percentage: f32,
    pub attempts: u32,
}

/// A finished puzzle: the playable grid plus clue lists, the answer key and
/// provenance. This is the shape consumers serialize.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub title: String,
    pub difficulty: Difficulty,
    pub grid_size: usize,
    pub grid: Grid,
    pub clues: Clues,
    /// Answer key, `'#'` for black squares.
    pub solution: Vec<Vec<char>>,
    pub metadata: Option<PuzzleMetadata>,
}

impl Puzzle {
    pub fn clue_count(&self) -> usize {
        self.clues.across.len() + self.clues.down.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;

    fn sample_puzzle() -> Puzzle {
        let mut grid = Grid::parse(
            "SEA
             ·#·
             ···",
        );
        grid.assign_clue(Direction::Across, 1, "Open water");
        let solution = grid.get_solution();
        Puzzle {
            title: "Tiny test".to_string(),
            difficulty: Difficulty::Easy,
            grid_size: grid.size(),
            grid,
            clues: Clues {
                across: vec![ClueEntry {
                    number: 1,
                    clue: "Open water".to_string(),
                }],
                down: vec![],
            },
            solution,
            metadata: None,
        }
    }

    #[test]
    fn test_serializes_camel_case_wire_shape() {
        let puzzle = sample_puzzle();
        let value = serde_json::to_value(&puzzle).unwrap();

        assert_eq!(value["title"], "Tiny test");
        assert_eq!(value["difficulty"], "easy");
        assert_eq!(value["gridSize"], 3);
        assert!(value["grid"]["cells"].is_array());
        assert_eq!(value["clues"]["across"][0]["number"], 1);
        assert_eq!(value["clues"]["across"][0]["clue"], "Open water");
    }

    #[test]
    fn test_solution_rows_serialize_as_char_strings() {
        let puzzle = sample_puzzle();
        let value = serde_json::to_value(&puzzle).unwrap();

        assert_eq!(value["solution"][0][0], "S");
        assert_eq!(value["solution"][0][1], "E");
        assert_eq!(value["solution"][1][1], "#");
        assert_eq!(value["solution"][1][0], " ");
    }

    #[test]
    fn test_absent_metadata_is_omitted() {
        let mut puzzle = sample_puzzle();
        let value = serde_json::to_value(&puzzle).unwrap();
        assert!(value.get("metadata").is_none());

        puzzle.metadata = Some(PuzzleMetadata {
            seed: 7,
            template: "plaza".to_string(),
            generated_at: 1_700_000_000,
            fill_percentage: 100.0,
            attempts: 1,
        });
        let value = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(value["metadata"]["seed"], 7);
        assert_eq!(value["metadata"]["template"], "plaza");
        assert_eq!(value["metadata"]["fillPercentage"], 100.0);
        assert_eq!(value["metadata"]["attempts"], 1);
    }

    #[test]
    fn test_round_trips_through_json() {
        let puzzle = sample_puzzle();
        let json = serde_json::to_string(&puzzle).unwrap();
        let back: Puzzle = serde_json::from_str(&json).unwrap();

        assert_eq!(back.title, puzzle.title);
        assert_eq!(back.grid_size, puzzle.grid_size);
        assert_eq!(back.clue_count(), 1);
        assert_eq!(back.solution, puzzle.solution);
    }
}

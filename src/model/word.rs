use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Unit step along the word: across walks columns, down walks rows.
    pub fn step(&self) -> (usize, usize) {
        match self {
            Direction::Across => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

/// A maximal run of letter cells, as found by the numbering scan. `word` and
/// `clue` stay unset until the span is resolved after filling.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub number: u32,
    pub direction: Direction,
    pub x: usize,
    pub y: usize,
    pub length: usize,
    pub word: Option<String>,
    pub clue: Option<String>,
}

impl Word {
    pub fn new(number: u32, direction: Direction, x: usize, y: usize, length: usize) -> Self {
        Word {
            number,
            direction,
            x,
            y,
            length,
            word: None,
            clue: None,
        }
    }

    /// Cell positions along the span, start first.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dx, dy) = self.direction.step();
        (0..self.length).map(move |i| (self.x + dx * i, self.y + dy * i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_walk_the_span() {
        let across = Word::new(1, Direction::Across, 2, 0, 3);
        assert_eq!(
            across.positions().collect::<Vec<_>>(),
            vec![(2, 0), (3, 0), (4, 0)]
        );

        let down = Word::new(4, Direction::Down, 0, 5, 4);
        assert_eq!(
            down.positions().collect::<Vec<_>>(),
            vec![(0, 5), (0, 6), (0, 7), (0, 8)]
        );
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Across).unwrap(),
            "\"across\""
        );
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
    }
}

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// One square of the grid. `value` and `is_black` are mutually exclusive;
/// `number` is present iff this cell opens an across and/or down word.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub value: Option<char>,
    pub is_black: bool,
    pub number: Option<u32>,
    pub part_of_across: Option<u32>,
    pub part_of_down: Option<u32>,
    /// Pre-filled cell, exempt from placement and clearing. Reserved for
    /// future pre-seeded puzzles; nothing sets it during generation today.
    pub locked: bool,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Cell {
            x,
            y,
            value: None,
            is_black: false,
            number: None,
            part_of_across: None,
            part_of_down: None,
            locked: false,
        }
    }

    pub fn is_letter_cell(&self) -> bool {
        !self.is_black
    }

    pub fn has_letter(&self) -> bool {
        self.value.is_some()
    }
}

use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::model::{Cell, Direction, GridTemplate, Word};

/// Counts reported by [`Grid::get_statistics`]. Percentages are 0 when the
/// grid has no cells of the relevant kind.
#[readonly::make]
#[derive(Debug, Clone)]
pub struct GridStatistics {
    pub black_squares: usize,
    pub letter_squares: usize,
    pub filled_squares: usize,
    pub black_percentage: f32,
    pub fill_percentage: f32,
    pub across_words: usize,
    pub down_words: usize,
}

/// A square crossword grid. The cell matrix is private; mutation goes through
/// the operation set below so word tagging can never drift from cell state.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>, // [y][x]
    across: Vec<Word>,
    down: Vec<Word>,
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n{}", self.render())
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Grid {
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .map(|y| (0..size).map(|x| Cell::new(x, y)).collect())
            .collect();

        Grid {
            size,
            cells,
            across: Vec::new(),
            down: Vec::new(),
        }
    }

    pub fn from_template(template: &GridTemplate) -> Self {
        let mut grid = Grid::new(template.size);
        for (x, y) in template.black_cells() {
            grid.set_black(x, y);
        }
        grid.find_words();
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Marks a cell black, erasing any letter it held. Out-of-bounds
    /// coordinates are ignored; templates are authored in range.
    pub fn set_black(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            cell.is_black = true;
            cell.value = None;
        }
    }

    pub fn clear_black(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            cell.is_black = false;
        }
    }

    /// Sets black at `(x, y)` and at its 180° reflection.
    pub fn add_symmetrical_black(&mut self, x: usize, y: usize) {
        if x >= self.size || y >= self.size {
            return;
        }
        self.set_black(x, y);
        self.set_black(self.size - 1 - x, self.size - 1 - y);
    }

    /// Recomputes numbering and the word lists from the black/white pattern.
    /// Must be re-run after the pattern changes; idempotent when it has not.
    ///
    /// A cell opens an across word when it sits against the left edge or a
    /// black cell and has a letter cell to its right; the down rule mirrors
    /// it vertically. One counter numbers both directions, so a cell opening
    /// both takes a single number shared by the two spans.
    pub fn find_words(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.number = None;
                cell.part_of_across = None;
                cell.part_of_down = None;
            }
        }
        self.across.clear();
        self.down.clear();

        let mut next_number = 0u32;
        for y in 0..self.size {
            for x in 0..self.size {
                if self.cells[y][x].is_black {
                    continue;
                }
                let starts_across = (x == 0 || self.cells[y][x - 1].is_black)
                    && x + 1 < self.size
                    && !self.cells[y][x + 1].is_black;
                let starts_down = (y == 0 || self.cells[y - 1][x].is_black)
                    && y + 1 < self.size
                    && !self.cells[y + 1][x].is_black;

                if !starts_across && !starts_down {
                    continue;
                }

                next_number += 1;
                self.cells[y][x].number = Some(next_number);

                if starts_across {
                    let length = self.span_length(x, y, Direction::Across);
                    for i in 0..length {
                        self.cells[y][x + i].part_of_across = Some(next_number);
                    }
                    self.across
                        .push(Word::new(next_number, Direction::Across, x, y, length));
                }
                if starts_down {
                    let length = self.span_length(x, y, Direction::Down);
                    for i in 0..length {
                        self.cells[y + i][x].part_of_down = Some(next_number);
                    }
                    self.down
                        .push(Word::new(next_number, Direction::Down, x, y, length));
                }
            }
        }

        trace!(
            target: "grid",
            "find_words: {} across, {} down on {}x{}",
            self.across.len(),
            self.down.len(),
            self.size,
            self.size
        );
    }

    fn span_length(&self, x: usize, y: usize, direction: Direction) -> usize {
        let (dx, dy) = direction.step();
        let (mut cx, mut cy) = (x, y);
        let mut length = 0;
        while cx < self.size && cy < self.size && !self.cells[cy][cx].is_black {
            length += 1;
            cx += dx;
            cy += dy;
        }
        length
    }

    /// Writes `word` along the span, uppercased. Returns false without
    /// touching the grid when the span leaves the board, crosses a black
    /// cell, or disagrees with a letter already in place (locked cells count
    /// as placed letters). Re-placing an identical word is a no-op success.
    pub fn place_word(&mut self, word: &str, x: usize, y: usize, direction: Direction) -> bool {
        let word = word.to_uppercase();
        let letters: Vec<char> = word.chars().collect();
        let (dx, dy) = direction.step();

        // validate the whole span before writing anything
        for (i, &letter) in letters.iter().enumerate() {
            let (cx, cy) = (x + dx * i, y + dy * i);
            let cell = match self.cells.get(cy).and_then(|row| row.get(cx)) {
                Some(cell) => cell,
                None => {
                    trace!(
                        target: "grid",
                        "rejecting '{}' {} at ({}, {}): span leaves the grid",
                        word, direction.as_str(), x, y
                    );
                    return false;
                }
            };
            if cell.is_black {
                trace!(
                    target: "grid",
                    "rejecting '{}' {} at ({}, {}): black cell at ({}, {})",
                    word, direction.as_str(), x, y, cx, cy
                );
                return false;
            }
            if cell.value.is_some() && cell.value != Some(letter) {
                trace!(
                    target: "grid",
                    "rejecting '{}' {} at ({}, {}): ({}, {}) already holds {:?}",
                    word, direction.as_str(), x, y, cx, cy, cell.value
                );
                return false;
            }
        }

        for (i, &letter) in letters.iter().enumerate() {
            let cell = &mut self.cells[y + dy * i][x + dx * i];
            if !cell.locked {
                cell.value = Some(letter);
            }
        }
        true
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(y).and_then(|row| row.get(x))
    }

    #[cfg(test)]
    pub(crate) fn get_cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.cells.get_mut(y).and_then(|row| row.get_mut(x))
    }

    /// Full matrix snapshot: `'#'` at black cells, `' '` where no letter has
    /// been placed.
    pub fn get_solution(&self) -> Vec<Vec<char>> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_black {
                            '#'
                        } else {
                            cell.value.unwrap_or(' ')
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Empties every unlocked letter cell, keeping pattern and numbering.
    pub fn clear_letters(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if !cell.is_black && !cell.locked {
                    cell.value = None;
                }
            }
        }
    }

    pub fn words(&self, direction: Direction) -> &[Word] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Reads each span back from the cells and stores the text on the word
    /// when every cell of the span holds a letter.
    pub fn resolve_words(&mut self) {
        let across_texts: Vec<Option<String>> =
            self.across.iter().map(|w| self.read_span(w)).collect();
        for (word, text) in self.across.iter_mut().zip(across_texts) {
            word.word = text;
        }

        let down_texts: Vec<Option<String>> =
            self.down.iter().map(|w| self.read_span(w)).collect();
        for (word, text) in self.down.iter_mut().zip(down_texts) {
            word.word = text;
        }
    }

    fn read_span(&self, word: &Word) -> Option<String> {
        word.positions()
            .map(|(x, y)| self.cells[y][x].value)
            .collect()
    }

    pub(crate) fn assign_clue(&mut self, direction: Direction, number: u32, clue: &str) {
        let words = match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        };
        if let Some(word) = words.iter_mut().find(|w| w.number == number) {
            word.clue = Some(clue.to_string());
        }
    }

    pub fn get_statistics(&self) -> GridStatistics {
        let total = self.size * self.size;
        let black_squares = self
            .cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_black)
            .count();
        let letter_squares = total - black_squares;
        let filled_squares = self
            .cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_black && cell.has_letter())
            .count();

        let black_percentage = if total == 0 {
            0.0
        } else {
            black_squares as f32 / total as f32 * 100.0
        };
        let fill_percentage = if letter_squares == 0 {
            0.0
        } else {
            filled_squares as f32 / letter_squares as f32 * 100.0
        };

        GridStatistics {
            black_squares,
            letter_squares,
            filled_squares,
            black_percentage,
            fill_percentage,
            across_words: self.across.len(),
            down_words: self.down.len(),
        }
    }

    fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_black {
                            '#'
                        } else {
                            cell.value.unwrap_or('·')
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }

    /// Builds a grid from the `render` notation: `#` black, `·` empty letter
    /// cell, anything alphabetic a placed letter. Runs `find_words`.
    #[cfg(test)]
    pub fn parse(input: &str) -> Self {
        let lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let size = lines.len();
        let mut grid = Grid::new(size);

        for (y, line) in lines.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                size,
                "row {} is not {} cells wide",
                y,
                size
            );
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    '#' => grid.set_black(x, y),
                    '·' => {}
                    letter if letter.is_alphabetic() => {
                        grid.cells[y][x].value = Some(letter.to_ascii_uppercase());
                    }
                    other => panic!("unexpected cell symbol {:?}", other),
                }
            }
        }

        grid.find_words();
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::parse(
            "··#··
             ·····
             #···#
             ·····
             ··#··",
        )
    }

    #[test]
    fn test_find_words_numbering() {
        let grid = sample_grid();

        let across: Vec<(u32, usize, usize, usize)> = grid
            .words(Direction::Across)
            .iter()
            .map(|w| (w.number, w.x, w.y, w.length))
            .collect();
        assert_eq!(
            across,
            vec![
                (1, 0, 0, 2),
                (3, 3, 0, 2),
                (5, 0, 1, 5),
                (7, 1, 2, 3),
                (8, 0, 3, 5),
                (10, 0, 4, 2),
                (11, 3, 4, 2),
            ]
        );

        let down: Vec<(u32, usize, usize, usize)> = grid
            .words(Direction::Down)
            .iter()
            .map(|w| (w.number, w.x, w.y, w.length))
            .collect();
        assert_eq!(
            down,
            vec![
                (1, 0, 0, 2),
                (2, 1, 0, 5),
                (3, 3, 0, 5),
                (4, 4, 0, 2),
                (6, 2, 1, 3),
                (8, 0, 3, 2),
                (9, 4, 3, 2),
            ]
        );
    }

    #[test]
    fn test_find_words_tags_every_letter_cell() {
        let grid = sample_grid();
        for y in 0..5 {
            for x in 0..5 {
                let cell = grid.get_cell(x, y).unwrap();
                if cell.is_black {
                    assert_eq!(cell.part_of_across, None);
                    assert_eq!(cell.part_of_down, None);
                } else {
                    assert!(
                        cell.part_of_across.is_some() || cell.part_of_down.is_some(),
                        "orphan letter cell at ({}, {})",
                        x,
                        y
                    );
                }
            }
        }

        // a crossing cell carries both word references
        let cell = grid.get_cell(2, 2).unwrap();
        assert_eq!(cell.part_of_across, Some(7));
        assert_eq!(cell.part_of_down, Some(6));
    }

    #[test]
    fn test_find_words_numbers_only_word_openers() {
        let grid = sample_grid();
        assert_eq!(grid.get_cell(0, 0).unwrap().number, Some(1));
        assert_eq!(grid.get_cell(2, 1).unwrap().number, Some(6));
        assert_eq!(grid.get_cell(3, 4).unwrap().number, Some(11));
        // mid-span cells take no number
        assert_eq!(grid.get_cell(1, 1).unwrap().number, None);
        assert_eq!(grid.get_cell(4, 4).unwrap().number, None);
    }

    #[test]
    fn test_find_words_numbering_strictly_increases() {
        let grid = sample_grid();
        let mut numbers = Vec::new();
        for y in 0..5 {
            for x in 0..5 {
                if let Some(n) = grid.get_cell(x, y).unwrap().number {
                    numbers.push(n);
                }
            }
        }
        assert_eq!(numbers, (1..=11).collect::<Vec<u32>>());
    }

    #[test]
    fn test_find_words_is_idempotent() {
        let mut grid = sample_grid();
        let across_before = grid.words(Direction::Across).to_vec();
        let down_before = grid.words(Direction::Down).to_vec();

        grid.find_words();

        assert_eq!(grid.words(Direction::Across), &across_before[..]);
        assert_eq!(grid.words(Direction::Down), &down_before[..]);
    }

    #[test]
    fn test_place_word_uppercases() {
        let mut grid = sample_grid();
        assert!(grid.place_word("hi", 0, 0, Direction::Across));
        assert_eq!(grid.get_cell(0, 0).unwrap().value, Some('H'));
        assert_eq!(grid.get_cell(1, 0).unwrap().value, Some('I'));
    }

    #[test]
    fn test_place_word_rejects_conflicts_without_mutating() {
        let mut grid = sample_grid();
        assert!(grid.place_word("SHORE", 0, 1, Direction::Across));

        // crosses the placed H with a mismatching letter at (1, 1)
        assert!(!grid.place_word("CANAL", 1, 0, Direction::Down));
        assert_eq!(grid.get_cell(1, 0).unwrap().value, None);
        assert_eq!(grid.get_cell(1, 1).unwrap().value, Some('H'));

        // agreeing letters are fine
        assert!(grid.place_word("SHORT", 1, 0, Direction::Down));
        assert_eq!(grid.get_cell(1, 4).unwrap().value, Some('T'));
    }

    #[test]
    fn test_place_word_is_idempotent() {
        let mut grid = sample_grid();
        assert!(grid.place_word("SHORE", 0, 1, Direction::Across));
        assert!(grid.place_word("SHORE", 0, 1, Direction::Across));
        assert_eq!(grid.get_cell(4, 1).unwrap().value, Some('E'));
    }

    #[test]
    fn test_place_word_rejects_black_and_out_of_bounds() {
        let mut grid = sample_grid();
        // (2, 0) is black
        assert!(!grid.place_word("TAR", 0, 0, Direction::Across));
        assert_eq!(grid.get_cell(0, 0).unwrap().value, None);

        // runs off the bottom edge
        assert!(!grid.place_word("LONGER", 1, 0, Direction::Down));
        assert_eq!(grid.get_cell(1, 0).unwrap().value, None);
        assert!(!grid.place_word("ABC", 9, 9, Direction::Across));
    }

    #[test]
    fn test_place_word_respects_locked_cells() {
        let mut grid = sample_grid();
        {
            let cell = grid.get_cell_mut(0, 1).unwrap();
            cell.value = Some('S');
            cell.locked = true;
        }

        // disagreeing with the locked letter is a conflict
        assert!(!grid.place_word("THORN", 0, 1, Direction::Across));
        // agreeing with it succeeds and leaves it locked
        assert!(grid.place_word("SHORE", 0, 1, Direction::Across));
        assert!(grid.get_cell(0, 1).unwrap().locked);
    }

    #[test]
    fn test_add_symmetrical_black() {
        let mut grid = Grid::new(7);
        grid.add_symmetrical_black(1, 0);
        assert!(grid.get_cell(1, 0).unwrap().is_black);
        assert!(grid.get_cell(5, 6).unwrap().is_black);

        // the centre cell reflects onto itself
        grid.add_symmetrical_black(3, 3);
        assert_eq!(
            grid.get_statistics().black_squares,
            3,
            "centre must not double-count"
        );

        // out of bounds is a silent no-op
        grid.add_symmetrical_black(7, 0);
        assert_eq!(grid.get_statistics().black_squares, 3);
    }

    #[test]
    fn test_set_black_erases_letter() {
        let mut grid = Grid::new(5);
        assert!(grid.place_word("AT", 0, 0, Direction::Across));
        grid.set_black(0, 0);
        grid.clear_black(0, 0);
        assert_eq!(grid.get_cell(0, 0).unwrap().value, None);
        assert_eq!(grid.get_cell(1, 0).unwrap().value, Some('T'));
    }

    #[test]
    fn test_get_solution_shape() {
        let mut grid = sample_grid();
        assert!(grid.place_word("SHORE", 0, 1, Direction::Across));

        let solution = grid.get_solution();
        assert_eq!(solution.len(), 5);
        assert!(solution.iter().all(|row| row.len() == 5));
        assert_eq!(solution[0], vec![' ', ' ', '#', ' ', ' ']);
        assert_eq!(solution[1], vec!['S', 'H', 'O', 'R', 'E']);
        assert_eq!(solution[2][0], '#');
        assert_eq!(solution[2][4], '#');
    }

    #[test]
    fn test_clear_letters_preserves_pattern_and_numbering() {
        let mut grid = sample_grid();
        assert!(grid.place_word("SHORE", 0, 1, Direction::Across));
        assert!(grid.place_word("AS", 0, 0, Direction::Down));
        let before = grid.get_statistics();
        assert_eq!(before.filled_squares, 6);

        grid.clear_letters();

        let after = grid.get_statistics();
        assert_eq!(after.filled_squares, 0);
        assert_eq!(after.black_squares, before.black_squares);
        assert_eq!(after.letter_squares, before.letter_squares);
        assert_eq!(grid.get_cell(0, 0).unwrap().number, Some(1));
    }

    #[test]
    fn test_clear_letters_keeps_locked_cells() {
        let mut grid = sample_grid();
        {
            let cell = grid.get_cell_mut(0, 1).unwrap();
            cell.value = Some('S');
            cell.locked = true;
        }
        grid.clear_letters();
        assert_eq!(grid.get_cell(0, 1).unwrap().value, Some('S'));
    }

    #[test]
    fn test_statistics_percentages() {
        let grid = sample_grid();
        let stats = grid.get_statistics();
        assert_eq!(stats.black_squares, 4);
        assert_eq!(stats.letter_squares, 21);
        assert_eq!(stats.filled_squares, 0);
        assert_eq!(stats.fill_percentage, 0.0);
        assert!((stats.black_percentage - 16.0).abs() < 0.01);
        assert_eq!(stats.across_words, 7);
        assert_eq!(stats.down_words, 7);
    }

    #[test]
    fn test_resolve_words_reads_back_complete_spans() {
        let mut grid = sample_grid();
        assert!(grid.place_word("SHORE", 0, 1, Direction::Across));
        assert!(grid.place_word("AS", 0, 0, Direction::Down));
        grid.resolve_words();

        let down = grid.words(Direction::Down);
        assert_eq!(down[0].word.as_deref(), Some("AS"));
        // incomplete spans stay unresolved
        assert_eq!(down[1].word, None);

        let across = grid.words(Direction::Across);
        assert_eq!(across[2].word.as_deref(), Some("SHORE"));
    }

    #[test]
    fn test_get_cell_bounds() {
        let grid = Grid::new(3);
        assert!(grid.get_cell(2, 2).is_some());
        assert!(grid.get_cell(3, 0).is_none());
        assert!(grid.get_cell(0, 3).is_none());
    }

    #[test]
    fn test_parse_display_round_trip() {
        let grid = sample_grid();
        let rendered = format!("{}", grid);
        assert_eq!(rendered.lines().count(), 5);
        assert_eq!(rendered.lines().next().unwrap(), "··#··");

        let reparsed = Grid::parse(&rendered);
        assert_eq!(
            reparsed.words(Direction::Across),
            grid.words(Direction::Across)
        );
    }
}

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{Difficulty, Direction};

pub const MIN_TEMPLATE_SIZE: usize = 5;
pub const MAX_TEMPLATE_SIZE: usize = 31;
pub const MIN_SLOT_LENGTH: usize = 3;
pub const MAX_SLOT_LENGTH: usize = 9;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("pattern row {row} is {width} cells wide, expected {size}")]
    NotSquare {
        row: usize,
        width: usize,
        size: usize,
    },
    #[error("size {size} is outside the supported 5..=31 range")]
    SizeOutOfRange { size: usize },
    #[error("unexpected pattern symbol {symbol:?}")]
    UnexpectedSymbol { symbol: char },
    #[error("{direction:?} slot at ({x}, {y}) has length {length}, allowed 3..=9")]
    SlotOutOfRange {
        x: usize,
        y: usize,
        direction: Direction,
        length: usize,
    },
    #[error("letter cell at ({x}, {y}) belongs to no word in either direction")]
    OrphanCell { x: usize, y: usize },
    #[error("pattern contains no word slots")]
    NoSlots,
}

/// A word slot a template provides: start cell, direction, length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    pub length: usize,
}

/// A pre-authored black/white layout, validated once at construction so the
/// fill algorithm can rely on its shape. `#` marks black, `.` a letter cell.
#[readonly::make]
#[derive(Debug, Clone)]
pub struct GridTemplate {
    pub name: String,
    pub size: usize,
    pub difficulty: Difficulty,
    /// Whether the pattern equals its own 180° rotation. Derived from the
    /// pattern, not declared by the author.
    pub symmetrical: bool,
    /// Black squares as a fraction of all cells.
    pub black_ratio: f32,
    rows: Vec<Vec<bool>>, // true = black
    slots: Vec<Slot>,
}

impl GridTemplate {
    pub fn parse(
        name: &str,
        difficulty: Difficulty,
        pattern: &str,
    ) -> Result<GridTemplate, TemplateError> {
        let lines: Vec<&str> = pattern
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let size = lines.len();
        if !(MIN_TEMPLATE_SIZE..=MAX_TEMPLATE_SIZE).contains(&size) {
            return Err(TemplateError::SizeOutOfRange { size });
        }

        let mut rows: Vec<Vec<bool>> = Vec::with_capacity(size);
        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(size);
            for symbol in line.chars() {
                match symbol {
                    '#' => row.push(true),
                    '.' => row.push(false),
                    other => return Err(TemplateError::UnexpectedSymbol { symbol: other }),
                }
            }
            if row.len() != size {
                return Err(TemplateError::NotSquare {
                    row: y,
                    width: row.len(),
                    size,
                });
            }
            rows.push(row);
        }

        let slots = Self::scan_slots(&rows, size)?;
        Self::check_orphans(&rows, size, &slots)?;
        if slots.is_empty() {
            return Err(TemplateError::NoSlots);
        }

        let black_squares = rows.iter().flatten().filter(|&&black| black).count();
        let black_ratio = black_squares as f32 / (size * size) as f32;
        let symmetrical = (0..size).all(|y| {
            (0..size).all(|x| rows[y][x] == rows[size - 1 - y][size - 1 - x])
        });

        Ok(GridTemplate {
            name: name.to_string(),
            size,
            difficulty,
            symmetrical,
            black_ratio,
            rows,
            slots,
        })
    }

    /// Maximal runs of length >= 2 in both directions; runs of a single cell
    /// are not slots (they are legal only when the crossing direction covers
    /// the cell, which `check_orphans` verifies).
    fn scan_slots(rows: &[Vec<bool>], size: usize) -> Result<Vec<Slot>, TemplateError> {
        let mut slots = Vec::new();

        for (direction, major_of) in [
            (Direction::Across, false), // scan rows
            (Direction::Down, true),    // scan columns
        ] {
            for major in 0..size {
                let mut run_start = None;
                for minor in 0..=size {
                    let black = if minor == size {
                        true // virtual black border closes the run
                    } else if major_of {
                        rows[minor][major]
                    } else {
                        rows[major][minor]
                    };

                    match (black, run_start) {
                        (false, None) => run_start = Some(minor),
                        (true, Some(start)) => {
                            let length = minor - start;
                            run_start = None;
                            if length < 2 {
                                continue;
                            }
                            let (x, y) = if major_of { (major, start) } else { (start, major) };
                            if !(MIN_SLOT_LENGTH..=MAX_SLOT_LENGTH).contains(&length) {
                                return Err(TemplateError::SlotOutOfRange {
                                    x,
                                    y,
                                    direction,
                                    length,
                                });
                            }
                            slots.push(Slot {
                                x,
                                y,
                                direction,
                                length,
                            });
                        }
                        _ => {}
                    }
                }
            }
        }

        Ok(slots)
    }

    fn check_orphans(
        rows: &[Vec<bool>],
        size: usize,
        slots: &[Slot],
    ) -> Result<(), TemplateError> {
        let mut covered = vec![vec![false; size]; size];
        for slot in slots {
            let (dx, dy) = slot.direction.step();
            for i in 0..slot.length {
                covered[slot.y + dy * i][slot.x + dx * i] = true;
            }
        }
        for y in 0..size {
            for x in 0..size {
                if !rows[y][x] && !covered[y][x] {
                    return Err(TemplateError::OrphanCell { x, y });
                }
            }
        }
        Ok(())
    }

    pub fn black_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &black)| black)
                .map(move |(x, _)| (x, y))
        })
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Distinct slot lengths the pattern requires, for lexicon coverage
    /// checks.
    pub fn slot_lengths(&self) -> BTreeSet<usize> {
        self.slots.iter().map(|slot| slot.length).collect()
    }
}

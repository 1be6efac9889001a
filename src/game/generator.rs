use chrono::Local;
use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{RngCore, SeedableRng};
use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    ClueEntry, Clues, Difficulty, Direction, Grid, GridTemplate, Puzzle, PuzzleMetadata,
};

use super::{templates, word_list, Lexicon};

pub const MAX_FILL_ATTEMPTS: u32 = 20;
pub const MIN_FILL_PERCENTAGE: f32 = 80.0;

fn default_size() -> usize {
    15
}

fn default_true() -> bool {
    true
}

fn default_min_word_length() -> usize {
    3
}

fn default_max_word_length() -> usize {
    9
}

fn default_black_square_ratio() -> f32 {
    0.2
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Requested grid size. Generation uses the closest template size
    /// available for the difficulty, so the grid that comes back may differ.
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Informational. Shipped templates are all point-symmetric; the fill
    /// algorithm never consults this.
    #[serde(default = "default_true")]
    pub symmetrical: bool,
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,
    /// Template-selection hint, a fraction of all cells.
    #[serde(default = "default_black_square_ratio")]
    pub black_square_ratio: f32,
    /// Whether local-interest vocabulary (and local title phrases) are in
    /// play.
    #[serde(default = "default_true")]
    pub use_local_words: bool,
    /// Fixing the seed reproduces the identical puzzle.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            size: default_size(),
            difficulty: Difficulty::default(),
            symmetrical: default_true(),
            min_word_length: default_min_word_length(),
            max_word_length: default_max_word_length(),
            black_square_ratio: default_black_square_ratio(),
            use_local_words: default_true(),
            seed: None,
        }
    }
}

pub fn seed_from_env() -> Option<u64> {
    std::env::var("SEED").ok().and_then(|raw| raw.parse().ok())
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    #[error("no {difficulty:?} template available (requested size {size})")]
    NoTemplate { difficulty: Difficulty, size: usize },
    #[error("fill stalled at {best:.1}% after {attempts} attempts")]
    FillRatioBelowThreshold { best: f32, attempts: u32 },
}

/// Stateless puzzle factory. Each [`generate`](PuzzleGenerator::generate)
/// call builds its own grid, so one generator can serve concurrent callers.
pub struct PuzzleGenerator {
    lexicon: Lexicon,
    templates: Vec<GridTemplate>,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    pub fn new() -> Self {
        PuzzleGenerator {
            lexicon: Lexicon::builtin(),
            templates: templates::builtin(),
        }
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_templates(mut self, templates: Vec<GridTemplate>) -> Self {
        self.templates = templates;
        self
    }

    /// Produces a finished puzzle or reports why it could not.
    ///
    /// Runs up to [`MAX_FILL_ATTEMPTS`] fill attempts against the selected
    /// template, each with its own seed derived from the base seed, and
    /// accepts the first grid at or above [`MIN_FILL_PERCENTAGE`]. Down
    /// words that thread through no candidate stay unfilled; the ratio gate,
    /// not per-word completion, decides success.
    pub fn generate(&self, options: &GenerateOptions) -> Result<Puzzle, GenerationError> {
        let base_seed = options.seed.unwrap_or_else(|| rand::rng().next_u64());
        let mut select_rng = StdRng::seed_from_u64(base_seed);
        let template = self.select_template(options, &mut select_rng)?;

        info!(
            target: "generator",
            "generating {:?} {}x{} from template '{}' (seed {})",
            options.difficulty,
            template.size,
            template.size,
            template.name,
            base_seed
        );

        let mut best: Option<(Grid, f32, u32)> = None;
        for attempt in 0..MAX_FILL_ATTEMPTS {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(attempt as u64));
            let mut grid = Grid::from_template(template);
            let across_placed =
                self.fill_direction(&mut grid, Direction::Across, options, &mut rng);
            let down_placed = self.fill_direction(&mut grid, Direction::Down, options, &mut rng);

            let fill = grid.get_statistics().fill_percentage;
            trace!(
                target: "generator",
                "attempt {}: placed {} words, fill {:.1}%{:?}",
                attempt + 1,
                across_placed + down_placed,
                fill,
                grid
            );

            let improved = best
                .as_ref()
                .map_or(true, |&(_, best_fill, _)| fill > best_fill);
            if improved {
                best = Some((grid, fill, attempt + 1));
            }
            if fill >= MIN_FILL_PERCENTAGE {
                break;
            }
        }

        let (mut grid, fill, attempts) = best.expect("the attempt loop always runs once");
        if fill < MIN_FILL_PERCENTAGE {
            warn!(
                target: "generator",
                "giving up on '{}' at {:.1}% after {} attempts",
                template.name,
                fill,
                MAX_FILL_ATTEMPTS
            );
            return Err(GenerationError::FillRatioBelowThreshold {
                best: fill,
                attempts: MAX_FILL_ATTEMPTS,
            });
        }

        grid.resolve_words();
        let clues = self.derive_clues(&mut grid);
        let title = self.compose_title(options, base_seed);
        let solution = grid.get_solution();
        let stats = grid.get_statistics();

        info!(
            target: "generator",
            "done in {} attempt(s): {} across, {} down, fill {:.1}%",
            attempts,
            stats.across_words,
            stats.down_words,
            stats.fill_percentage
        );

        Ok(Puzzle {
            title,
            difficulty: options.difficulty,
            grid_size: grid.size(),
            grid,
            clues,
            solution,
            metadata: Some(PuzzleMetadata {
                seed: base_seed,
                template: template.name.clone(),
                generated_at: Local::now().timestamp(),
                fill_percentage: stats.fill_percentage,
                attempts,
            }),
        })
    }

    /// Templates are filtered to the requested difficulty, then the nearest
    /// size wins, then the black-ratio hint; a seeded draw breaks whatever
    /// tie is left.
    fn select_template(
        &self,
        options: &GenerateOptions,
        rng: &mut StdRng,
    ) -> Result<&GridTemplate, GenerationError> {
        let tier: Vec<&GridTemplate> = self
            .templates
            .iter()
            .filter(|t| t.difficulty == options.difficulty)
            .collect();
        if tier.is_empty() {
            return Err(GenerationError::NoTemplate {
                difficulty: options.difficulty,
                size: options.size,
            });
        }

        let nearest = tier
            .iter()
            .map(|t| t.size.abs_diff(options.size))
            .min()
            .expect("tier is non-empty");
        let by_size: Vec<&GridTemplate> = tier
            .into_iter()
            .filter(|t| t.size.abs_diff(options.size) == nearest)
            .collect();

        // a non-finite hint would poison every gap comparison below
        let ratio_hint = if options.black_square_ratio.is_finite() {
            options.black_square_ratio
        } else {
            default_black_square_ratio()
        };
        let best_gap = by_size
            .iter()
            .map(|t| (t.black_ratio - ratio_hint).abs())
            .fold(f32::INFINITY, f32::min);
        let finalists: Vec<&GridTemplate> = by_size
            .into_iter()
            .filter(|t| (t.black_ratio - ratio_hint).abs() <= best_gap)
            .collect();

        let chosen = *finalists.choose(rng).expect("finalists is non-empty");
        trace!(
            target: "generator",
            "selected template '{}' ({}x{}, ratio {:.3})",
            chosen.name,
            chosen.size,
            chosen.size,
            chosen.black_ratio
        );
        Ok(chosen)
    }

    /// One fill pass. Across slots never share a cell, so on an empty grid
    /// each accepts its first candidate; the later down pass must agree with
    /// every letter the across pass wrote, which `place_word` checks cell by
    /// cell.
    fn fill_direction(
        &self,
        grid: &mut Grid,
        direction: Direction,
        options: &GenerateOptions,
        rng: &mut StdRng,
    ) -> usize {
        let slots = grid.words(direction).to_vec();
        let mut placed = 0;

        for slot in &slots {
            if slot.length < options.min_word_length || slot.length > options.max_word_length {
                trace!(
                    target: "generator",
                    "skipping {} {}: length {} out of bounds",
                    slot.number,
                    direction.as_str(),
                    slot.length
                );
                continue;
            }

            let mut candidates = self.lexicon.words_with_length(
                slot.length,
                options.difficulty,
                options.use_local_words,
            );
            candidates.shuffle(rng);

            for candidate in candidates {
                if grid.place_word(&candidate.word, slot.x, slot.y, direction) {
                    placed += 1;
                    break;
                }
            }
        }

        trace!(
            target: "generator",
            "{} pass placed {} of {} words",
            direction.as_str(),
            placed,
            slots.len()
        );
        placed
    }

    /// Looks up each resolved word's clue; anything the lexicon does not
    /// know, including spans the fill left short, gets a length placeholder.
    fn derive_clues(&self, grid: &mut Grid) -> Clues {
        let mut clues = Clues::default();
        for direction in [Direction::Across, Direction::Down] {
            let resolved: Vec<(u32, usize, Option<String>)> = grid
                .words(direction)
                .iter()
                .map(|w| (w.number, w.length, w.word.clone()))
                .collect();

            for (number, length, text) in resolved {
                let clue = text
                    .as_deref()
                    .and_then(|word| self.lexicon.clue_for(word))
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        warn!(
                            target: "generator",
                            "no clue for {} {} ({:?}), using placeholder",
                            number,
                            direction.as_str(),
                            text
                        );
                        format!("Mystery word ({} letters)", length)
                    });

                grid.assign_clue(direction, number, &clue);
                let list = match direction {
                    Direction::Across => &mut clues.across,
                    Direction::Down => &mut clues.down,
                };
                list.push(ClueEntry { number, clue });
            }
        }
        clues
    }

    fn compose_title(&self, options: &GenerateOptions, seed: u64) -> String {
        let mut rng = StdRng::seed_from_u64(seed.rotate_left(32));
        let pool: Vec<&str> = if options.use_local_words {
            word_list::TITLE_PHRASES
                .iter()
                .chain(word_list::LOCAL_TITLE_PHRASES)
                .copied()
                .collect()
        } else {
            word_list::TITLE_PHRASES.to_vec()
        };
        let phrase = *pool.choose(&mut rng).expect("title pool is never empty");
        format!("{}: {}", phrase, Local::now().format("%B %-d, %Y"))
    }
}

/// Strict acceptance check for a finished puzzle: every letter cell holds a
/// letter and the clue lists line up one-to-one with the grid's words. The
/// ratio gate alone can pass sparser grids than this.
pub fn validate_puzzle(puzzle: &Puzzle) -> bool {
    let grid = &puzzle.grid;
    let size = grid.size();

    let all_filled = (0..size).all(|y| {
        (0..size).all(|x| match grid.get_cell(x, y) {
            Some(cell) => !cell.is_letter_cell() || cell.has_letter(),
            None => false,
        })
    });

    all_filled
        && puzzle.clues.across.len() == grid.words(Direction::Across).len()
        && puzzle.clues.down.len() == grid.words(Direction::Down).len()
}

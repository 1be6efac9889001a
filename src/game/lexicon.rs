use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{trace, warn};
use serde::Deserialize;

use crate::helpers::normalize_word;
use crate::model::Difficulty;

use super::word_list;

fn default_tier() -> Difficulty {
    Difficulty::Easy
}

/// One fill candidate: the answer text plus the clue printed for it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LexiconEntry {
    pub word: String,
    pub clue: String,
    /// Hardest puzzle tier this answer is reasonable for. Tiers are
    /// cumulative, so easy entries also serve medium and hard puzzles.
    #[serde(default = "default_tier")]
    pub tier: Difficulty,
    /// Local-interest answers (places, names) that only land for readers
    /// who know the town.
    #[serde(default)]
    pub local: bool,
}

/// Fill vocabulary bucketed by answer length.
pub struct Lexicon {
    by_length: BTreeMap<usize, Vec<LexiconEntry>>,
    clues: HashMap<String, String>,
}

impl Lexicon {
    /// Indexes `entries`, normalizing every answer with [`normalize_word`].
    /// Entries that normalize to fewer than two letters cannot appear in any
    /// grid and are dropped. Where one answer carries several clues, lookups
    /// return the first.
    pub fn new(entries: Vec<LexiconEntry>) -> Self {
        let mut by_length: BTreeMap<usize, Vec<LexiconEntry>> = BTreeMap::new();
        let mut clues: HashMap<String, String> = HashMap::new();

        for mut entry in entries {
            let normalized = normalize_word(&entry.word);
            let length = normalized.chars().count();
            if length < 2 {
                warn!(
                    target: "lexicon",
                    "dropping entry {:?}: too short once normalized",
                    entry.word
                );
                continue;
            }
            entry.word = normalized.clone();
            clues
                .entry(normalized)
                .or_insert_with(|| entry.clue.clone());
            by_length.entry(length).or_default().push(entry);
        }

        trace!(
            target: "lexicon",
            "indexed {} entries across {} lengths",
            by_length.values().map(Vec::len).sum::<usize>(),
            by_length.len()
        );

        Lexicon { by_length, clues }
    }

    /// The word list shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(word_list::entries())
    }

    /// Loads a caller-supplied word list from a JSON array of entries.
    /// `tier` defaults to easy and `local` to false when omitted.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<LexiconEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Candidates of exactly `length` letters usable at `difficulty`.
    pub fn words_with_length(
        &self,
        length: usize,
        difficulty: Difficulty,
        include_local: bool,
    ) -> Vec<&LexiconEntry> {
        self.by_length
            .get(&length)
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|entry| {
                        entry.tier <= difficulty && (include_local || !entry.local)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clue_for(&self, word: &str) -> Option<&str> {
        self.clues.get(&normalize_word(word)).map(String::as_str)
    }

    /// Lengths that have at least one usable candidate at `difficulty`.
    pub fn lengths(&self, difficulty: Difficulty, include_local: bool) -> BTreeSet<usize> {
        self.by_length
            .iter()
            .filter(|(_, bucket)| {
                bucket
                    .iter()
                    .any(|entry| entry.tier <= difficulty && (include_local || !entry.local))
            })
            .map(|(&length, _)| length)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}

/// Canonical form for fill candidates: letters only, uppercased. Lexicon
/// entries are stored in this form and grid read-backs are compared in it.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_uppercase()
}

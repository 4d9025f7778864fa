//! Player-name normalisation for cross-provider matching.

/// Diacritics folded to ASCII before comparison.
const FOLDS: &[(char, char)] = &[
    ('í', 'i'),
    ('š', 's'),
    ('č', 'c'),
    ('ř', 'r'),
    ('ž', 'z'),
    ('á', 'a'),
    ('é', 'e'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('ý', 'y'),
    ('ñ', 'n'),
    ('ü', 'u'),
    ('ö', 'o'),
    ('ä', 'a'),
];

/// Lower-case and fold the known diacritics.
#[must_use]
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            FOLDS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

/// Folded last whitespace-delimited token, used as a surname key.
#[must_use]
pub fn surname_key(name: &str) -> String {
    let folded = fold(name);
    folded
        .split_whitespace()
        .last()
        .map_or_else(|| folded.clone(), str::to_string)
}

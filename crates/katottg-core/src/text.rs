// crates/katottg-core/src/text.rs

use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Convert a string into a folded key suitable for matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Київ` -> `Kyiv`)
/// 2\) Normalize to lowercase
///
/// Folding both sides of a comparison makes matching case-insensitive and
/// additionally lets Latin-keyboard input find Cyrillic names; two Cyrillic
/// strings still compare exactly as their lowercase forms would.
///
/// # Examples
///
/// ```rust
/// use katottg_core::text::fold_key;
///
/// assert_eq!(fold_key("ІВАНІВКА"), fold_key("іванівка"));
/// assert!(fold_key("Іванівка").contains(&fold_key("іван")));
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// # Examples
///
/// ```rust
/// use katottg_core::text::equals_folded;
///
/// assert!(equals_folded("Микола", "микола"));
/// assert!(!equals_folded("Микола", "Миколаївка"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

// The Ukrainian alphabet in dictionary order. Code-point order misplaces
// ґ, є, і, ї and the soft sign, so sorting needs an explicit rank table.
const UK_ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

static UK_RANK: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    UK_ALPHABET
        .chars()
        .enumerate()
        .map(|(i, c)| (c, i as u8))
        .collect()
});

// Characters outside the alphabet (digits, Latin letters, apostrophes in
// names like Мар'їнка) sort after it, by code point.
fn rank(c: char) -> (u8, u32) {
    match UK_RANK.get(&c) {
        Some(&r) => (r, 0),
        None => (u8::MAX, c as u32),
    }
}

/// Ukrainian-collation comparison of two strings, case-insensitive.
///
/// Used wherever results are presented alphabetically; plain `str` ordering
/// would sort `Ірпінь` after `Яготин`.
pub fn uk_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.chars().map(rank).cmp(b.chars().map(rank))
}

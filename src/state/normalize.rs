use unicode_normalization::UnicodeNormalization;

/// Canonical form used for every text comparison in the table: canonical
/// decomposition, combining diacritical marks (U+0300..=U+036F) removed,
/// then lower-cased.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|ch| !is_combining_mark(*ch)).collect();
    stripped.to_lowercase()
}

fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

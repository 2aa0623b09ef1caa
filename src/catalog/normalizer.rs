/// Collapse a caller-supplied plan or provider name into the canonical
/// catalog key form: zero-width characters removed, all whitespace stripped,
/// ASCII-lowercased.
pub(crate) fn normalize_key(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split_whitespace()
        .collect::<String>()
        .to_ascii_lowercase()
}

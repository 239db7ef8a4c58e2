/// Canonical form of an organizer-entered lookup name: lower-cased, trimmed,
/// internal whitespace runs collapsed to a single hyphen, every character
/// outside [a-z0-9-] stripped.
pub fn normalize_slug(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// URL-path form of a submitted name, used to build the invitation link after
/// a successful lookup. Case is preserved here; the invitation resolver
/// lower-cases at match time.
pub fn slugify(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

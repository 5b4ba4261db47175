//! Slug derivation for entry titles.

use unicode_normalization::UnicodeNormalization;

/// Derive a URL-safe slug from a title.
///
/// The title is NFKD-normalized and anything still outside ASCII is dropped,
/// so accented letters keep their base letter (`é` becomes `e`). The rest is
/// lowercased; letters, digits and underscores are kept, every run of
/// whitespace and hyphens turns into a single hyphen, and all other
/// characters are dropped. Leading and trailing hyphens and underscores are
/// trimmed, so a title made only of punctuation yields an empty slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    let ascii = title
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_lowercase());

    for c in ascii {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c == '-' || c.is_ascii_whitespace() {
            pending_separator = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

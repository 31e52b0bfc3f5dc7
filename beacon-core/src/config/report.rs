//! Text helpers for build-time config diagnostics

/// Prefix of `text` holding at most `max_chars` characters
///
/// Always cuts on a char boundary, so error messages that echo non-ASCII
/// input from `board.toml` can be shortened safely.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

//! Helpers for the `"<artist> - <title>"` lines reported by the player

/// Separator between artist and title in a player status line
pub const TITLE_SEPARATOR: &str = " - ";

/// Extract the song title from a `"<artist> - <title>"` line
///
/// Trailing whitespace (including the newline the player prints) is dropped
/// first. Everything after the first separator is the title, so a title that
/// itself contains `" - "` is kept whole.
///
/// A line without a separator has no artist to strip; the whole trimmed line
/// is returned as a best-effort title. This never fails.
pub fn extract_title(line: &str) -> &str {
    let line = line.trim_end();
    match line.find(TITLE_SEPARATOR) {
        Some(idx) => &line[idx + TITLE_SEPARATOR.len()..],
        None => line,
    }
}

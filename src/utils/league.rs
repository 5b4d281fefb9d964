//! League code helpers.

/// Separator between the region prefix and the division suffix.
pub const LEAGUE_SEPARATOR: char = '-';

/// Returns the region prefix of a league code (`"FRA-1"` → `"FRA"`).
///
/// A code without a separator is returned whole.
pub fn league_prefix(league: &str) -> &str {
    league
        .split_once(LEAGUE_SEPARATOR)
        .map_or(league, |(prefix, _)| prefix)
}

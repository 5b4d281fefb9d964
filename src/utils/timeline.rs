//! Season label → years-since-draft normalization.
//!
//! Season labels carry only two-digit years (`"99-00"`), so the century has to
//! be inferred. Candidates are tried in the order current century, previous
//! century, next century; the first whose offset from the reference year lies
//! strictly inside `(-10, 30)` wins. If none does, the current-century offset
//! is returned anyway and a data-quality warning is logged.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;
use tracing::warn;

static SEASON_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2})\s*-\s*\d{1,2}\s*$").unwrap());

/// Exclusive lower bound of the plausible offset window.
pub const WINDOW_MIN_EXCLUSIVE: i32 = -10;
/// Exclusive upper bound of the plausible offset window.
pub const WINDOW_MAX_EXCLUSIVE: i32 = 30;

/// Errors that can occur while reading a season label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeasonLabelError {
    #[error("Invalid season label: {0:?}")]
    InvalidFormat(String),
    #[error("Draft year {0} is out of range")]
    DraftYearOutOfRange(i32),
}

/// Extracts the leading two-digit year (0-99) of a `"YY-YY"` label.
pub fn season_start_yy(label: &str) -> Result<u32, SeasonLabelError> {
    SEASON_LABEL_REGEX
        .captures(label)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| SeasonLabelError::InvalidFormat(label.to_string()))
}

/// The current calendar year (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Years between `reference_year` and the start of `season`, using today's
/// century as the anchor.
pub fn years_since_reference(season: &str, reference_year: i32) -> Result<i32, SeasonLabelError> {
    years_since_reference_at(season, reference_year, current_year())
}

/// Same as [`years_since_reference`] with an explicit "now" year.
pub fn years_since_reference_at(
    season: &str,
    reference_year: i32,
    now_year: i32,
) -> Result<i32, SeasonLabelError> {
    let yy = season_start_yy(season)? as i32;
    let century = now_year - now_year.rem_euclid(100);

    let offset_from =
        |base: i32| -> Option<i32> { base.checked_add(yy)?.checked_sub(reference_year) };

    for base in [century, century - 100, century + 100] {
        let Some(offset) = offset_from(base) else {
            continue;
        };
        if WINDOW_MIN_EXCLUSIVE < offset && offset < WINDOW_MAX_EXCLUSIVE {
            return Ok(offset);
        }
    }

    warn!(
        "Possible incorrect data: played in season {} and was drafted in {}",
        season, reference_year
    );
    offset_from(century).ok_or(SeasonLabelError::DraftYearOutOfRange(reference_year))
}

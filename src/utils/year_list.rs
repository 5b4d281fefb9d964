//! Parsing of draft year lists such as `2019,2021-2023`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearListError {
    #[error("empty year list")]
    Empty,
    #[error("invalid year '{0}'")]
    InvalidYear(String),
    #[error("range '{0}' ends before it starts")]
    ReversedRange(String),
}

/// Parses a comma-separated list of years and inclusive `start-end` ranges.
///
/// Order is preserved and repeated years are kept once, at their first
/// position.
pub fn parse_year_list(input: &str) -> Result<Vec<i32>, YearListError> {
    let mut years: Vec<i32> = Vec::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let span = match part.split_once('-') {
            Some((start, end)) => {
                let start = parse_year(start)?;
                let end = parse_year(end)?;
                if end < start {
                    return Err(YearListError::ReversedRange(part.to_string()));
                }
                start..=end
            }
            None => {
                let year = parse_year(part)?;
                year..=year
            }
        };

        for year in span {
            if !years.contains(&year) {
                years.push(year);
            }
        }
    }

    if years.is_empty() {
        return Err(YearListError::Empty);
    }

    Ok(years)
}

fn parse_year(s: &str) -> Result<i32, YearListError> {
    let s = s.trim();
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(YearListError::InvalidYear(s.to_string()));
    }
    s.parse()
        .map_err(|_| YearListError::InvalidYear(s.to_string()))
}

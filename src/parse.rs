use std::str::FromStr;

use thiserror::Error;

use crate::color::Color;

/// Why a line failed the `R, G, B` / `R, G, B, A` grammar. Any of these makes
/// the pipeline skip the line; none of them aborts a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty line")]
    Empty,
    #[error("expected 3 or 4 components, found {0}")]
    ComponentCount(usize),
    #[error("component {0:?} is not an unsigned decimal integer")]
    InvalidComponent(String),
    #[error("component {0:?} is out of range (0-255)")]
    OutOfRange(String),
}

/// One channel: a bare run of ASCII digits whose value fits in 0-255.
/// Leading zeros are accepted; signs, whitespace, and anything else are not.
fn channel(token: &str) -> Result<u8, ParseColorError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseColorError::InvalidComponent(token.to_owned()));
    }
    let digits = token.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    match digits.parse::<u32>() {
        Ok(value) if value <= 255 => Ok(value as u8),
        _ => Err(ParseColorError::OutOfRange(token.to_owned())),
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// The separator is exactly `", "`; no leading or trailing characters
    /// are permitted anywhere on the line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.is_empty() {
            return Err(ParseColorError::Empty);
        }
        let channels = line
            .split(", ")
            .map(channel)
            .collect::<Result<Vec<u8>, _>>()?;
        match channels[..] {
            [r, g, b] => Ok(Color::opaque(r, g, b)),
            [r, g, b, a] => Ok(Color::new(r, g, b, a)),
            _ => Err(ParseColorError::ComponentCount(channels.len())),
        }
    }
}

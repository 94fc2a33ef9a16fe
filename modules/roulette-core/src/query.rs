//! Free-text message parsing.
//!
//! A message such as `dinner in Santa Barbara, CA $ open within 10mi` is split
//! into tokens, and keyword tokens (`in`, `open`, `within`, `$`..`$$$$`) are
//! recorded with their positions. A keyword's phrase is the run of tokens
//! after it, up to the next keyword or the end of the message, so `in` and
//! `within` phrases are scoped correctly whatever order they appear in.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::{PriceLevel, SearchRequest};
use crate::units::{to_meters, UnitError};

/// One-token distance: a number with an optional unit glued on ("10mi", "1000").
static RE_WITHIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)([A-Za-z]*)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no location provided")]
    NoLocation,

    #[error("invalid value provided for within distance")]
    InvalidWithinValue,

    #[error("invalid within options provided")]
    InvalidWithinOptions,

    #[error(transparent)]
    Unit(#[from] UnitError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    In,
    Open,
    Within,
    Price(PriceLevel),
    /// Sentinel closing the final phrase.
    End,
}

impl Keyword {
    fn classify(token: &str) -> Option<Self> {
        if let Some(level) = PriceLevel::from_dollars(token) {
            return Some(Keyword::Price(level));
        }
        match token.to_lowercase().as_str() {
            "in" => Some(Keyword::In),
            "open" => Some(Keyword::Open),
            "within" => Some(Keyword::Within),
            _ => None,
        }
    }
}

/// Keyword occurrences as `(position, keyword)` pairs in ascending position
/// order, terminated by an `End` sentinel at the token count.
struct Boundaries {
    marks: Vec<(usize, Keyword)>,
}

impl Boundaries {
    /// `marks` must already be in ascending position order.
    fn new(mut marks: Vec<(usize, Keyword)>, token_count: usize) -> Self {
        debug_assert!(marks.windows(2).all(|w| w[0].0 < w[1].0));
        marks.push((token_count, Keyword::End));
        Self { marks }
    }

    fn first(&self, keyword: Keyword) -> Option<usize> {
        self.marks
            .iter()
            .find(|(_, k)| *k == keyword)
            .map(|(pos, _)| *pos)
    }

    fn contains(&self, keyword: Keyword) -> bool {
        self.first(keyword).is_some()
    }

    /// Tokens strictly after `start`, up to the next boundary.
    fn phrase<'a>(&self, tokens: &'a [&'a str], start: usize) -> &'a [&'a str] {
        let end = self
            .marks
            .iter()
            .map(|(pos, _)| *pos)
            .find(|&pos| pos > start)
            .unwrap_or(tokens.len());
        &tokens[start + 1..end]
    }
}

/// Parse a free-text message into a search request.
///
/// Tokens before the first `in` or `within` that are not keywords form the
/// search term. Anything after that point belongs to a phrase or is dropped.
pub fn parse_request(text: &str) -> Result<SearchRequest, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let mut marks = Vec::new();
    let mut term = Vec::new();
    let mut price_levels = Vec::new();
    let mut in_phrase = false;

    for (pos, token) in tokens.iter().enumerate() {
        match Keyword::classify(token) {
            Some(keyword) => {
                match keyword {
                    Keyword::Price(level) => price_levels.push(level),
                    Keyword::In | Keyword::Within => in_phrase = true,
                    _ => {}
                }
                marks.push((pos, keyword));
            }
            None if !in_phrase => term.push(*token),
            None => {}
        }
    }

    let boundaries = Boundaries::new(marks, tokens.len());

    let location = match boundaries.first(Keyword::In) {
        Some(pos) => {
            let phrase = boundaries.phrase(&tokens, pos);
            if phrase.is_empty() {
                return Err(ParseError::NoLocation);
            }
            phrase.join(" ")
        }
        None => String::new(),
    };

    let radius_meters = match boundaries.first(Keyword::Within) {
        Some(pos) => parse_within(boundaries.phrase(&tokens, pos))?,
        None => 0,
    };

    Ok(SearchRequest {
        term: term.join(" "),
        location,
        open_now: boundaries.contains(Keyword::Open),
        price_levels,
        radius_meters,
        ..Default::default()
    })
}

/// Distance phrase to whole meters. Accepts `10mi`, `1000` (meters) or `10 mi`.
fn parse_within(phrase: &[&str]) -> Result<u32, ParseError> {
    let meters = match phrase {
        [single] => {
            let caps = RE_WITHIN
                .captures(single)
                .ok_or(ParseError::InvalidWithinValue)?;
            let value = parse_distance(&caps[1])?;
            let unit = &caps[2];
            if unit.is_empty() {
                value
            } else {
                to_meters(value, &unit.to_lowercase())?
            }
        }
        [value, unit] => to_meters(parse_distance(value)?, &unit.to_lowercase())?,
        _ => return Err(ParseError::InvalidWithinOptions),
    };

    Ok(meters as u32)
}

fn parse_distance(raw: &str) -> Result<f64, ParseError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ParseError::InvalidWithinValue),
    }
}

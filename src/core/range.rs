//! Range token parsing for secret character classes.
//!
//! A range token is either the `!` marker for the ASCII punctuation band or
//! a 3-character `x-y` string naming an inclusive character interval.

/// Half-open interval of character code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    pub from: u32,
    pub to: u32,
}

impl CharRange {
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    /// Number of code points in the interval.
    pub fn width(&self) -> u32 {
        self.to - self.from
    }

    pub fn contains(&self, code: u32) -> bool {
        code >= self.from && code < self.to
    }
}

/// ASCII punctuation band selected by the `!` marker.
pub const SPECIAL_RANGE: CharRange = CharRange::new(33, 48);

/// Parse a compact range token into a code-point interval.
///
/// `"!"` maps to the punctuation band, `"a-f"` to `[97, 103)`. Returns
/// `None` for any token that is not a strictly increasing 3-character
/// `x-y` string; callers drop such tokens silently.
pub fn parse(token: &str) -> Option<CharRange> {
    if token == "!" {
        return Some(SPECIAL_RANGE);
    }

    let mut chars = token.chars();
    let (from, sep, to) = (chars.next()?, chars.next()?, chars.next()?);
    if chars.next().is_some() || sep != '-' {
        return None;
    }

    let (from, to) = (from as u32, to as u32);
    if from >= to {
        return None;
    }
    Some(CharRange::new(from, to + 1))
}

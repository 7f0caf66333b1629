use std::fmt::Display;

use crate::limits::LIMITS;

/// Text of a post being composed. Never longer than
/// [`Limits::max_post_length`](crate::limits::Limits) characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft(String);

/// Result of feeding raw input through [`Draft::clamp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clamped {
    pub draft: Draft,
    /// The raw input was longer than the limit and got cut.
    pub overflowed: bool,
}

impl Draft {
    /// Keeps the first `max_post_length` characters of `raw`.
    ///
    /// Length is counted in Unicode scalar values, so multi-byte input is
    /// never split inside a character.
    pub fn clamp(raw: &str) -> Clamped {
        let limit = LIMITS.max_post_length;
        match raw.char_indices().nth(limit) {
            Some((cut, _)) => Clamped {
                draft: Self(raw[..cut].to_owned()),
                overflowed: true,
            },
            None => Clamped {
                draft: Self(raw.to_owned()),
                overflowed: false,
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Draft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text of the notice shown when input hits the limit.
pub fn limit_notice() -> String {
    format!(
        "Your message is too long, the limit is {} characters",
        LIMITS.max_post_length
    )
}

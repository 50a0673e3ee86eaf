//! Text codec: the canonical human-readable form.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::grammar;
use crate::interval::Interval;

impl Interval {
    /// Parses text such as `"1h30m45s"`, `"-30s"` or `"250ms"`.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        grammar::parse(s).map(Self::from_nanos)
    }

    /// Returns the canonical text form as bytes.
    pub fn marshal_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Parses the canonical text form from bytes. Non-UTF-8 input is invalid.
    pub fn unmarshal_text(text: &[u8]) -> Result<Self, ParseError> {
        let s = std::str::from_utf8(text).map_err(|_| ParseError::Invalid {
            input: String::from_utf8_lossy(text).into_owned(),
        })?;
        Self::parse(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(32);
        grammar::format(&mut buf, self.as_nanos())?;
        f.pad(&buf)
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

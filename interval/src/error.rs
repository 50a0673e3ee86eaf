//! Error types for interval decoding.

use std::fmt;

use thiserror::Error;

/// Text that does not follow the duration grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty.
    #[error("interval: invalid duration \"\"")]
    Empty,

    /// The input is not a sequence of `<number><unit>` components.
    #[error("interval: invalid duration {input:?}")]
    Invalid { input: String },

    /// A number was not followed by a unit, as in `"42"`.
    #[error("interval: missing unit in duration {input:?}")]
    MissingUnit { input: String },

    /// A component used a unit outside `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`.
    #[error("interval: unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    /// The magnitude does not fit in a signed 64-bit nanosecond count.
    #[error("interval: duration {input:?} out of range")]
    Overflow { input: String },
}

/// Which kind of database value carried unparseable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    String,
    Bytes,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::String => f.write_str("string"),
            SourceKind::Bytes => f.write_str("bytes"),
        }
    }
}

/// Error type for interval conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text did not follow the duration grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A scanned database value held text that did not parse.
    #[error("interval: failed to parse duration from {kind} '{text}': {source}")]
    Source {
        kind: SourceKind,
        text: String,
        #[source]
        source: ParseError,
    },

    /// A scanned database value had a type that cannot hold an interval.
    #[error("interval: cannot scan type {0} into Interval")]
    UnsupportedType(String),

    /// A native duration could not represent the value.
    #[error("interval: value out of range for {0}")]
    OutOfRange(&'static str),
}

/// Result type for interval conversions.
pub type Result<T> = std::result::Result<T, Error>;

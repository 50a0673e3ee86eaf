//! SQL codec: store the canonical text, read back whatever the driver hands us.
//!
//! Columns holding intervals are written as text so the stored value is
//! self-describing. On read, a value may arrive as text, raw bytes, an integer
//! nanosecond count or a float nanosecond count; [`SqlValue`] names those
//! cases and [`Interval::scan`] decodes them.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::error::{Error, Result, SourceKind};
use crate::interval::Interval;

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;

/// A raw column value as handed over by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue<'a> {
    /// SQL `NULL`.
    Null,
    /// A text column.
    Text(&'a str),
    /// A binary column, read as text.
    Bytes(&'a [u8]),
    /// An integer nanosecond count.
    Int(i64),
    /// A floating-point nanosecond count.
    Float(f64),
    /// Any other column type, identified by name.
    Other(Cow<'a, str>),
}

impl Interval {
    /// Returns the value to store in a database column: the canonical text.
    pub fn value(&self) -> String {
        self.to_string()
    }

    /// Decodes a database column value.
    ///
    /// `NULL` yields [`Interval::ZERO`]. Floats are truncated toward zero,
    /// so fractional nanoseconds are dropped rather than rounded.
    pub fn scan<'a>(src: impl Into<SqlValue<'a>>) -> Result<Self> {
        match src.into() {
            SqlValue::Null => Ok(Self::ZERO),
            SqlValue::Text(text) => parse_source(SourceKind::String, text),
            SqlValue::Bytes(bytes) => {
                parse_source(SourceKind::Bytes, &String::from_utf8_lossy(bytes))
            }
            SqlValue::Int(nanos) => Ok(Self::from_nanos(nanos)),
            SqlValue::Float(nanos) => {
                if nanos.fract() != 0.0 {
                    trace!(nanos, "dropping fractional nanoseconds from scanned float");
                }
                Ok(Self::from_nanos(nanos as i64))
            }
            SqlValue::Other(type_name) => {
                debug!(%type_name, "cannot scan type into Interval");
                Err(Error::UnsupportedType(type_name.into_owned()))
            }
        }
    }
}

fn parse_source(kind: SourceKind, text: &str) -> Result<Interval> {
    Interval::parse(text).map_err(|source| {
        debug!(%kind, text, "failed to parse scanned interval");
        Error::Source {
            kind,
            text: text.to_owned(),
            source,
        }
    })
}

impl<'a> From<&'a str> for SqlValue<'a> {
    fn from(text: &'a str) -> Self {
        SqlValue::Text(text)
    }
}

impl<'a> From<&'a String> for SqlValue<'a> {
    fn from(text: &'a String) -> Self {
        SqlValue::Text(text)
    }
}

impl<'a> From<&'a [u8]> for SqlValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        SqlValue::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for SqlValue<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        SqlValue::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for SqlValue<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        SqlValue::Bytes(bytes)
    }
}

impl From<i64> for SqlValue<'_> {
    fn from(nanos: i64) -> Self {
        SqlValue::Int(nanos)
    }
}

impl From<f64> for SqlValue<'_> {
    fn from(nanos: f64) -> Self {
        SqlValue::Float(nanos)
    }
}

impl<'a, T: Into<SqlValue<'a>>> From<Option<T>> for SqlValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

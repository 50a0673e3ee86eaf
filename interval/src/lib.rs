//! A nanosecond time interval that travels through text, JSON and SQL.
//!
//! [`Interval`] wraps a signed nanosecond count and converts itself to and
//! from three external representations, so a timeout or retry delay can be
//! embedded in configuration files, JSON payloads and database rows without
//! conversion code at each boundary:
//!
//! - text: [`Display`](std::fmt::Display) / [`FromStr`](std::str::FromStr),
//!   using the canonical form `"1h30m45s"`, `"250ms"`, `"-30s"`, `"0s"`
//! - JSON (and any other serde format): always a string, never a number
//! - SQL: [`Interval::value`] / [`Interval::scan`], plus sqlx
//!   `Type`/`Encode`/`Decode` impls behind the `postgres` and `sqlite`
//!   features
//!
//! # Example
//!
//! ```rust
//! use interval::{Interval, SqlValue};
//!
//! let timeout: Interval = "1h30m45s".parse().unwrap();
//! assert_eq!(timeout, Interval::from_secs(3600 + 30 * 60 + 45));
//! assert_eq!(timeout.to_string(), "1h30m45s");
//!
//! // JSON is always a quoted string
//! let json = serde_json::to_string(&timeout).unwrap();
//! assert_eq!(json, r#""1h30m45s""#);
//! assert!(serde_json::from_str::<Interval>("42").is_err());
//!
//! // Database columns accept text, bytes, integer or float nanoseconds
//! assert_eq!(Interval::scan(5_000_000_000_i64).unwrap(), Interval::from_secs(5));
//! assert_eq!(Interval::scan(SqlValue::Null).unwrap(), Interval::ZERO);
//! ```

mod error;
mod grammar;
mod interval;
mod json;
mod sql;
mod text;

pub use error::{Error, ParseError, Result, SourceKind};
pub use interval::Interval;
pub use sql::SqlValue;

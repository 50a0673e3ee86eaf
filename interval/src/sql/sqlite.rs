//! sqlx support for SQLite.
//!
//! SQLite reports the storage class of each value rather than the declared
//! column type, so a single column may mix text, blob, integer and real rows.

use std::borrow::Cow;

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::{Database, Decode, Encode, Type, TypeInfo, ValueRef};

use super::SqlValue;
use crate::interval::Interval;

impl Type<Sqlite> for Interval {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <str as Type<Sqlite>>::compatible(ty)
            || <[u8] as Type<Sqlite>>::compatible(ty)
            || <i64 as Type<Sqlite>>::compatible(ty)
            || <f64 as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for Interval {
    fn encode_by_ref(
        &self,
        args: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, Sqlite>>::encode(self.value(), args)
    }
}

impl<'r> Decode<'r, Sqlite> for Interval {
    fn decode(value: <Sqlite as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Interval::scan(SqlValue::Null).map_err(Into::into);
        }

        let ty = value.type_info().into_owned();
        let raw = if <str as Type<Sqlite>>::compatible(&ty) {
            SqlValue::Text(<&str as Decode<Sqlite>>::decode(value)?)
        } else if <[u8] as Type<Sqlite>>::compatible(&ty) {
            SqlValue::Bytes(<&[u8] as Decode<Sqlite>>::decode(value)?)
        } else if <i64 as Type<Sqlite>>::compatible(&ty) {
            SqlValue::Int(<i64 as Decode<Sqlite>>::decode(value)?)
        } else if <f64 as Type<Sqlite>>::compatible(&ty) {
            SqlValue::Float(<f64 as Decode<Sqlite>>::decode(value)?)
        } else {
            SqlValue::Other(Cow::Owned(ty.name().to_owned()))
        };

        Interval::scan(raw).map_err(Into::into)
    }
}

//! sqlx support for Postgres.

use std::borrow::Cow;

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgHasArrayType, PgTypeInfo, Postgres};
use sqlx::{Database, Decode, Encode, Type, TypeInfo, ValueRef};

use super::SqlValue;
use crate::interval::Interval;

impl Type<Postgres> for Interval {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <str as Type<Postgres>>::compatible(ty)
            || <[u8] as Type<Postgres>>::compatible(ty)
            || <i64 as Type<Postgres>>::compatible(ty)
            || <i32 as Type<Postgres>>::compatible(ty)
            || <i16 as Type<Postgres>>::compatible(ty)
            || <f64 as Type<Postgres>>::compatible(ty)
            || <f32 as Type<Postgres>>::compatible(ty)
    }
}

impl PgHasArrayType for Interval {
    fn array_type_info() -> PgTypeInfo {
        <String as PgHasArrayType>::array_type_info()
    }
}

impl Encode<'_, Postgres> for Interval {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'_>,
    ) -> Result<IsNull, BoxDynError> {
        <String as Encode<'_, Postgres>>::encode(self.value(), buf)
    }
}

/// How a Postgres column type is read before it reaches [`Interval::scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum ColumnKind {
    Text,
    Bytes,
    Int8,
    Int4,
    Int2,
    Float8,
    Float4,
    Other(String),
}

fn column_kind(ty: &PgTypeInfo) -> ColumnKind {
    if <str as Type<Postgres>>::compatible(ty) {
        ColumnKind::Text
    } else if <[u8] as Type<Postgres>>::compatible(ty) {
        ColumnKind::Bytes
    } else if <i64 as Type<Postgres>>::compatible(ty) {
        ColumnKind::Int8
    } else if <i32 as Type<Postgres>>::compatible(ty) {
        ColumnKind::Int4
    } else if <i16 as Type<Postgres>>::compatible(ty) {
        ColumnKind::Int2
    } else if <f64 as Type<Postgres>>::compatible(ty) {
        ColumnKind::Float8
    } else if <f32 as Type<Postgres>>::compatible(ty) {
        ColumnKind::Float4
    } else {
        ColumnKind::Other(ty.name().to_owned())
    }
}

impl<'r> Decode<'r, Postgres> for Interval {
    fn decode(value: <Postgres as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Interval::scan(SqlValue::Null).map_err(Into::into);
        }

        let kind = column_kind(&value.type_info());
        let raw = match kind {
            ColumnKind::Text => SqlValue::Text(<&str as Decode<Postgres>>::decode(value)?),
            ColumnKind::Bytes => SqlValue::Bytes(<&[u8] as Decode<Postgres>>::decode(value)?),
            ColumnKind::Int8 => SqlValue::Int(<i64 as Decode<Postgres>>::decode(value)?),
            ColumnKind::Int4 => SqlValue::Int(<i32 as Decode<Postgres>>::decode(value)?.into()),
            ColumnKind::Int2 => SqlValue::Int(<i16 as Decode<Postgres>>::decode(value)?.into()),
            ColumnKind::Float8 => SqlValue::Float(<f64 as Decode<Postgres>>::decode(value)?),
            ColumnKind::Float4 => {
                SqlValue::Float(<f32 as Decode<Postgres>>::decode(value)?.into())
            }
            ColumnKind::Other(name) => SqlValue::Other(Cow::Owned(name)),
        };

        Interval::scan(raw).map_err(Into::into)
    }
}

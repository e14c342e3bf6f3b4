//! Parameter encoding for the PostgreSQL `DATE` type.
//!
//! Encoding widens the wrapper to `chrono::NaiveDate` and defers to the
//! driver's built-in `DATE` codec, so no wire layout is duplicated here.
//! Container shapes (`&Date`, `Option<Date>`, `Vec<Date>`, `&[Date]`, and
//! their compositions) come from the driver's blanket impls.

use std::error::Error;

use bytes::BytesMut;
use chrono::NaiveDate;
use postgres_types::{IsNull, ToSql, Type, to_sql_checked};

use crate::Date;

impl ToSql for Date {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        NaiveDate::from(*self).to_sql(ty, out)
    }

    fn accepts(ty: &Type) -> bool {
        <NaiveDate as ToSql>::accepts(ty)
    }

    to_sql_checked!();
}

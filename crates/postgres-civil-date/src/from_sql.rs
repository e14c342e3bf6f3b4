//! Result-column decoding for the PostgreSQL `DATE` type.
//!
//! Decoding runs the driver's built-in `DATE` codec to a `chrono::NaiveDate`
//! and then narrows into the civil year range. NULL follows the driver
//! convention: `Option<Date>` turns SQL NULL into `None`, while a bare
//! `Date` target reports `WasNull`.

use std::error::Error;

use chrono::NaiveDate;
use postgres_types::{FromSql, Type};

use crate::Date;

impl<'a> FromSql<'a> for Date {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        let native = NaiveDate::from_sql(ty, raw)?;
        Ok(Date::try_from(native)?)
    }

    fn accepts(ty: &Type) -> bool {
        <NaiveDate as FromSql>::accepts(ty)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil;
    use postgres_types::WasNull;

    use super::*;
    use crate::DateError;

    // Binary `DATE` values are a big-endian i32 day count relative to
    // 2000-01-01.
    fn wire_bytes(days: i32) -> [u8; 4] {
        days.to_be_bytes()
    }

    fn days_from_epoch(year: i32, month: u32, day: u32) -> i32 {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        i32::try_from((date - epoch).num_days()).unwrap()
    }

    #[test]
    fn test_decode_known_day_count() {
        let raw = wire_bytes(days_from_epoch(2025, 2, 28));
        let date = Date::from_sql(&Type::DATE, &raw).unwrap();
        assert_eq!(date, Date::from(civil::date(2025, 2, 28)));
    }

    #[test]
    fn test_decode_rejects_dates_past_the_civil_range() {
        let raw = wire_bytes(days_from_epoch(10_000, 1, 1));
        let err = Date::from_sql(&Type::DATE, &raw).unwrap_err();
        assert!(err.downcast_ref::<DateError>().is_some());
    }

    #[test]
    fn test_infinity_sentinels_fail_in_the_native_codec() {
        // i32::MAX and i32::MIN are the `infinity` / `-infinity` sentinels.
        for sentinel in [i32::MAX, i32::MIN] {
            let raw = wire_bytes(sentinel);
            let err = Date::from_sql(&Type::DATE, &raw).unwrap_err();
            assert!(err.downcast_ref::<DateError>().is_none());
        }
    }

    #[test]
    fn test_truncated_bytes_fail() {
        assert!(Date::from_sql(&Type::DATE, &[0x00, 0x01]).is_err());
    }

    #[test]
    fn test_null_into_bare_date_is_was_null() {
        let err = Date::from_sql_null(&Type::DATE).unwrap_err();
        assert!(err.downcast_ref::<WasNull>().is_some());
    }

    #[test]
    fn test_null_into_option_is_none() {
        let got = <Option<Date> as FromSql>::from_sql_nullable(&Type::DATE, None).unwrap();
        assert_eq!(got, None);
    }

    #[test]
    fn test_accepts_follows_the_native_codec() {
        assert!(<Date as FromSql>::accepts(&Type::DATE));
        assert!(!<Date as FromSql>::accepts(&Type::TEXT));
        assert!(!<Date as FromSql>::accepts(&Type::TIMESTAMPTZ));
    }
}

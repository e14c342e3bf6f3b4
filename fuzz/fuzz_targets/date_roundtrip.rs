#![no_main]

use arbitrary::Arbitrary;
use bytes::BytesMut;
use jiff::civil;
use libfuzzer_sys::fuzz_target;
use postgres_civil_date::Date;
use postgres_types::{FromSql, ToSql, Type};

/// Arbitrary year/month/day triples, mostly invalid on purpose.
#[derive(Debug, Arbitrary)]
struct FuzzDate {
    year: i16,
    month: i8,
    day: i8,
}

fuzz_target!(|input: FuzzDate| {
    // Only valid civil dates can be constructed at all
    let Ok(date) = civil::Date::new(input.year, input.month, input.day) else {
        return;
    };
    let date = Date::from(date);

    let mut buf = BytesMut::new();
    date.to_sql(&Type::DATE, &mut buf).unwrap();

    // Whatever encodes must decode back to the same date
    let back = Date::from_sql(&Type::DATE, &buf).unwrap();
    assert_eq!(back, date);
});

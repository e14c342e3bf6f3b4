#![no_main]

use libfuzzer_sys::fuzz_target;
use postgres_civil_date::Date;
use postgres_types::{FromSql, Type};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes may fail but must never panic
    let _ = Date::from_sql(&Type::DATE, data);
    let _ = <Option<Date>>::from_sql_nullable(&Type::DATE, Some(data));

    // Array decoding takes a different parse path
    let _ = <Vec<Date>>::from_sql(&Type::DATE_ARRAY, data);
});

//! Civil date round-trip example.
//!
//! This example demonstrates how to pass `Date` values as query parameters
//! and read them back from result rows, including NULLs and arrays.
//!
//! # Running
//!
//! ```bash
//! # Set connection details via environment variables
//! export PGHOST=localhost
//! export PGUSER=postgres
//! export PGPASSWORD=postgres
//!
//! cargo run --example roundtrip
//! ```

// Allow common patterns in example code
#![allow(clippy::unwrap_used, clippy::expect_used)]

use jiff::civil;
use postgres_civil_date::Date;
use tokio_postgres::NoTls;

#[tokio::main]
async fn main() -> Result<(), tokio_postgres::Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Build a connection string from the standard PG* environment variables
    let host = std::env::var("PGHOST").unwrap_or_else(|_| "localhost".into());
    let user = std::env::var("PGUSER").unwrap_or_else(|_| "postgres".into());
    let password = std::env::var("PGPASSWORD").unwrap_or_else(|_| "postgres".into());
    let dbname = std::env::var("PGDATABASE").unwrap_or_else(|_| "postgres".into());

    let conn_str = format!("host={host} user={user} password={password} dbname={dbname}");

    println!("Connecting to PostgreSQL at {host}...");

    let (client, connection) = tokio_postgres::connect(&conn_str, NoTls).await?;
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            eprintln!("connection error: {err}");
        }
    });

    println!("Connected successfully!");

    // A civil date goes straight through as a DATE parameter
    let day = Date::from(civil::date(2025, 2, 28));
    let row = client.query_one("SELECT $1::date", &[&day]).await?;
    let back: Date = row.try_get(0)?;
    println!("Round-tripped {day} -> {back}");

    // Table storage works the same way
    client
        .batch_execute(
            "CREATE TEMPORARY TABLE bookings (
                id SERIAL PRIMARY KEY,
                stay_on DATE,
                booked_on DATE NOT NULL
            )",
        )
        .await?;

    let booked = Date::from(civil::date(2025, 1, 15));
    client
        .execute(
            "INSERT INTO bookings (stay_on, booked_on) VALUES ($1, $2), ($3, $4)",
            &[&Some(day), &booked, &None::<Date>, &booked],
        )
        .await?;

    let rows = client
        .query("SELECT stay_on, booked_on FROM bookings ORDER BY id", &[])
        .await?;
    for row in rows {
        let stay: Option<Date> = row.try_get(0)?;
        let booked: Date = row.try_get(1)?;
        match stay {
            Some(stay) => println!("Booked {booked}, staying {stay}"),
            None => println!("Booked {booked}, stay date still open"),
        }
    }

    // Arrays map to Vec<Date>
    let holidays = vec![
        Date::from(civil::date(2025, 12, 25)),
        Date::from(civil::date(2026, 1, 1)),
    ];
    let row = client.query_one("SELECT $1::date[]", &[&holidays]).await?;
    let back: Vec<Date> = row.try_get(0)?;
    println!("Holidays round-tripped: {back:?}");

    Ok(())
}

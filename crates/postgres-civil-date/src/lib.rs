//! # postgres-civil-date
//!
//! PostgreSQL `DATE` bindings for [`jiff::civil::Date`].
//!
//! `tokio-postgres` and its siblings already map the SQL `date` type to
//! `chrono::NaiveDate`. This crate extends that mapping to jiff's civil
//! dates through a thin wrapper: [`Date`] encodes by widening to the
//! driver's existing `NaiveDate` codec and decodes by narrowing the result
//! back into the civil year range. No wire format is reimplemented here.
//!
//! ## Type Mappings
//!
//! | PostgreSQL Type | Rust Type |
//! |-----------------|-----------|
//! | `DATE` | [`Date`] (wrapping `jiff::civil::Date`) |
//! | `DATE` | `chrono::NaiveDate` (built into the driver) |
//! | `DATE[]` | `Vec<Date>` / `Vec<Option<Date>>` |
//!
//! ## Features
//!
//! - `serde`: transparent `Serialize`/`Deserialize` for [`Date`]
//!
//! ## Quick start
//!
//! ```no_run
//! use jiff::civil::date;
//! use postgres_civil_date::Date;
//! use tokio_postgres::NoTls;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let (client, connection) =
//!     tokio_postgres::connect("host=localhost user=postgres", NoTls).await?;
//! tokio::spawn(connection);
//!
//! let day = Date::from(date(2025, 2, 28));
//! let row = client.query_one("SELECT $1::date", &[&day]).await?;
//! let back: Date = row.try_get(0)?;
//! assert_eq!(back, day);
//! # Ok(())
//! # }
//! ```
//!
//! ## Binding model
//!
//! There is nothing to register at runtime. The driver resolves codecs
//! through trait impls fixed at compile time, and the container shapes
//! (`&Date`, `Option<Date>`, `Vec<Date>`, `&[Date]`, and their nested
//! combinations) come from the driver's blanket impls. Binding the civil
//! date type a second time is not a latent duplicate entry but a coherence
//! error:
//!
//! ```compile_fail,E0117
//! use bytes::BytesMut;
//! use postgres_types::{IsNull, ToSql, Type};
//!
//! impl ToSql for jiff::civil::Date {
//!     fn to_sql(
//!         &self,
//!         _: &Type,
//!         _: &mut BytesMut,
//!     ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
//!         Ok(IsNull::No)
//!     }
//!
//!     fn accepts(_: &Type) -> bool {
//!         true
//!     }
//!
//!     postgres_types::to_sql_checked!();
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod date;
mod error;
mod from_sql;
mod to_sql;

pub use date::Date;
pub use error::DateError;

use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

use landdev_core_db::repository::error::DuplicateKey;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} bytes)").into()
    })
}

/// Maps a unique-constraint violation to [`DuplicateKey`], passing every
/// other error through.
pub fn map_unique_violation(err: sqlx::Error, key: &str) -> Box<dyn Error + Send + Sync> {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Box::new(DuplicateKey(key.to_string()))
        }
        _ => Box::new(err),
    }
}

#[cfg(any(feature = "postgres", feature = "sqlite"))]
use sqlx_core::from_row::FromRow;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use sqlx_core::row::Row;
#[cfg(feature = "postgres")]
use sqlx_postgres::PgRow;
#[cfg(feature = "sqlite")]
use sqlx_sqlite::SqliteRow;

#[cfg(any(feature = "postgres", feature = "sqlite"))]
use super::*;

// External schemas declare the key as either INTEGER or BIGINT.
#[cfg(any(feature = "postgres", feature = "sqlite"))]
fn widen_id<R>(row: &R, column: &str) -> Result<i64, sqlx_core::Error>
where
    R: Row,
    for<'r> i64: sqlx_core::decode::Decode<'r, R::Database> + sqlx_core::types::Type<R::Database>,
    for<'r> i32: sqlx_core::decode::Decode<'r, R::Database> + sqlx_core::types::Type<R::Database>,
    for<'c> &'c str: sqlx_core::column::ColumnIndex<R>,
{
    match row.try_get::<i64, _>(column) {
        Ok(value) => Ok(value),
        Err(sqlx_core::Error::ColumnDecode { .. }) => row.try_get::<i32, _>(column).map(i64::from),
        Err(err) => Err(err),
    }
}

macro_rules! impl_from_row {
    ($ty:ty, $row:ident => $body:block) => {
        #[cfg(feature = "sqlite")]
        impl FromRow<'_, SqliteRow> for $ty {
            fn from_row($row: &SqliteRow) -> Result<Self, sqlx_core::Error> {
                $body
            }
        }

        #[cfg(feature = "postgres")]
        impl FromRow<'_, PgRow> for $ty {
            fn from_row($row: &PgRow) -> Result<Self, sqlx_core::Error> {
                $body
            }
        }
    };
}

impl_from_row!(User, row => {
        Ok(Self {
            id: widen_id(row, "id")?,
            name: row.try_get("name")?,
        })
    }
);

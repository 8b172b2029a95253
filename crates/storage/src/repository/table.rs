use std::marker::PhantomData;

use sqlx::{FromRow, PgPool, postgres::PgRow};

use crate::error::{Result, StorageError};
use crate::schema::{Entity, Table};

/// Read access to any model table.
///
/// Only lifters are managed over HTTP; every other table is written by
/// external tooling and read through this repository.
pub struct TableRepository<'a, T> {
    pool: &'a PgPool,
    _model: PhantomData<T>,
}

impl<'a, T> TableRepository<'a, T>
where
    T: Table + for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            _model: PhantomData,
        }
    }

    /// All rows, archived ones included, ordered by the leading key column
    pub async fn list(&self) -> Result<Vec<T>> {
        let sql = format!("SELECT * FROM {} ORDER BY 1", T::NAME);

        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(self.pool).await?;
        Ok(rows)
    }
}

impl<T> TableRepository<'_, T>
where
    T: Entity + for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub async fn find_by_id(&self, id: i32) -> Result<T> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", T::NAME);

        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }
}

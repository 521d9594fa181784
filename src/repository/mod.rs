use crate::db::{DbConnection, DbPool};
use crate::domain::product::StoredProduct;
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};
pub use product::DieselProductWriter;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Take a connection out of the pool for the exclusive use of one
    /// synchronization run.
    pub fn writer(&self) -> RepositoryResult<DieselProductWriter> {
        Ok(DieselProductWriter::new(self.conn()?))
    }
}

/// Read-only operations for stored products.
pub trait ProductReader {
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<StoredProduct>>;
    /// List every stored product ordered by identifier.
    fn list_products(&self) -> RepositoryResult<Vec<StoredProduct>>;
    /// Count stored products.
    fn count_products(&self) -> RepositoryResult<usize>;
}

/// Batch write operations used by the synchronizer.
///
/// Writes become durable only after [`ProductWriter::commit`].
pub trait ProductWriter {
    /// Insert the product, or overwrite every non-key column of the row with
    /// the same identifier.
    fn upsert_product(&mut self, product: &StoredProduct) -> RepositoryResult<usize>;
    /// Persist all writes made since the last commit.
    fn commit(&mut self) -> RepositoryResult<()>;
}

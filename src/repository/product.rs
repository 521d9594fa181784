use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::product::StoredProduct;
use crate::domain::types::ProductId;
use crate::models::product::{NewProduct, Product as DbProduct};
use crate::repository::{DieselRepository, ProductReader, ProductWriter, RepositoryResult};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<StoredProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.get()))
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }

    fn list_products(&self) -> RepositoryResult<Vec<StoredProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .select(DbProduct::as_select())
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<StoredProduct>, _>>()?;

        Ok(items)
    }

    fn count_products(&self) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let total = products::table.count().get_result::<i64>(&mut conn)? as usize;
        Ok(total)
    }
}

/// Writer holding one pooled connection for the duration of a sync run.
///
/// A transaction is opened on the first upsert and closed by `commit`. If the
/// writer is dropped with the transaction still open, the batch is rolled
/// back.
pub struct DieselProductWriter {
    conn: DbConnection,
    in_transaction: bool,
}

impl DieselProductWriter {
    pub fn new(conn: DbConnection) -> Self {
        Self {
            conn,
            in_transaction: false,
        }
    }

    fn begin(&mut self) -> RepositoryResult<()> {
        if !self.in_transaction {
            AnsiTransactionManager::begin_transaction(&mut *self.conn)?;
            self.in_transaction = true;
        }
        Ok(())
    }
}

impl ProductWriter for DieselProductWriter {
    fn upsert_product(&mut self, product: &StoredProduct) -> RepositoryResult<usize> {
        use crate::schema::products;

        self.begin()?;

        let row = NewProduct::from(product);
        let affected = diesel::insert_into(products::table)
            .values(&row)
            .on_conflict(products::id)
            .do_update()
            .set(&row)
            .execute(&mut *self.conn)?;

        Ok(affected)
    }

    fn commit(&mut self) -> RepositoryResult<()> {
        if self.in_transaction {
            // Diesel rolls back on its own when COMMIT fails.
            self.in_transaction = false;
            AnsiTransactionManager::commit_transaction(&mut *self.conn)?;
        }
        Ok(())
    }
}

impl Drop for DieselProductWriter {
    fn drop(&mut self) {
        if !self.in_transaction {
            return;
        }
        match AnsiTransactionManager::rollback_transaction(&mut *self.conn) {
            Ok(()) => log::warn!("Discarded uncommitted product writes"),
            Err(e) => log::error!("Failed to roll back uncommitted product writes: {e}"),
        }
    }
}

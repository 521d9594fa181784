use std::collections::{BTreeMap, HashSet};

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::product::StoredProduct;
use crate::domain::types::ProductId;
use crate::repository::{ProductReader, ProductWriter, RepositoryError, RepositoryResult};

/// Simple in-memory repository used for unit tests.
///
/// Upserts are staged until `commit`, mirroring the transactional Diesel
/// writer, and every call is counted.
#[derive(Default)]
pub struct TestRepository {
    committed: BTreeMap<ProductId, StoredProduct>,
    staged: BTreeMap<ProductId, StoredProduct>,
    rejected: HashSet<ProductId>,
    upsert_calls: usize,
    commit_calls: usize,
}

impl TestRepository {
    pub fn new(products: Vec<StoredProduct>) -> Self {
        Self {
            committed: products.into_iter().map(|p| (p.id, p)).collect(),
            ..Default::default()
        }
    }

    /// Make every upsert of `id` fail as if the database rejected it.
    pub fn reject(mut self, id: ProductId) -> Self {
        self.rejected.insert(id);
        self
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls
    }

    pub fn commit_calls(&self) -> usize {
        self.commit_calls
    }
}

impl ProductReader for TestRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<StoredProduct>> {
        Ok(self.committed.get(&id).cloned())
    }

    fn list_products(&self) -> RepositoryResult<Vec<StoredProduct>> {
        Ok(self.committed.values().cloned().collect())
    }

    fn count_products(&self) -> RepositoryResult<usize> {
        Ok(self.committed.len())
    }
}

impl ProductWriter for TestRepository {
    fn upsert_product(&mut self, product: &StoredProduct) -> RepositoryResult<usize> {
        self.upsert_calls += 1;
        if self.rejected.contains(&product.id) {
            return Err(RepositoryError::DatabaseError(DieselError::DatabaseError(
                DatabaseErrorKind::CheckViolation,
                Box::new(format!("product {} rejected", product.id)),
            )));
        }
        self.staged.insert(product.id, product.clone());
        Ok(1)
    }

    fn commit(&mut self) -> RepositoryResult<()> {
        self.commit_calls += 1;
        self.committed.append(&mut self.staged);
        Ok(())
    }
}

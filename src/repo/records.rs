use std::marker::PhantomData;
use std::sync::Arc;

use crate::models::metric::Metric;
use crate::models::records::DomainRecord;
use crate::store::{Capability, HealthStore, HealthStoreUri, Result};

use super::OperationResult;

/// CRUD over one domain endpoint, generic in the domain's record type.
///
/// Rows coming back from the store are rebuilt through
/// [`DomainRecord::from_row`]. Reads hand store failures (including a denied
/// capability) back as errors; writes collapse them into a failed
/// [`OperationResult`].
pub struct RecordsRepo<R> {
    store: Arc<dyn HealthStore>,
    _record: PhantomData<fn() -> R>,
}

impl<R: DomainRecord> RecordsRepo<R> {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Base address this repository is bound to.
    pub fn uri(&self) -> HealthStoreUri {
        HealthStoreUri::base(R::DOMAIN)
    }

    /// Capability every operation of this repository exercises.
    pub fn capability(&self) -> Capability {
        R::DOMAIN.capability()
    }

    /// Every row of the domain, in store order, including metrics this
    /// build does not know about.
    pub fn get_all(&self) -> Result<Vec<R>> {
        self.query(&self.uri())
    }

    /// # Panics
    ///
    /// If `metric` belongs to another domain.
    pub fn get_by_metric(&self, metric: Metric) -> Result<Vec<R>> {
        assert_eq!(metric.domain(), R::DOMAIN, "{metric} is not a {} metric", R::DOMAIN);
        self.query(&HealthStoreUri::metric(R::DOMAIN, metric.code()))
    }

    /// `None` when no row matches.
    ///
    /// # Panics
    ///
    /// If the store reports more than one row for the `(metric, id)` pair.
    pub fn get_by_id(&self, metric: Metric, id: i64) -> Result<Option<R>> {
        let uri = HealthStoreUri::record(R::DOMAIN, metric.code(), id);
        let mut records = self.query(&uri)?;
        assert!(
            records.len() <= 1,
            "{} rows share the identity {uri}",
            records.len()
        );
        Ok(records.pop())
    }

    /// Concatenate the per-metric queries for `metrics` and sort by time.
    /// Records with equal timestamps keep their concatenation order.
    pub fn get_all_by_metrics(&self, metrics: &[Metric]) -> Result<Vec<R>> {
        let mut all = Vec::new();
        for metric in metrics {
            all.extend(self.get_by_metric(*metric)?);
        }
        all.sort_by_key(|r| r.time());
        Ok(all)
    }

    /// All records of `metric`, narrowed to its concrete shape.
    pub fn get_all_of<T: TryFrom<R>>(&self, metric: Metric) -> Result<Vec<T>> {
        Ok(self
            .get_by_metric(metric)?
            .into_iter()
            .map(|r| narrow(metric, r))
            .collect())
    }

    pub fn get_one_of<T: TryFrom<R>>(&self, metric: Metric, id: i64) -> Result<Option<T>> {
        Ok(self.get_by_id(metric, id)?.map(|r| narrow(metric, r)))
    }

    /// Insert a new record. On success the result carries the id the store
    /// assigned.
    pub fn insert(&self, record: &R) -> OperationResult {
        let uri = HealthStoreUri::metric(R::DOMAIN, record.metric());
        match self.store.insert(&uri, &record.to_row(), self.capability()) {
            Ok(row_uri) => match row_uri.id() {
                Some(id) if id > 0 => {
                    tracing::debug!(%row_uri, "record inserted");
                    OperationResult::ok_with_id(id)
                }
                _ => {
                    tracing::warn!(%uri, %row_uri, "store returned no id for insert");
                    OperationResult::failed()
                }
            },
            Err(e) => {
                tracing::warn!(%uri, error = %e, "insert failed");
                OperationResult::failed()
            }
        }
    }

    /// # Panics
    ///
    /// If the record was never inserted (`id == 0`).
    pub fn update(&self, record: &R) -> OperationResult {
        assert_ne!(record.id(), 0, "cannot update a record that was never inserted");
        let uri = HealthStoreUri::record(R::DOMAIN, record.metric(), record.id());
        let result = self
            .store
            .update(&uri, &record.to_row(), self.capability());
        single_row_outcome("update", &uri, result)
    }

    /// # Panics
    ///
    /// If the record was never inserted (`id == 0`).
    pub fn delete(&self, record: &R) -> OperationResult {
        assert_ne!(record.id(), 0, "cannot delete a record that was never inserted");
        let uri = HealthStoreUri::record(R::DOMAIN, record.metric(), record.id());
        let result = self.store.delete(&uri, self.capability());
        single_row_outcome("delete", &uri, result)
    }

    fn query(&self, uri: &HealthStoreUri) -> Result<Vec<R>> {
        let rows = self.store.query(uri, self.capability())?;
        tracing::debug!(%uri, rows = rows.len(), "query");
        Ok(rows.iter().map(R::from_row).collect())
    }
}

/// The parser picks the variant from the discriminator, so a row fetched
/// for a known metric always narrows to that metric's shape.
fn narrow<R, T: TryFrom<R>>(metric: Metric, record: R) -> T {
    match T::try_from(record) {
        Ok(narrowed) => narrowed,
        Err(_) => panic!("row of metric {metric} did not parse into its record shape"),
    }
}

fn single_row_outcome(op: &str, uri: &HealthStoreUri, result: Result<usize>) -> OperationResult {
    match result {
        Ok(1) => OperationResult::ok(),
        Ok(count) => {
            tracing::warn!(%uri, count, "{op} affected {count} rows, expected 1");
            OperationResult::failed()
        }
        Err(e) => {
            tracing::warn!(%uri, error = %e, "{op} failed");
            OperationResult::failed()
        }
    }
}

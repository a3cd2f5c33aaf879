//! Boundary between the repositories and whatever holds the rows.
//!
//! Repositories only speak in addresses ([`HealthStoreUri`]), generic rows
//! ([`Row`]) and the [`Capability`] an operation needs. Checking that
//! capability is the store's job, not the repository's.

mod capability;
pub mod columns;
mod error;
mod row;
mod uri;

pub use capability::Capability;
pub use error::{Result, StoreError};
pub use row::{Row, Value};
pub use uri::HealthStoreUri;

/// A URI-addressed, capability-gated tabular store.
///
/// Every call states the capability the caller is exercising. An
/// implementation must refuse the call with [`StoreError::PermissionDenied`]
/// and leave no partial effect when that capability is not held or does not
/// govern the addressed domain.
pub trait HealthStore: Send + Sync {
    /// Return every row addressed by `uri`: the whole domain, one metric, or
    /// one `(metric, id)` pair.
    fn query(&self, uri: &HealthStoreUri, capability: Capability) -> Result<Vec<Row>>;

    /// Insert `values` under a `/{metric}` address. Returns the address of
    /// the new row, carrying the store-assigned id.
    fn insert(
        &self,
        uri: &HealthStoreUri,
        values: &Row,
        capability: Capability,
    ) -> Result<HealthStoreUri>;

    /// Update the row(s) addressed by `uri`. Returns the number of rows affected.
    fn update(&self, uri: &HealthStoreUri, values: &Row, capability: Capability)
    -> Result<usize>;

    /// Delete the row(s) addressed by `uri`. Returns the number of rows removed.
    fn delete(&self, uri: &HealthStoreUri, capability: Capability) -> Result<usize>;
}

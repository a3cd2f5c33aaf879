use std::sync::{Arc, OnceLock};

use crate::models::metric::Domain;
use crate::models::profile::MedicalProfile;
use crate::store::{Capability, HealthStore, HealthStoreUri, Result};

static INSTANCE: OnceLock<MedicalProfileRepo> = OnceLock::new();

/// The single medical profile row.
///
/// Every operation requires [`Capability::MedicalProfile`].
pub struct MedicalProfileRepo {
    store: Arc<dyn HealthStore>,
}

impl MedicalProfileRepo {
    pub const REQUIRED_CAPABILITY: Capability = Capability::MedicalProfile;

    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self { store }
    }

    pub fn get_instance(store: &Arc<dyn HealthStore>) -> &'static Self {
        INSTANCE.get_or_init(|| Self::new(Arc::clone(store)))
    }

    fn uri() -> HealthStoreUri {
        HealthStoreUri::base(Domain::MedicalProfile)
    }

    /// The stored profile, or an all-default one when nothing is stored.
    pub fn get(&self) -> Result<MedicalProfile> {
        let rows = self.store.query(&Self::uri(), Self::REQUIRED_CAPABILITY)?;
        Ok(rows
            .first()
            .map(MedicalProfile::from_row)
            .unwrap_or_default())
    }

    /// Replace the stored profile. Returns whether the store confirmed it.
    pub fn set(&self, profile: &MedicalProfile) -> bool {
        match self
            .store
            .insert(&Self::uri(), &profile.to_row(), Self::REQUIRED_CAPABILITY)
        {
            Ok(row) if row.id().is_some_and(|id| id > 0) => true,
            Ok(row) => {
                tracing::warn!(%row, "store did not assign a medical profile row");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "storing medical profile failed");
                false
            }
        }
    }

    /// Remove the stored profile. True only if exactly one row went away.
    pub fn reset(&self) -> bool {
        match self.store.delete(&Self::uri(), Self::REQUIRED_CAPABILITY) {
            Ok(1) => {
                tracing::info!("medical profile reset");
                true
            }
            Ok(count) => {
                tracing::debug!(count, "medical profile reset removed no single row");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "resetting medical profile failed");
                false
            }
        }
    }
}

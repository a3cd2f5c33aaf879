//! Typed repositories over the health store.
//!
//! Each domain repository is a process-wide singleton reachable through
//! `get_instance`, and can also be built directly with `new` when the store
//! handle should be injected explicitly (tests, multiple stores).

mod activity;
mod body;
mod breathing;
mod heart_blood;
mod mindfulness;
mod profile;
mod records;

pub use activity::ActivityRecordsRepo;
pub use body::BodyRecordsRepo;
pub use breathing::BreathingRecordsRepo;
pub use heart_blood::HeartBloodRecordsRepo;
pub use mindfulness::MindfulnessRecordsRepo;
pub use profile::MedicalProfileRepo;
pub use records::RecordsRepo;

use serde::Serialize;
use std::sync::Arc;

use crate::store::HealthStore;

/// Outcome of a mutating operation. Only an insert carries an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
}

impl OperationResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
        }
    }

    pub fn ok_with_id(id: i64) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            id: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }
}

/// One repository per domain, all bound to the same store.
pub struct Repos {
    pub activity: ActivityRecordsRepo,
    pub body: BodyRecordsRepo,
    pub breathing: BreathingRecordsRepo,
    pub heart_blood: HeartBloodRecordsRepo,
    pub mindfulness: MindfulnessRecordsRepo,
    pub profile: MedicalProfileRepo,
}

impl Repos {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            activity: ActivityRecordsRepo::new(Arc::clone(&store)),
            body: BodyRecordsRepo::new(Arc::clone(&store)),
            breathing: BreathingRecordsRepo::new(Arc::clone(&store)),
            heart_blood: HeartBloodRecordsRepo::new(Arc::clone(&store)),
            mindfulness: MindfulnessRecordsRepo::new(Arc::clone(&store)),
            profile: MedicalProfileRepo::new(store),
        }
    }
}

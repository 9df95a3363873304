use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::domain::{ApplicationId, LoanApplication};

/// Concurrent in-memory store of loan applications keyed by id.
///
/// Records are handed out as `Arc`s, so vote counters are shared live between the registry
/// and every caller holding a record. The map lock only guards membership; counter updates
/// happen on the record's own atomics after the lock is released.
#[derive(Debug, Default)]
pub struct ApplicationRegistry {
    records: RwLock<HashMap<ApplicationId, Arc<LoanApplication>>>,
}

impl ApplicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the demo applications.
    pub fn with_samples() -> Self {
        let registry = Self::new();
        super::samples::seed(&registry);
        registry
    }

    /// Store a record under its id. A later record with the same id replaces the earlier one.
    pub fn submit(&self, application: LoanApplication) -> Arc<LoanApplication> {
        let application = Arc::new(application);
        let previous = self
            .records
            .write()
            .insert(application.id().clone(), application.clone());

        if previous.is_some() {
            debug!(application_id = %application.id(), "replaced application with duplicate id");
        }

        application
    }

    pub fn get_by_id(&self, id: &ApplicationId) -> Option<Arc<LoanApplication>> {
        self.records.read().get(id).cloned()
    }

    /// Snapshot of every stored record. Order is unspecified.
    pub fn list_all(&self) -> Vec<Arc<LoanApplication>> {
        self.records.read().values().cloned().collect()
    }

    /// Pick one record uniformly at random, or `None` when the registry is empty.
    pub fn get_random(&self) -> Option<Arc<LoanApplication>> {
        self.get_random_with(&mut rand::thread_rng())
    }

    pub fn get_random_with<G>(&self, rng: &mut G) -> Option<Arc<LoanApplication>>
    where
        G: Rng + ?Sized,
    {
        self.list_all().choose(rng).cloned()
    }

    /// Apply one vote. Unknown ids are dropped without error.
    pub fn vote(&self, id: &ApplicationId, approve: bool) {
        let Some(application) = self.get_by_id(id) else {
            debug!(application_id = %id, approve, "ignoring vote for unknown application");
            return;
        };

        if approve {
            application.record_approval();
        } else {
            application.record_rejection();
        }

        debug!(application_id = %id, approve, "vote recorded");
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::{AppError, AppResult};

/// One generation slot per caller: a caller with a request outstanding is
/// turned away, while other callers proceed independently.
#[derive(Clone, Default)]
pub struct InFlightGuard {
    active: Arc<Mutex<HashSet<String>>>,
}

/// Held for the lifetime of an outstanding request; dropping it frees the
/// caller's slot.
pub struct InFlightPermit {
    caller: String,
    active: Arc<Mutex<HashSet<String>>>,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self, caller: &str) -> AppResult<InFlightPermit> {
        if !lock(&self.active).insert(caller.to_string()) {
            log::warn!(
                "Rejected quiz generation for {}: a request is already in flight",
                caller
            );
            return Err(AppError::RequestInFlight);
        }

        Ok(InFlightPermit {
            caller: caller.to_string(),
            active: Arc::clone(&self.active),
        })
    }

    pub fn is_busy(&self, caller: &str) -> bool {
        lock(&self.active).contains(caller)
    }

    pub fn active_count(&self) -> usize {
        lock(&self.active).len()
    }
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        lock(&self.active).remove(&self.caller);
    }
}

// The set stays consistent even if a holder panicked, so poisoning is ignored.
fn lock(active: &Mutex<HashSet<String>>) -> MutexGuard<'_, HashSet<String>> {
    active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

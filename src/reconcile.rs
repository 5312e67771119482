//! Folds raw transcript history into one resolved state per catalog
//! course, resolving duplicate and legacy records along the way.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::{Catalog, CourseState};
use crate::transcript::CourseRecord;

/// Catalog code -> resolved lifecycle state. Absence means the course
/// was never attempted. Built fresh per run, never persisted.
pub type ReconciledState = BTreeMap<String, CourseState>;

/// Precedence merge for records resolving to the same course: a pass
/// from any attempt counts forever, an in-progress attempt shields a
/// prior failure, and a later failure never erases an in-progress
/// mark. The ranked `CourseState` order makes this a plain max.
pub fn merge_states(existing: Option<CourseState>, incoming: CourseState) -> CourseState {
    match existing {
        Some(current) => current.max(incoming),
        None => incoming,
    }
}

/// Reconciles a full history against the catalog. Records whose code
/// resolves to nothing belong to courses outside the target curriculum
/// and are dropped without affecting progress.
pub fn reconcile(catalog: &Catalog, history: &[CourseRecord]) -> ReconciledState {
    let mut state = ReconciledState::new();
    for record in history {
        let Some(code) = catalog.resolve_code(&record.code) else {
            debug!("record {} has no catalog mapping, dropped", record.code);
            continue;
        };
        let merged = merge_states(state.get(code).copied(), record.state);
        state.insert(code.to_string(), merged);
    }
    state
}

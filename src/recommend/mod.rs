pub mod eligibility;
pub mod packer;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogCourse, Priority};
use crate::reconcile::ReconciledState;

/// One recommended course with the reason it was picked. Ephemeral,
/// recomputed on every run; downstream may re-localize the text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub priority: Priority,
    pub course: CatalogCourse,
    pub justification: String,
}

/// Builds the two credit-bounded bundles: the full term load, then its
/// subsidy-eligible subset taken from the already-selected load so the
/// bundles never disagree on ordering or membership.
pub fn recommend(
    catalog: &Catalog,
    state: &ReconciledState,
    full_load_credits: u32,
    subsidy_credits: u32,
) -> (Vec<Suggestion>, Vec<Suggestion>) {
    let candidates = eligibility::collect_candidates(catalog, state);
    let full_load = packer::pack(candidates, full_load_credits);
    let subsidy_bundle = packer::subset(&full_load, subsidy_credits);
    (full_load, subsidy_bundle)
}

//! Credit accounting over a reconciled state.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CourseState};
use crate::reconcile::ReconciledState;
use crate::transcript::{CourseRecord, StudentIdentity};

/// Aggregate progress for one student. Read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub student_name: String,
    pub student_id: String,
    pub total_credits: u32,
    pub earned_credits: u32,
    pub pending_credits: u32,
    pub percentage: f64,
    /// The raw extracted history, echoed for downstream presentation.
    pub history: Vec<CourseRecord>,
}

/// Sums approved credit weights against the catalog's declared total.
/// The percentage is clamped to 100: degenerate catalogs can carry
/// overlapping weights whose sum exceeds the declared total.
pub fn summarize(
    catalog: &Catalog,
    state: &ReconciledState,
    identity: &StudentIdentity,
    history: &[CourseRecord],
) -> ProgressSummary {
    let earned_credits: u32 = catalog
        .courses
        .iter()
        .filter(|course| state.get(&course.code) == Some(&CourseState::Approved))
        .map(|course| course.credits)
        .sum();
    let total_credits = catalog.total_credits;
    let percentage = if total_credits == 0 {
        0.0
    } else {
        (f64::from(earned_credits) / f64::from(total_credits) * 100.0).min(100.0)
    };

    ProgressSummary {
        student_name: identity.name.clone(),
        student_id: identity.id.clone(),
        total_credits,
        earned_credits,
        pending_credits: total_credits.saturating_sub(earned_credits),
        percentage,
        history: history.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogCourse, CourseCategory};
    use std::collections::BTreeMap;

    fn catalog(total: u32, credits: &[u32]) -> Catalog {
        Catalog {
            total_credits: total,
            courses: credits
                .iter()
                .enumerate()
                .map(|(i, &credits)| CatalogCourse {
                    code: format!("C{i}"),
                    name: format!("Course {i}"),
                    credits,
                    term: 1,
                    category: CourseCategory::Mandatory,
                    prerequisites: Vec::new(),
                })
                .collect(),
            equivalencies: BTreeMap::new(),
        }
    }

    #[test]
    fn counts_only_approved_credits() {
        let catalog = catalog(9, &[3, 3, 3]);
        let state = ReconciledState::from([
            ("C0".to_string(), CourseState::Approved),
            ("C1".to_string(), CourseState::InProgress),
            ("C2".to_string(), CourseState::Failed),
        ]);
        let summary = summarize(&catalog, &state, &StudentIdentity::default(), &[]);
        assert_eq!(summary.earned_credits, 3);
        assert_eq!(summary.pending_credits, 6);
        assert!((summary.percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_history_yields_zero_progress() {
        let catalog = catalog(9, &[3, 3, 3]);
        let summary = summarize(
            &catalog,
            &ReconciledState::new(),
            &StudentIdentity::default(),
            &[],
        );
        assert_eq!(summary.earned_credits, 0);
        assert_eq!(summary.pending_credits, 9);
        assert_eq!(summary.percentage, 0.0);
    }

    #[test]
    fn percentage_clamps_when_weights_exceed_declared_total() {
        // Declared total below the raw sum, everything approved.
        let catalog = catalog(6, &[3, 3, 3]);
        let state = ReconciledState::from([
            ("C0".to_string(), CourseState::Approved),
            ("C1".to_string(), CourseState::Approved),
            ("C2".to_string(), CourseState::Approved),
        ]);
        let summary = summarize(&catalog, &state, &StudentIdentity::default(), &[]);
        assert_eq!(summary.earned_credits, 9);
        assert_eq!(summary.percentage, 100.0);
        assert_eq!(summary.pending_credits, 0);
    }

    #[test]
    fn zero_total_catalog_reports_zero_percent() {
        let catalog = catalog(0, &[]);
        let summary = summarize(
            &catalog,
            &ReconciledState::new(),
            &StudentIdentity::default(),
            &[],
        );
        assert_eq!(summary.percentage, 0.0);
    }
}

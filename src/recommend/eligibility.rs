//! Candidate selection and priority assignment.

use std::cmp::Reverse;

use crate::catalog::{Catalog, CatalogCourse, CourseState, Priority};
use crate::reconcile::ReconciledState;
use crate::recommend::Suggestion;

/// A prerequisite counts as met while it is approved or being taken.
/// An unknown prerequisite code reads as never attempted, so the
/// course simply stays blocked instead of erroring.
fn prerequisites_met(course: &CatalogCourse, state: &ReconciledState) -> bool {
    course.prerequisites.iter().all(|code| {
        matches!(
            state.get(code),
            Some(CourseState::Approved | CourseState::InProgress)
        )
    })
}

fn prerequisite_in_progress(course: &CatalogCourse, state: &ReconciledState) -> bool {
    course
        .prerequisites
        .iter()
        .any(|code| state.get(code) == Some(&CourseState::InProgress))
}

/// Filters the catalog down to takeable courses and ranks them.
///
/// A course already approved or in progress is never a candidate. The
/// returned list is stably sorted by priority, then ascending term, so
/// equal-priority ties resolve the same way regardless of input order.
pub fn collect_candidates(catalog: &Catalog, state: &ReconciledState) -> Vec<Suggestion> {
    let mut candidates = Vec::new();

    for course in &catalog.courses {
        let current = state.get(&course.code).copied();
        if matches!(
            current,
            Some(CourseState::Approved | CourseState::InProgress)
        ) {
            continue;
        }
        if !prerequisites_met(course, state) {
            continue;
        }

        let (priority, justification) = if current == Some(CourseState::Failed) {
            (Priority::High, "Previously failed course.".to_string())
        } else if prerequisite_in_progress(course, state) {
            (
                Priority::High,
                "Continuity: prerequisite in progress.".to_string(),
            )
        } else {
            (
                Priority::Medium,
                format!("Pending from term {}.", course.term),
            )
        };

        candidates.push(Suggestion {
            priority,
            course: course.clone(),
            justification,
        });
    }

    candidates.sort_by_key(|suggestion| (Reverse(suggestion.priority), suggestion.course.term));
    candidates
}

//! Greedy credit packing for the recommended bundles.

use crate::recommend::Suggestion;

/// Single-pass selection over an already-prioritized candidate list:
/// a candidate is taken only when it fits under the cap, otherwise it
/// is skipped and the scan continues. Capacity can stay unused when a
/// later, smaller course would have fit better; priority order is
/// never traded for packing density.
pub fn pack(candidates: Vec<Suggestion>, credit_cap: u32) -> Vec<Suggestion> {
    let mut load = 0u32;
    let mut selected = Vec::new();
    for candidate in candidates {
        if load + candidate.course.credits <= credit_cap {
            load += candidate.course.credits;
            selected.push(candidate);
        }
    }
    selected
}

/// Reduced-credit subset of an already-packed load, scanned in its
/// existing order with the same accept-if-it-fits rule. Never contains
/// a course absent from the input bundle.
pub fn subset(selected: &[Suggestion], credit_cap: u32) -> Vec<Suggestion> {
    let mut load = 0u32;
    let mut bundle = Vec::new();
    for suggestion in selected {
        if load + suggestion.course.credits <= credit_cap {
            load += suggestion.course.credits;
            bundle.push(suggestion.clone());
        }
    }
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogCourse, CourseCategory, Priority};

    fn suggestion(code: &str, credits: u32, term: u32) -> Suggestion {
        Suggestion {
            priority: Priority::Medium,
            course: CatalogCourse {
                code: code.to_string(),
                name: format!("Course {code}"),
                credits,
                term,
                category: CourseCategory::Mandatory,
                prerequisites: Vec::new(),
            },
            justification: format!("Pending from term {term}."),
        }
    }

    #[test]
    fn fills_up_to_the_cap_in_order() {
        let candidates: Vec<_> = (0..10)
            .map(|i| suggestion(&format!("C{i}"), 3, i + 1))
            .collect();
        let selected = pack(candidates, 18);

        assert_eq!(selected.len(), 6);
        let credits: u32 = selected.iter().map(|s| s.course.credits).sum();
        assert_eq!(credits, 18);
        let terms: Vec<_> = selected.iter().map(|s| s.course.term).collect();
        assert_eq!(terms, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn oversized_candidate_is_skipped_not_fatal() {
        let candidates = vec![
            suggestion("BIG", 16, 1),
            suggestion("MID", 4, 2),
            suggestion("SMALL", 2, 3),
        ];
        let selected = pack(candidates, 18);

        // BIG fits, MID would overflow and is skipped, SMALL still fits.
        let codes: Vec<_> = selected.iter().map(|s| s.course.code.as_str()).collect();
        assert_eq!(codes, vec!["BIG", "SMALL"]);
    }

    #[test]
    fn capacity_may_go_unused_rather_than_reorder() {
        // Greedy by position: the 10-credit head is taken, the 9-credit
        // follow-ups no longer fit even though 9+9 packs tighter.
        let candidates = vec![
            suggestion("HEAD", 10, 1),
            suggestion("NINE_A", 9, 2),
            suggestion("NINE_B", 9, 3),
        ];
        let selected = pack(candidates, 18);
        let codes: Vec<_> = selected.iter().map(|s| s.course.code.as_str()).collect();
        assert_eq!(codes, vec!["HEAD"]);
    }

    #[test]
    fn zero_credit_courses_always_fit() {
        let candidates = vec![suggestion("FULL", 18, 1), suggestion("FREE", 0, 9)];
        let selected = pack(candidates, 18);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn subset_preserves_relative_order() {
        let selected = vec![
            suggestion("A", 6, 1),
            suggestion("B", 6, 2),
            suggestion("C", 6, 3),
        ];
        let bundle = subset(&selected, 14);
        let codes: Vec<_> = bundle.iter().map(|s| s.course.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn empty_input_packs_to_empty_output() {
        assert!(pack(Vec::new(), 18).is_empty());
        assert!(subset(&[], 14).is_empty());
    }
}

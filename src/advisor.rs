//! Pipeline orchestration: history + catalog in, analysis out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::progress::{self, ProgressSummary};
use crate::reconcile;
use crate::recommend::{self, Suggestion};
use crate::transcript::{CourseRecord, StudentIdentity};

pub const DEFAULT_FULL_LOAD_CREDITS: u32 = 18;
pub const DEFAULT_SUBSIDY_CREDITS: u32 = 14;

/// Credit caps for the two recommended bundles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoadLimits {
    pub full_load_credits: u32,
    pub subsidy_credits: u32,
}

impl Default for LoadLimits {
    fn default() -> Self {
        Self {
            full_load_credits: DEFAULT_FULL_LOAD_CREDITS,
            subsidy_credits: DEFAULT_SUBSIDY_CREDITS,
        }
    }
}

/// The complete output of one analysis run: progress plus the two
/// suggestion bundles. Sole input to downstream presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub generated_at: DateTime<Utc>,
    pub progress: ProgressSummary,
    pub suggestions: Vec<Suggestion>,
    pub subsidy_bundle: Vec<Suggestion>,
}

/// Runs reconciliation, credit accounting and recommendation over one
/// extracted history. Pure and synchronous: every run allocates fresh
/// outputs and only reads the shared catalog, so concurrent runs need
/// no coordination.
pub fn run_analysis(
    catalog: &Catalog,
    identity: &StudentIdentity,
    history: &[CourseRecord],
    limits: LoadLimits,
) -> AnalysisResult {
    let state = reconcile::reconcile(catalog, history);
    let progress = progress::summarize(catalog, &state, identity, history);
    let (suggestions, subsidy_bundle) = recommend::recommend(
        catalog,
        &state,
        limits.full_load_credits,
        limits.subsidy_credits,
    );

    AnalysisResult {
        generated_at: Utc::now(),
        progress,
        suggestions,
        subsidy_bundle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseState;
    use crate::transcript::CourseRecord;

    fn record(code: &str, state: CourseState) -> CourseRecord {
        CourseRecord {
            code: code.to_string(),
            name: code.to_string(),
            grade: 3.5,
            state,
            period: "2025 I".to_string(),
        }
    }

    #[test]
    fn empty_history_is_a_valid_run() {
        let catalog = Catalog::builtin();
        let identity = StudentIdentity::default();
        let result = run_analysis(&catalog, &identity, &[], LoadLimits::default());

        assert_eq!(result.progress.earned_credits, 0);
        assert!(!result.suggestions.is_empty());
        let credits: u32 = result.suggestions.iter().map(|s| s.course.credits).sum();
        assert!(credits <= DEFAULT_FULL_LOAD_CREDITS);
    }

    #[test]
    fn analysis_against_the_builtin_plan_end_to_end() {
        let catalog = Catalog::builtin();
        let identity = StudentIdentity {
            name: "Rosa Manchego".to_string(),
            id: "1001805394".to_string(),
        };
        // Legacy 401302 maps to 517022; 150001 is an identity row.
        let history = vec![
            record("401302", CourseState::Approved),
            record("150001", CourseState::Approved),
            record("517023", CourseState::InProgress),
        ];
        let result = run_analysis(&catalog, &identity, &history, LoadLimits::default());

        assert_eq!(result.progress.earned_credits, 6);
        assert_eq!(result.progress.student_name, "Rosa Manchego");
        // 514507 requires 517023, currently in progress: continuity.
        let continuity = result
            .suggestions
            .iter()
            .find(|s| s.course.code == "514507")
            .expect("continuity candidate missing");
        assert_eq!(
            continuity.justification,
            "Continuity: prerequisite in progress."
        );
        // The in-progress course itself is never suggested.
        assert!(result.suggestions.iter().all(|s| s.course.code != "517023"));
    }

    #[test]
    fn runs_are_independent() {
        let catalog = Catalog::builtin();
        let identity = StudentIdentity::default();
        let history = vec![record("80017", CourseState::Failed)];

        let first = run_analysis(&catalog, &identity, &history, LoadLimits::default());
        let second = run_analysis(&catalog, &identity, &history, LoadLimits::default());
        assert_eq!(first.progress.earned_credits, second.progress.earned_credits);
        assert_eq!(first.suggestions, second.suggestions);
        assert_eq!(first.subsidy_bundle, second.subsidy_bundle);
    }
}

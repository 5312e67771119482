use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resolved lifecycle state of a curriculum course for one student.
///
/// The variant order is the reconciliation precedence: when duplicate
/// records resolve to the same course, the higher-ranked state wins.
/// A course absent from the reconciled map is pending (never attempted).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseState {
    #[serde(alias = "REPROBADO")]
    Failed,
    #[serde(alias = "EN_CURSO")]
    InProgress,
    #[serde(alias = "APROBADO")]
    Approved,
}

impl Display for CourseState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Failed => "FAILED",
            Self::InProgress => "IN_PROGRESS",
            Self::Approved => "APPROVED",
        };
        write!(f, "{display}")
    }
}

/// Placement of a course inside the curriculum. Elective slots are
/// ordinary catalog entries carrying one of the elective categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseCategory {
    Mandatory,
    ElectiveA,
    ElectiveB,
    ElectiveC,
}

impl Display for CourseCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Mandatory => "MANDATORY",
            Self::ElectiveA => "ELECTIVE_A",
            Self::ElectiveB => "ELECTIVE_B",
            Self::ElectiveC => "ELECTIVE_C",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error)]
#[error("unknown course category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for CourseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "MANDATORY" => Ok(Self::Mandatory),
            "ELECTIVE_A" => Ok(Self::ElectiveA),
            "ELECTIVE_B" => Ok(Self::ElectiveB),
            "ELECTIVE_C" => Ok(Self::ElectiveC),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Suggestion priority. `Low` is representable for external overrides
/// but the default policy never assigns it.
///
/// The derived order ranks `Low < Medium < High`; sorting uses the
/// reverse so high-priority suggestions come first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        write!(f, "{display}")
    }
}

/// One course of the target curriculum.
///
/// Prerequisite codes must reference other catalog courses and form a
/// DAG; the engine does no cycle detection, catalog authors guarantee
/// it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogCourse {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub term: u32,
    pub category: CourseCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
}

pub mod plan;
pub mod schema;

pub use schema::{CatalogCourse, CategoryParseError, CourseCategory, CourseState, Priority};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Static reference data for the target curriculum: courses with credit
/// weights, term placement and prerequisite edges, plus the equivalency
/// table mapping legacy codes into it.
///
/// Loaded once at startup and treated as immutable afterwards; any
/// number of analysis runs may read it concurrently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub total_credits: u32,
    pub courses: Vec<CatalogCourse>,
    #[serde(default)]
    pub equivalencies: BTreeMap<String, String>,
}

impl Catalog {
    /// The embedded transition plan.
    pub fn builtin() -> Self {
        plan::builtin()
    }

    /// Loads a catalog from a JSON file, falling back to the built-in
    /// plan when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::builtin());
        };
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed reading catalog: {}", path.display()))?;
        let parsed: Self = serde_json::from_str(&data)
            .with_context(|| format!("failed parsing catalog JSON: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn course(&self, code: &str) -> Option<&CatalogCourse> {
        self.courses.iter().find(|course| course.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.course(code).is_some()
    }

    /// Two-stage resolution of a historical course code: the
    /// equivalency table first, then direct identity against the
    /// catalog itself. `None` means the record belongs to a course
    /// outside the target curriculum.
    pub fn resolve_code<'a>(&'a self, code: &'a str) -> Option<&'a str> {
        if let Some(target) = self.equivalencies.get(code) {
            return Some(target.as_str());
        }
        if self.contains(code) {
            return Some(code);
        }
        None
    }
}

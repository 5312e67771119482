//! Input boundary with the upstream extraction collaborator.
//!
//! The extractor (an external OCR/LLM service) turns a transcript
//! document into a JSON envelope of student identity plus one record
//! per source row. Everything here is carried through as-is: the
//! engine performs no OCR-error correction.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::CourseState;

/// One row of the source transcript. Immutable once extracted;
/// a retaken course appears once per attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseRecord {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub grade: f64,
    pub state: CourseState,
    /// Free-text period label. Only the extractor interprets it (to
    /// flag the current term); the engine carries it through untouched.
    #[serde(default)]
    pub period: String,
}

/// Student identity fields reported alongside the history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentIdentity {
    pub name: String,
    pub id: String,
}

/// The extractor's output envelope. Field aliases accept the upstream
/// camelCase spelling.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractedTranscript {
    #[serde(default, alias = "studentName")]
    pub student_name: String,
    #[serde(default, alias = "studentId")]
    pub student_id: String,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

impl ExtractedTranscript {
    /// Identity with the extractor's fallback for an unreadable name.
    pub fn identity(&self) -> StudentIdentity {
        let name = if self.student_name.trim().is_empty() {
            "Unidentified student".to_string()
        } else {
            self.student_name.clone()
        };
        StudentIdentity {
            name,
            id: self.student_id.clone(),
        }
    }
}

/// Reads one extractor envelope from disk. Extraction failures surface
/// here as read/parse errors; the engine itself never fails on content.
pub fn load_transcript(path: &Path) -> Result<ExtractedTranscript> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed reading transcript: {}", path.display()))?;
    let parsed: ExtractedTranscript = serde_json::from_str(&data)
        .with_context(|| format!("failed parsing transcript JSON: {}", path.display()))?;
    Ok(parsed)
}

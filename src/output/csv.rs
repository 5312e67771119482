use anyhow::Result;

use crate::catalog::Catalog;
use crate::progress::ProgressSummary;
use crate::recommend::Suggestion;

pub fn suggestions_to_csv(suggestions: &[Suggestion]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "priority",
        "code",
        "name",
        "credits",
        "term",
        "justification",
    ])?;
    for suggestion in suggestions {
        writer.write_record([
            suggestion.priority.to_string(),
            suggestion.course.code.clone(),
            suggestion.course.name.clone(),
            suggestion.course.credits.to_string(),
            suggestion.course.term.to_string(),
            suggestion.justification.clone(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn progress_to_csv(progress: &ProgressSummary) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "student_name",
        "student_id",
        "earned_credits",
        "pending_credits",
        "total_credits",
        "percentage",
    ])?;
    writer.write_record([
        progress.student_name.clone(),
        progress.student_id.clone(),
        progress.earned_credits.to_string(),
        progress.pending_credits.to_string(),
        progress.total_credits.to_string(),
        format!("{:.2}", progress.percentage),
    ])?;
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn catalog_to_csv(catalog: &Catalog) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["term", "code", "name", "credits", "category", "prerequisites"])?;
    for course in &catalog.courses {
        writer.write_record([
            course.term.to_string(),
            course.code.clone(),
            course.name.clone(),
            course.credits.to_string(),
            course.category.to_string(),
            course.prerequisites.join(" "),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn catalog_csv_has_one_row_per_course() {
        let catalog = Catalog::builtin();
        let rendered = catalog_to_csv(&catalog).unwrap();
        // Header plus one line per course.
        assert_eq!(rendered.lines().count(), catalog.courses.len() + 1);
    }
}

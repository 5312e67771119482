use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::catalog::{Catalog, CourseState, Priority};
use crate::progress::ProgressSummary;
use crate::recommend::Suggestion;
use crate::transcript::CourseRecord;

fn base_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers);
    table
}

fn priority_cell(priority: Priority) -> Cell {
    let cell = Cell::new(priority.to_string());
    match priority {
        Priority::High => cell.fg(Color::Red),
        Priority::Medium => cell.fg(Color::Yellow),
        Priority::Low => cell.fg(Color::DarkGrey),
    }
}

fn state_cell(state: CourseState) -> Cell {
    let cell = Cell::new(state.to_string());
    match state {
        CourseState::Approved => cell.fg(Color::Green),
        CourseState::InProgress => cell.fg(Color::Cyan),
        CourseState::Failed => cell.fg(Color::Red),
    }
}

pub fn render_progress_table(progress: &ProgressSummary) -> String {
    let mut table = base_table(vec![
        "Student",
        "ID",
        "Earned",
        "Pending",
        "Total",
        "Completion",
    ]);
    table.add_row(Row::from(vec![
        Cell::new(&progress.student_name),
        Cell::new(&progress.student_id),
        Cell::new(progress.earned_credits.to_string()),
        Cell::new(progress.pending_credits.to_string()),
        Cell::new(progress.total_credits.to_string()),
        Cell::new(format!("{:.1}%", progress.percentage)),
    ]));
    table.to_string()
}

pub fn render_suggestions_table(suggestions: &[Suggestion]) -> String {
    let mut table = base_table(vec![
        "Priority",
        "Code",
        "Course",
        "Credits",
        "Term",
        "Justification",
    ]);
    for suggestion in suggestions {
        table.add_row(Row::from(vec![
            priority_cell(suggestion.priority),
            Cell::new(&suggestion.course.code),
            Cell::new(&suggestion.course.name),
            Cell::new(suggestion.course.credits.to_string()),
            Cell::new(suggestion.course.term.to_string()),
            Cell::new(&suggestion.justification),
        ]));
    }
    table.to_string()
}

pub fn render_history_table(history: &[CourseRecord]) -> String {
    let mut table = base_table(vec!["Code", "Course", "Grade", "State", "Period"]);
    for record in history {
        table.add_row(Row::from(vec![
            Cell::new(&record.code),
            Cell::new(&record.name),
            Cell::new(format!("{:.1}", record.grade)),
            state_cell(record.state),
            Cell::new(&record.period),
        ]));
    }
    table.to_string()
}

pub fn render_catalog_table(catalog: &Catalog) -> String {
    let mut table = base_table(vec![
        "Term",
        "Code",
        "Course",
        "Credits",
        "Category",
        "Prerequisites",
    ]);
    for course in &catalog.courses {
        table.add_row(Row::from(vec![
            Cell::new(course.term.to_string()),
            Cell::new(&course.code),
            Cell::new(&course.name),
            Cell::new(course.credits.to_string()),
            Cell::new(course.category.to_string()),
            Cell::new(course.prerequisites.join(", ")),
        ]));
    }
    table.to_string()
}

pub fn render_equivalency_table(catalog: &Catalog) -> String {
    let mut table = base_table(vec!["Legacy code", "Catalog code", "Course"]);
    for (legacy, target) in &catalog.equivalencies {
        let name = catalog
            .course(target)
            .map(|course| course.name.as_str())
            .unwrap_or("-");
        table.add_row(Row::from(vec![
            Cell::new(legacy),
            Cell::new(target),
            Cell::new(name),
        ]));
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn suggestion_table_lists_every_row() {
        let catalog = Catalog::builtin();
        let suggestions: Vec<_> = catalog
            .courses
            .iter()
            .take(3)
            .map(|course| Suggestion {
                priority: Priority::Medium,
                course: course.clone(),
                justification: format!("Pending from term {}.", course.term),
            })
            .collect();
        let rendered = render_suggestions_table(&suggestions);
        for suggestion in &suggestions {
            assert!(rendered.contains(&suggestion.course.code));
        }
    }

    #[test]
    fn equivalency_table_marks_unknown_targets() {
        let mut catalog = Catalog::builtin();
        catalog
            .equivalencies
            .insert("999999".to_string(), "NOWHERE".to_string());
        let rendered = render_equivalency_table(&catalog);
        assert!(rendered.contains("NOWHERE"));
    }
}

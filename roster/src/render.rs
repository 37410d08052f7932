//! Plain-text rendering of the roster table and the edit form.
//!
//! Renderers read the whole manager state on every call; nothing is cached
//! between renders.

use crate::core::roster::RosterManager;
use crate::core::types::{Field, Student};

const HEADERS: [&str; 7] = ["ID", "Name", "Email", "Age", "Course", "Phone", "Address"];

/// Render the student table with a count heading.
pub fn render_roster(students: &[Student]) -> String {
    let mut out = format!("Students List ({} students)\n", students.len());
    if students.is_empty() {
        out.push_str("No students found\n");
        out.push_str("Type \"add\" to create your first student record\n");
        return out;
    }

    let rows: Vec<[String; 7]> = students.iter().map(row_cells).collect();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(rule.join("  ").as_str());
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Render the form, or an empty string when the editor is hidden.
pub fn render_form(manager: &RosterManager) -> String {
    if !manager.is_editor_visible() {
        return String::new();
    }

    let (title, action) = if manager.is_editing() {
        ("Edit Student", "Update Student")
    } else {
        ("Add New Student", "Add Student")
    };

    let labels = Field::ALL.map(|field| format!("{} *:", field.label()));
    let width = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", title);
    for (field, label) in Field::ALL.into_iter().zip(&labels) {
        let value = manager.draft().get(field);
        let line = format!("{:<width$} {}", label, value, width = width);
        out.push_str(line.trim_end());
        out.push('\n');
        if let Some(err) = manager.errors().get(field) {
            out.push_str(&format!("  ! {}\n", err));
        }
    }
    out.push_str(&format!("[submit: {}] [cancel]\n", action));
    out
}

fn row_cells(student: &Student) -> [String; 7] {
    [
        student.id.to_string(),
        student.name.clone(),
        student.email.clone(),
        student.age.to_string(),
        student.course.clone(),
        student.phone.clone(),
        student.address.clone(),
    ]
}

fn push_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

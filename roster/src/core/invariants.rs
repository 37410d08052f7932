//! Roster-level invariants that field validation alone does not cover.

use std::collections::HashSet;

use crate::core::draft::FormDraft;
use crate::core::types::{Student, StudentId};
use crate::core::validate::validate;

/// Check a whole roster (e.g. a configured seed):
/// - ids are non-zero, below `StudentId::MAX`, and unique
/// - emails are unique, case-insensitively
/// - every record passes field validation
pub fn validate_invariants(students: &[Student]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut seen_emails = HashSet::new();

    for (index, student) in students.iter().enumerate() {
        let path = format!("seed[{}] (id {})", index, student.id);

        if student.id == 0 {
            errors.push(format!("{}: id must be > 0", path));
        }
        if student.id == StudentId::MAX {
            errors.push(format!("{}: id must be < {}", path, StudentId::MAX));
        }
        if !seen_ids.insert(student.id) {
            errors.push(format!("{}: duplicate id {}", path, student.id));
        }
        if !seen_emails.insert(student.email.to_lowercase()) {
            errors.push(format!("{}: duplicate email '{}'", path, student.email));
        }

        // Duplicates are reported above; validate each record on its own.
        let field_errors = validate(&FormDraft::from_student(student), &[]);
        for message in field_errors.messages() {
            errors.push(format!("{}: {}", path, message));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::default_roster;
    use crate::test_support::student;

    #[test]
    fn default_roster_is_clean() {
        assert!(validate_invariants(&default_roster()).is_empty());
    }

    #[test]
    fn reports_duplicates_and_bad_fields() {
        let mut bad_age = student(2, "Bea", "JOHN@example.com");
        bad_age.age = 0;
        let students = vec![
            student(1, "Al", "john@example.com"),
            bad_age,
            student(1, "", "carl@example.com"),
        ];

        let errors = validate_invariants(&students);

        assert_eq!(
            errors,
            vec![
                "seed[1] (id 2): duplicate email 'JOHN@example.com'".to_string(),
                "seed[1] (id 2): age: Age must be between 1 and 120".to_string(),
                "seed[2] (id 1): duplicate id 1".to_string(),
                "seed[2] (id 1): name: Name is required".to_string(),
            ]
        );
    }

    #[test]
    fn rejects_zero_id() {
        let errors = validate_invariants(&[student(0, "Zed", "zed@example.com")]);
        assert_eq!(errors, vec!["seed[0] (id 0): id must be > 0".to_string()]);
    }

    /// A seed at the top of the id range would leave nothing for new records.
    #[test]
    fn rejects_max_id() {
        let errors = validate_invariants(&[student(StudentId::MAX, "Max", "max@example.com")]);
        assert_eq!(
            errors,
            vec!["seed[0] (id 4294967295): id must be < 4294967295".to_string()]
        );
    }
}

//! Field-level validation for form drafts.
//!
//! Every check runs on every pass; a draft is acceptable iff the returned
//! map is empty.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::draft::{FormDraft, parse_age};
use crate::core::types::{Field, Student, StudentId};

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    Duplicate,
    Range,
}

/// A rejected field: machine-readable kind plus the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, kind: ErrorKind) -> Self {
        Self {
            kind,
            message: message_for(field, kind),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Per-field error map, ordered by field display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn kind(&self, field: Field) -> Option<ErrorKind> {
        self.get(field).map(|err| err.kind)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the entry for `field`, leaving the others untouched.
    pub fn clear(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    /// Flatten to `field: message` lines.
    pub fn messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, err)| format!("{}: {}", field, err.message))
            .collect()
    }

    fn insert(&mut self, field: Field, kind: ErrorKind) {
        self.0.insert(field, FieldError::new(field, kind));
    }
}

/// Validate `draft` against `roster`.
///
/// The draft's `target` decides the duplicate-email scope: when creating,
/// every record counts; when editing, the record being edited is skipped.
pub fn validate(draft: &FormDraft, roster: &[Student]) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for field in [Field::Name, Field::Course, Field::Phone, Field::Address] {
        if is_blank(draft.get(field)) {
            errors.insert(field, ErrorKind::Required);
        }
    }

    if let Some(kind) = check_email(draft, roster) {
        errors.insert(Field::Email, kind);
    }

    if !age_in_range(&draft.age) {
        errors.insert(Field::Age, ErrorKind::Range);
    }

    errors
}

/// True if `email` has the `local@domain.tld` shape.
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// True if `email` is already used by a record other than `exclude`.
pub fn email_taken(roster: &[Student], email: &str, exclude: Option<StudentId>) -> bool {
    let needle = email.to_lowercase();
    roster
        .iter()
        .filter(|student| Some(student.id) != exclude)
        .any(|student| student.email.to_lowercase() == needle)
}

fn check_email(draft: &FormDraft, roster: &[Student]) -> Option<ErrorKind> {
    if is_blank(&draft.email) {
        return Some(ErrorKind::Required);
    }
    if !is_email_shaped(&draft.email) {
        return Some(ErrorKind::InvalidFormat);
    }
    if email_taken(roster, &draft.email, draft.target) {
        return Some(ErrorKind::Duplicate);
    }
    None
}

/// Empty, non-numeric, and out-of-range ages share one rejection; `0` is
/// rejected like an empty field.
fn age_in_range(raw: &str) -> bool {
    matches!(parse_age(raw), Some(age) if (MIN_AGE..=MAX_AGE).contains(&age))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn message_for(field: Field, kind: ErrorKind) -> String {
    match (field, kind) {
        (Field::Email, ErrorKind::InvalidFormat) => "Email is invalid".to_string(),
        (Field::Email, ErrorKind::Duplicate) => "Email already exists".to_string(),
        (Field::Age, _) => format!("Age must be between {} and {}", MIN_AGE, MAX_AGE),
        (field, _) => format!("{} is required", required_subject(field)),
    }
}

fn required_subject(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Age => "Age",
        Field::Course => "Course",
        Field::Phone => "Phone",
        Field::Address => "Address",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::default_roster;
    use crate::test_support::valid_draft;

    #[test]
    fn accepts_complete_unique_draft() {
        let errors = validate(&valid_draft(), &default_roster());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors.messages());
    }

    /// All checks run; a blank draft reports every field at once.
    #[test]
    fn blank_draft_reports_every_field() {
        let errors = validate(&FormDraft::default(), &default_roster());
        assert_eq!(
            errors.messages(),
            vec![
                "name: Name is required",
                "email: Email is required",
                "age: Age must be between 1 and 120",
                "course: Course is required",
                "phone: Phone is required",
                "address: Address is required",
            ]
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        draft.phone = "\t".to_string();
        let errors = validate(&draft, &[]);
        assert_eq!(errors.kind(Field::Name), Some(ErrorKind::Required));
        assert_eq!(errors.kind(Field::Phone), Some(ErrorKind::Required));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["alice", "alice@example", "@example.com", "alice@.com"] {
            let mut draft = valid_draft();
            draft.email = email.to_string();
            let errors = validate(&draft, &[]);
            assert_eq!(
                errors.kind(Field::Email),
                Some(ErrorKind::InvalidFormat),
                "email {email:?}"
            );
        }
    }

    /// The shape check is unanchored: any `x@y.z` run inside the text passes.
    #[test]
    fn email_shape_is_permissive() {
        assert!(is_email_shaped("a b@c.d e"));
        assert!(is_email_shaped("first.last+tag@sub.example.org"));
    }

    #[test]
    fn duplicate_email_is_case_insensitive_when_creating() {
        let mut draft = valid_draft();
        draft.email = "John.Doe@Example.com".to_string();
        let errors = validate(&draft, &default_roster());
        assert_eq!(errors.kind(Field::Email), Some(ErrorKind::Duplicate));
        assert_eq!(
            errors.get(Field::Email).map(ToString::to_string),
            Some("Email already exists".to_string())
        );
    }

    /// Editing a record and keeping its own email is not a duplicate.
    #[test]
    fn editing_excludes_own_record_from_duplicate_check() {
        let roster = default_roster();
        let draft = FormDraft::from_student(&roster[0]);
        assert!(validate(&draft, &roster).is_empty());
    }

    #[test]
    fn editing_still_rejects_another_records_email() {
        let roster = default_roster();
        let mut draft = FormDraft::from_student(&roster[0]);
        draft.email = roster[1].email.to_uppercase();
        let errors = validate(&draft, &roster);
        assert_eq!(errors.kind(Field::Email), Some(ErrorKind::Duplicate));
    }

    #[test]
    fn format_error_wins_over_duplicate() {
        let mut roster = default_roster();
        roster[0].email = "not-an-email".to_string();
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        let errors = validate(&draft, &roster);
        assert_eq!(errors.kind(Field::Email), Some(ErrorKind::InvalidFormat));
    }

    #[test]
    fn age_boundaries() {
        let cases = [
            ("1", true),
            ("120", true),
            ("0", false),
            ("121", false),
            ("", false),
            ("abc", false),
            (" 35 ", true),
        ];
        for (age, accepted) in cases {
            let mut draft = valid_draft();
            draft.age = age.to_string();
            let errors = validate(&draft, &[]);
            assert_eq!(!errors.contains(Field::Age), accepted, "age {age:?}");
        }
    }

    #[test]
    fn clear_removes_only_that_field() {
        let mut errors = validate(&FormDraft::default(), &[]);
        let cleared = errors.clear(Field::Email);
        assert_eq!(cleared.map(|err| err.kind), Some(ErrorKind::Required));
        assert!(!errors.contains(Field::Email));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn serializes_as_field_keyed_object() {
        let mut draft = valid_draft();
        draft.age = "0".to_string();
        let errors = validate(&draft, &[]);
        let json = serde_json::to_value(&errors).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "age": { "kind": "range", "message": "Age must be between 1 and 120" }
            })
        );
    }
}

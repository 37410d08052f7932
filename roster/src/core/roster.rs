//! Roster manager: the committed records plus the transient form state.
//!
//! One `RosterManager` owns everything a session needs. Independent
//! managers never share state.

use std::fmt;

use crate::core::confirm::{ConfirmationGate, RemovalIntent};
use crate::core::draft::FormDraft;
use crate::core::types::{Field, Student, StudentId};
use crate::core::validate::{FieldErrors, validate};

/// What a successful submit did to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended under this id.
    Created(StudentId),
    /// The record with this id was replaced.
    Updated(StudentId),
    /// The edited record no longer exists; nothing was written.
    TargetMissing(StudentId),
}

/// Why a submit wrote nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Field validation failed; the same map is stored on the manager.
    Invalid(FieldErrors),
    /// The highest id is `StudentId::MAX`; no new id can be assigned.
    IdsExhausted,
}

impl SubmitError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            SubmitError::IdsExhausted => None,
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(errors) => write!(f, "form has {} error(s)", errors.len()),
            SubmitError::IdsExhausted => f.write_str("no student ids left to assign"),
        }
    }
}

/// What `remove` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Student),
    /// The gate rejected the removal.
    Declined,
    /// No record has that id.
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterManager {
    students: Vec<Student>,
    draft: FormDraft,
    errors: FieldErrors,
    editor_visible: bool,
}

impl RosterManager {
    /// Start a session over `students`, kept in the given order.
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students,
            ..Self::default()
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn find(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_editing()
    }

    pub fn is_editor_visible(&self) -> bool {
        self.editor_visible
    }

    /// Id the next created record will receive, if one is left.
    pub fn next_id(&self) -> Option<StudentId> {
        next_id(&self.students)
    }

    /// Open an empty form for a new record.
    pub fn begin_create(&mut self) {
        self.reset_form();
        self.editor_visible = true;
    }

    /// Open the form pre-filled from `student`.
    ///
    /// Deliberately clears errors left over from an earlier draft so they
    /// never show against this record.
    pub fn begin_edit(&mut self, student: &Student) {
        self.draft = FormDraft::from_student(student);
        self.errors = FieldErrors::default();
        self.editor_visible = true;
    }

    /// Look up `id` and open it for editing. Returns false if absent.
    pub fn begin_edit_by_id(&mut self, id: StudentId) -> bool {
        match self.find(id).cloned() {
            Some(student) => {
                self.begin_edit(&student);
                true
            }
            None => false,
        }
    }

    /// Close the form and discard the draft.
    pub fn cancel(&mut self) {
        self.reset_form();
    }

    /// Record an edit to one field; only that field's error is cleared.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Validate and commit the draft.
    ///
    /// On failure the roster and draft are left as they were; validation
    /// errors are also stored for rendering. On success the form is reset.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let errors = validate(&self.draft, &self.students);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        let outcome = match self.draft.target {
            Some(id) => self.replace(id)?,
            None => self.append()?,
        };
        self.reset_form();
        Ok(outcome)
    }

    /// Remove `id` if it exists and `gate` accepts. The draft is untouched.
    pub fn remove(&mut self, id: StudentId, gate: &mut impl ConfirmationGate) -> RemoveOutcome {
        let Some(index) = self.students.iter().position(|student| student.id == id) else {
            return RemoveOutcome::NotFound;
        };
        let intent = RemovalIntent::for_student(&self.students[index]);
        if !gate.confirm(&intent) {
            return RemoveOutcome::Declined;
        }
        RemoveOutcome::Removed(self.students.remove(index))
    }

    fn replace(&mut self, id: StudentId) -> Result<SubmitOutcome, SubmitError> {
        let updated = self.draft_to_student(id)?;
        match self.students.iter_mut().find(|student| student.id == id) {
            Some(slot) => {
                *slot = updated;
                Ok(SubmitOutcome::Updated(id))
            }
            None => Ok(SubmitOutcome::TargetMissing(id)),
        }
    }

    fn append(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let id = self.next_id().ok_or(SubmitError::IdsExhausted)?;
        let created = self.draft_to_student(id)?;
        self.students.push(created);
        Ok(SubmitOutcome::Created(id))
    }

    /// Validation guarantees a parseable age; re-validate if it somehow isn't.
    fn draft_to_student(&mut self, id: StudentId) -> Result<Student, SubmitError> {
        match self.draft.to_student(id) {
            Some(student) => Ok(student),
            None => {
                self.errors = validate(&self.draft, &self.students);
                Err(SubmitError::Invalid(self.errors.clone()))
            }
        }
    }

    fn reset_form(&mut self) {
        self.draft = FormDraft::default();
        self.errors = FieldErrors::default();
        self.editor_visible = false;
    }
}

/// `max(id) + 1`, or `1` for an empty roster. `None` once `max` is
/// `StudentId::MAX`.
pub fn next_id(students: &[Student]) -> Option<StudentId> {
    students
        .iter()
        .map(|student| student.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
}

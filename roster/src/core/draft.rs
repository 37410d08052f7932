//! Scratch form state for the add/edit flows.

use crate::core::types::{Field, Student, StudentId};

/// Uncommitted form contents. Every field is raw text until submit.
///
/// `target` is the id of the record being edited, or `None` when creating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub target: Option<StudentId>,
    pub name: String,
    pub email: String,
    pub age: String,
    pub course: String,
    pub phone: String,
    pub address: String,
}

impl FormDraft {
    /// Populate a draft from an existing record (age rendered as text).
    pub fn from_student(student: &Student) -> Self {
        Self {
            target: Some(student.id),
            name: student.name.clone(),
            email: student.email.clone(),
            age: student.age.to_string(),
            course: student.course.clone(),
            phone: student.phone.clone(),
            address: student.address.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Course => &self.course,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
            Field::Course => &mut self.course,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Build a record from the draft under `id`.
    ///
    /// Returns `None` when the age text is not an integer; callers validate
    /// first, so this only fails on drafts that skipped validation.
    pub fn to_student(&self, id: StudentId) -> Option<Student> {
        let age = parse_age(&self.age)?;
        Some(Student {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            age,
            course: self.course.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        })
    }
}

/// Parse the age field as a whole number, ignoring surrounding whitespace.
pub fn parse_age(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

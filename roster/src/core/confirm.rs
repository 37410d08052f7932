//! Confirmation gate guarding destructive roster edits.

use crate::core::types::{Student, StudentId};

/// A pending removal shown to the user before it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalIntent {
    pub id: StudentId,
    pub name: String,
}

impl RemovalIntent {
    pub fn for_student(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
        }
    }

    /// Question put to the user.
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete student {} ({})?",
            self.id, self.name
        )
    }
}

/// Synchronous yes/no decision. Returning `false` must leave state unchanged.
pub trait ConfirmationGate {
    fn confirm(&mut self, intent: &RemovalIntent) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&RemovalIntent) -> bool,
{
    fn confirm(&mut self, intent: &RemovalIntent) -> bool {
        self(intent)
    }
}

/// Gate that accepts every removal without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&mut self, _intent: &RemovalIntent) -> bool {
        true
    }
}

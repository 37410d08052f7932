//! Test-only helpers for constructing students, drafts, and config files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::draft::FormDraft;
use crate::core::roster::RosterManager;
use crate::core::types::{Field, Student, StudentId, default_roster};

/// Create a deterministic, valid student.
pub fn student(id: StudentId, name: &str, email: &str) -> Student {
    Student {
        id,
        name: name.to_string(),
        email: email.to_string(),
        age: 20,
        course: "History".to_string(),
        phone: "555-0100".to_string(),
        address: format!("{} Test Lane", id),
    }
}

/// A creation draft that passes validation against the default roster.
pub fn valid_draft() -> FormDraft {
    FormDraft {
        target: None,
        name: "Test Student".to_string(),
        email: "test.student@example.com".to_string(),
        age: "30".to_string(),
        course: "Biology".to_string(),
        phone: "+1555000111".to_string(),
        address: "1 Test Way".to_string(),
    }
}

/// Manager over the default two-record roster.
pub fn seeded_manager() -> RosterManager {
    RosterManager::new(default_roster())
}

/// Type every field of `draft` into `manager`, one change at a time.
pub fn fill_draft(manager: &mut RosterManager, draft: &FormDraft) {
    for field in Field::ALL {
        manager.on_field_change(field, draft.get(field));
    }
}

/// Temporary directory holding a config file.
pub struct TestConfig {
    dir: TempDir,
    path: PathBuf,
}

impl TestConfig {
    /// Write `contents` to `roster.toml` inside a fresh temp dir.
    pub fn with_contents(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let path = dir.path().join("roster.toml");
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(Self { dir, path })
    }

    /// Temp dir with no config file in it yet.
    pub fn empty() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let path = dir.path().join("roster.toml");
        Ok(Self { dir, path })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

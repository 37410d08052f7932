//! Roster configuration stored in `roster.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::invariants::validate_invariants;
use crate::core::types::{Student, default_roster};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "roster.toml";

/// Session configuration (TOML).
///
/// Read once at start-up. Missing fields fall back to the defaults, so an
/// empty file yields the default seed roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterConfig {
    /// Ask before deleting a student.
    pub confirm_deletes: bool,

    /// Records the session starts with, in display order.
    pub seed: Vec<Student>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            confirm_deletes: true,
            seed: default_roster(),
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        let errors = validate_invariants(&self.seed);
        if !errors.is_empty() {
            return Err(anyhow!("invalid seed roster:\n- {}", errors.join("\n- ")));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RosterConfig::default()`.
pub fn load_config(path: &Path) -> Result<RosterConfig> {
    if !path.exists() {
        let cfg = RosterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RosterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RosterConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

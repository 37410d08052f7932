//! Line-oriented shell driving a `RosterManager` from a terminal.
//!
//! Each input line is one command. After every command that changes state
//! the full state is rendered again (table, then the form if it is open).

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::confirm::AutoConfirm;
use crate::core::roster::{RemoveOutcome, RosterManager, SubmitError, SubmitOutcome};
use crate::core::types::{Field, StudentId};
use crate::io::prompt::PromptGate;
use crate::render::{render_form, render_roster};

const HELP: &str = "\
Commands:
  list                  show all students
  add                   open an empty form
  edit <id>             open the form for a student
  set <field> [value]   change a form field (name, email, age, course, phone, address)
  form                  show the open form
  submit                validate and save the form
  cancel                close the form without saving
  delete <id>           delete a student
  export                print all students as JSON
  help                  show this help
  quit                  leave the shell
";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit(StudentId),
    Set { field: Field, value: String },
    Form,
    Submit,
    Cancel,
    Delete(StudentId),
    Export,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = split_word(line);
        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(parse_id(rest)?),
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err("usage: set <field> [value]".to_string());
                }
                Command::Set {
                    field: field.parse()?,
                    value: value.to_string(),
                }
            }
            "form" | "show" => Command::Form,
            "submit" | "save" => Command::Submit,
            "cancel" => Command::Cancel,
            "delete" | "rm" => Command::Delete(parse_id(rest)?),
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{}' (try 'help')", other)),
        };
        let takes_args = matches!(
            command,
            Command::Edit(_) | Command::Set { .. } | Command::Delete(_)
        );
        if !takes_args && !rest.is_empty() {
            return Err(format!("'{}' takes no arguments", word));
        }
        Ok(command)
    }
}

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    manager: RosterManager,
    input: R,
    output: W,
    confirm_deletes: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(manager: RosterManager, input: R, output: W, confirm_deletes: bool) -> Self {
        Self {
            manager,
            input,
            output,
            confirm_deletes,
        }
    }

    pub fn manager(&self) -> &RosterManager {
        &self.manager
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.emit("Student Management System (type 'help' for commands)\n")?;
        self.render_state()?;
        loop {
            self.emit("> ")?;
            let mut raw = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut raw)
                .context("read command")?;
            if read == 0 {
                debug!("input closed");
                self.emit("\n")?;
                return Ok(());
            }
            let Ok(line) = String::from_utf8(raw) else {
                warn!(bytes = read, "skipping input line that is not valid UTF-8");
                self.emit("error: input is not valid UTF-8\n")?;
                continue;
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(message) => self.emit(&format!("error: {}\n", message))?,
            }
        }
    }

    /// Apply one command to the session.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "execute");
        match command {
            Command::List => {
                let table = render_roster(self.manager.students());
                self.emit(&table)?;
            }
            Command::Add => {
                self.manager.begin_create();
                self.render_state()?;
            }
            Command::Edit(id) => {
                if self.manager.begin_edit_by_id(id) {
                    self.render_state()?;
                } else {
                    self.emit(&format!("No student with id {}\n", id))?;
                }
            }
            Command::Set { field, value } => {
                if !self.require_form()? {
                    return Ok(Flow::Continue);
                }
                self.manager.on_field_change(field, value);
                self.render_state()?;
            }
            Command::Form => {
                if self.require_form()? {
                    let form = render_form(&self.manager);
                    self.emit(&form)?;
                }
            }
            Command::Submit => {
                if !self.require_form()? {
                    return Ok(Flow::Continue);
                }
                self.submit()?;
            }
            Command::Cancel => {
                self.manager.cancel();
                self.render_state()?;
            }
            Command::Delete(id) => self.delete(id)?,
            Command::Export => {
                let mut json = serde_json::to_string_pretty(self.manager.students())
                    .context("serialize students")?;
                json.push('\n');
                self.emit(&json)?;
            }
            Command::Help => self.emit(HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn submit(&mut self) -> Result<()> {
        match self.manager.submit() {
            Ok(SubmitOutcome::Created(id)) => {
                info!(id, "student created");
                self.emit(&format!("Added student {}\n", id))?;
            }
            Ok(SubmitOutcome::Updated(id)) => {
                info!(id, "student updated");
                self.emit(&format!("Updated student {}\n", id))?;
            }
            Ok(SubmitOutcome::TargetMissing(id)) => {
                info!(id, "edited student no longer exists");
                self.emit(&format!("Student {} no longer exists; nothing saved\n", id))?;
            }
            Err(SubmitError::Invalid(errors)) => {
                debug!(errors = errors.len(), "submit rejected");
                self.emit(&format!("Form has {} error(s)\n", errors.len()))?;
            }
            Err(SubmitError::IdsExhausted) => {
                warn!("no student ids left to assign");
                self.emit("No student ids left; nothing saved\n")?;
            }
        }
        self.render_state()
    }

    fn delete(&mut self, id: StudentId) -> Result<()> {
        let outcome = if self.confirm_deletes {
            let mut gate = PromptGate::new(&mut self.input, &mut self.output);
            self.manager.remove(id, &mut gate)
        } else {
            self.manager.remove(id, &mut AutoConfirm)
        };
        match outcome {
            RemoveOutcome::Removed(student) => {
                info!(id, "student deleted");
                self.emit(&format!("Deleted student {} ({})\n", student.id, student.name))?;
                self.render_state()?;
            }
            RemoveOutcome::Declined => self.emit("Delete cancelled\n")?,
            RemoveOutcome::NotFound => self.emit(&format!("No student with id {}\n", id))?,
        }
        Ok(())
    }

    fn require_form(&mut self) -> Result<bool> {
        if self.manager.is_editor_visible() {
            return Ok(true);
        }
        self.emit("No form open; use 'add' or 'edit <id>' first\n")?;
        Ok(false)
    }

    fn render_state(&mut self) -> Result<()> {
        let mut text = render_roster(self.manager.students());
        let form = render_form(&self.manager);
        if !form.is_empty() {
            text.push('\n');
            text.push_str(&form);
        }
        self.emit(&text)
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("write shell output")?;
        self.output.flush().context("flush shell output")
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn parse_id(raw: &str) -> Result<StudentId, String> {
    if raw.is_empty() {
        return Err("missing student id".to_string());
    }
    raw.parse()
        .map_err(|_| format!("invalid student id '{}'", raw))
}

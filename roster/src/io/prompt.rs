//! Terminal yes/no prompt used as the delete confirmation gate.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::core::confirm::{ConfirmationGate, RemovalIntent};

/// Asks on `output` and reads the answer from `input`.
///
/// Only `y` / `yes` (any case) accept. EOF and read errors reject.
pub struct PromptGate<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> PromptGate<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{} [y/N] ", question)?;
        self.output.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer))
    }
}

impl<R: BufRead, W: Write> ConfirmationGate for PromptGate<'_, R, W> {
    fn confirm(&mut self, intent: &RemovalIntent) -> bool {
        match self.ask(&intent.prompt()) {
            Ok(Some(answer)) => {
                let accepted = is_yes(&answer);
                debug!(id = intent.id, accepted, "delete confirmation answered");
                accepted
            }
            Ok(None) => {
                debug!(id = intent.id, "input closed at confirmation prompt");
                false
            }
            Err(err) => {
                warn!(id = intent.id, error = %err, "confirmation prompt failed");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn intent() -> RemovalIntent {
        RemovalIntent {
            id: 2,
            name: "Jane Smith".to_string(),
        }
    }

    fn answer(input: &str) -> (bool, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let accepted = PromptGate::new(&mut reader, &mut out).confirm(&intent());
        (accepted, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn accepts_y_and_yes() {
        assert!(answer("y\n").0);
        assert!(answer("YES\n").0);
        assert!(answer("  Yes  \n").0);
    }

    #[test]
    fn rejects_anything_else() {
        assert!(!answer("n\n").0);
        assert!(!answer("\n").0);
        assert!(!answer("yep\n").0);
    }

    #[test]
    fn rejects_on_eof() {
        assert!(!answer("").0);
    }

    #[test]
    fn writes_the_question() {
        let (_, out) = answer("n\n");
        assert_eq!(
            out,
            "Are you sure you want to delete student 2 (Jane Smith)? [y/N] "
        );
    }

    #[test]
    fn consumes_a_single_line() {
        let mut reader = Cursor::new(b"y\nlist\n".to_vec());
        let mut out = Vec::new();
        assert!(PromptGate::new(&mut reader, &mut out).confirm(&intent()));
        let mut rest = String::new();
        reader.read_line(&mut rest).expect("read");
        assert_eq!(rest, "list\n");
    }
}

use std::fmt;

use crate::common::span::Span;

/// Represents a note attached to a Syntax error,
/// i.e. a location in source code with an optional
/// specific hint or tip corresponding to this specific location.
#[derive(Debug, PartialEq, Eq)]
pub struct Note {
    pub span: Span,
    pub hint: Option<String>,
}

impl Note {
    pub fn new(span: Span) -> Note {
        Note { span, hint: None }
    }

    pub fn new_with_hint(hint: &str, span: &Span) -> Note {
        Note {
            span: span.clone(),
            hint: Some(hint.to_string()),
        }
    }
}

/// Represents a static error found while loading program text.
/// Usually, one `Note` per error is enough.
#[derive(Debug, PartialEq, Eq)]
pub struct Syntax {
    pub reason: String,
    pub notes: Vec<Note>,
}

impl Syntax {
    /// Creates a new static error with a single note that does not have a hint.
    pub fn error(reason: &str, span: &Span) -> Syntax {
        Syntax::error_with_note(reason, Note::new(span.clone()))
    }

    /// Creates a new static error with a single note that may or may not have a
    /// hint.
    pub fn error_with_note(reason: &str, note: Note) -> Syntax {
        Syntax {
            reason: reason.to_string(),
            notes: vec![note],
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in self.notes.iter() {
            let formatted = note.span.format();

            if let Some(ref hint) = note.hint {
                let padding = " ".repeat(formatted.gutter_padding());
                writeln!(
                    f,
                    "In {}:{}:{}",
                    formatted.path,
                    formatted.start + 1,
                    formatted.start_col + 1
                )?;
                writeln!(f, "{} |", padding)?;
                writeln!(f, "{} | {}", formatted.start + 1, formatted.line)?;
                writeln!(
                    f,
                    "{} | {}{} note: {}",
                    padding,
                    " ".repeat(formatted.start_col),
                    "^".repeat(formatted.width.max(1)),
                    hint,
                )?;
            } else {
                write!(f, "{}", formatted)?;
            }
        }
        write!(f, "Syntax Error: {}", self.reason)
    }
}

impl std::error::Error for Syntax {}

use std::{
    fmt::{self, Display, Formatter},
    num::IntErrorKind,
    ops::Deref,
    rc::Rc,
};

use crate::common::{source::Source, span::Span, syntax::{Note, Syntax}};

/// The initial contents of a machine's memory,
/// loaded at addresses `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program(pub Vec<i64>);

impl Program {
    /// Parses comma-separated decimal integers.
    /// Whitespace around each cell is ignored,
    /// and leading lines starting with `--` are treated as a header and skipped.
    pub fn parse(source: &Rc<Source>) -> Result<Program, Syntax> {
        let contents = &source.contents;

        let mut start = 0;
        for line in contents.split_inclusive('\n') {
            if !line.starts_with("--") {
                break;
            }
            start += line.len();
        }

        if contents[start..].trim().is_empty() {
            return Err(Syntax::error(
                "Expected a program, found nothing",
                &Span::point(source, start),
            ));
        }

        let mut cells = vec![];
        let mut offset = start;

        for raw in contents[start..].split(',') {
            let leading = raw.len() - raw.trim_start().len();
            let cell = raw.trim();
            let span = Span::new(source, offset + leading, cell.len());
            offset += raw.len() + 1;

            if cell.is_empty() {
                return Err(Syntax::error("Expected an integer, found nothing", &span));
            }

            let value = cell.parse::<i64>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Syntax::error_with_note(
                    &format!("The integer '{}' does not fit in 64 bits", cell),
                    Note::new_with_hint(
                        &format!("cells range from {} to {}", i64::MIN, i64::MAX),
                        &span,
                    ),
                ),
                _ => Syntax::error(&format!("Expected an integer, found '{}'", cell), &span),
            })?;

            cells.push(value);
        }

        Ok(Program(cells))
    }
}

impl Deref for Program {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for Program {
    fn from(cells: Vec<i64>) -> Program {
        Program(cells)
    }
}

/// Programs render back to the text they are loaded from.
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cells = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cells.join(","))
    }
}

use std::{
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

use crate::common::source::Source;

/// A `Span` refers to a section of a source,
/// much like a `&str`, but with a reference to a `Source` rather than a `String`.
/// A `Span` is meant to be paired with other datastructures,
/// to be used during error reporting.
#[derive(Clone, Eq, PartialEq)]
pub struct Span {
    source: Rc<Source>,
    offset: usize,
    length: usize,
}

impl Span {
    /// Create a new `Span` from an offset with a length.
    pub fn new(source: &Rc<Source>, offset: usize, length: usize) -> Span {
        Span {
            source: Rc::clone(source),
            offset,
            length,
        }
    }

    /// A `Span` that points at a specific point in the source.
    /// Has a length of `0`.
    pub fn point(source: &Rc<Source>, offset: usize) -> Span {
        Span::new(source, offset, 0)
    }

    /// Return the index of the end of the `Span`.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the contents of a `Span`.
    /// Spans are only built from `split` and `trim` subslices of the source,
    /// so both ends fall on char boundaries.
    pub fn contents(&self) -> String {
        self.source.contents[self.offset..self.end()].to_string()
    }

    pub fn path(&self) -> String {
        self.source.path.to_string_lossy().to_string()
    }

    /// Zero-indexed line of a byte offset.
    pub fn line(&self, index: usize) -> usize {
        self.source.contents[..index].matches('\n').count()
    }

    /// Zero-indexed column of a byte offset.
    pub fn col(&self, index: usize) -> usize {
        let before = &self.source.contents[..index];
        match before.rfind('\n') {
            Some(newline) => before[newline + 1..].chars().count(),
            None => before.chars().count(),
        }
    }

    pub fn format(&self) -> FormattedSpan {
        let line = self.line(self.offset);
        FormattedSpan {
            path: self.path(),
            start: line,
            line: self
                .source
                .contents
                .split('\n')
                .nth(line)
                .unwrap_or("")
                .trim_end_matches('\r')
                .to_string(),
            start_col: self.col(self.offset),
            width: self.contents().chars().count(),
        }
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("contents", &self.contents())
            .field("start", &self.offset)
            .field("end", &self.end())
            .finish()
    }
}

impl Display for Span {
    /// Given a `Span`, `fmt` will print out where the `Span` occurs in its source:
    /// ```plain
    /// In ./source:1:5
    ///   |
    /// 1 | 1,0,x,0,99
    ///   |     ^
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Represents a formatted span, ready to be displayed.
/// Program cells never cross a line break,
/// so a formatted span is always a single line.
pub struct FormattedSpan {
    pub path: String,
    pub start: usize,
    pub line: String,
    pub start_col: usize,
    pub width: usize,
}

impl FormattedSpan {
    pub fn gutter_padding(&self) -> usize {
        (self.start + 1).to_string().len()
    }
}

impl Display for FormattedSpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "In {}:{}:{}",
            self.path,
            self.start + 1,
            self.start_col + 1
        )?;
        writeln!(f, "{} |", " ".repeat(self.gutter_padding()))?;
        writeln!(f, "{} | {}", self.start + 1, self.line)?;
        writeln!(
            f,
            "{} | {}{}",
            " ".repeat(self.gutter_padding()),
            " ".repeat(self.start_col),
            "^".repeat(self.width.max(1)),
        )
    }
}

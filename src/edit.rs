//! Elementary edit operations.
//!
//! An [`Edit`] labels one transition in the DP grid. The root of every trace
//! carries no edit at all; see [`crate::trace::TraceCell::edit`].

use std::fmt;

/// The operation performed by an [`Edit`], without its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Delete,
    Insert,
    Substitute,
    Match,
}

impl EditKind {
    /// Upper-case name used by the `Display` impls.
    pub fn as_str(self) -> &'static str {
        match self {
            EditKind::Delete => "DELETE",
            EditKind::Insert => "INSERT",
            EditKind::Substitute => "SUBSTITUTE",
            EditKind::Match => "MATCH",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One elementary step turning the source sequence into the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Drop a source character.
    Delete(char),
    /// Emit a target character without consuming the source.
    Insert(char),
    /// Replace a source character (first) with a different target one (second).
    Substitute(char, char),
    /// Source and target characters are equal.
    Match(char),
}

impl Edit {
    /// Match when the characters agree, substitute otherwise.
    #[inline]
    pub fn align(from: char, to: char) -> Self {
        if from == to {
            Edit::Match(from)
        } else {
            Edit::Substitute(from, to)
        }
    }

    #[inline]
    pub fn kind(&self) -> EditKind {
        match self {
            Edit::Delete(_) => EditKind::Delete,
            Edit::Insert(_) => EditKind::Insert,
            Edit::Substitute(..) => EditKind::Substitute,
            Edit::Match(_) => EditKind::Match,
        }
    }

    /// The primary character: deleted, inserted, or the source side of a
    /// substitute/match.
    #[inline]
    pub fn character(&self) -> char {
        match *self {
            Edit::Delete(c) | Edit::Insert(c) | Edit::Match(c) => c,
            Edit::Substitute(from, _) => from,
        }
    }

    /// Replacement character, present only for substitutions.
    #[inline]
    pub fn sub_character(&self) -> Option<char> {
        match *self {
            Edit::Substitute(_, to) => Some(to),
            _ => None,
        }
    }

    /// Whether this edit advances through the source sequence.
    #[inline]
    pub fn consumes_source(&self) -> bool {
        !matches!(self, Edit::Insert(_))
    }

    /// Whether this edit advances through the target sequence.
    #[inline]
    pub fn consumes_target(&self) -> bool {
        !matches!(self, Edit::Delete(_))
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Substitute(from, to) => write!(f, "{} {from} with {to}", self.kind()),
            _ => write!(f, "{} {}", self.kind(), self.character()),
        }
    }
}

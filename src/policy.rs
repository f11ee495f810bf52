//! Ready-made cost policies.
//!
//! These cover the common cases and double as templates for writing your own
//! [`CostPolicy`]:
//! - [`UnitCost`]        : classic Levenshtein (match 0, anything else 1).
//! - [`KindWeights`]     : one weight per edit kind.
//! - [`FreeChars`]       : makes edits on selected characters free.
//! - [`CaseInsensitive`] : charges case-only substitutions separately.

use crate::edit::{Edit, EditKind};
use crate::traits::CostPolicy;

/// Match costs 0, every other edit costs 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCost;

impl CostPolicy for UnitCost {
    #[inline]
    fn cost(&self, edit: &Edit, _position: usize) -> f64 {
        match edit.kind() {
            EditKind::Match => 0.0,
            _ => 1.0,
        }
    }
}

/// Position-independent weight per edit kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindWeights {
    pub insert: f64,
    pub delete: f64,
    pub substitute: f64,
    pub matched: f64,
}

impl Default for KindWeights {
    fn default() -> Self {
        Self {
            insert: 1.0,
            delete: 1.0,
            substitute: 1.0,
            matched: 0.0,
        }
    }
}

impl KindWeights {
    pub fn new(insert: f64, delete: f64, substitute: f64) -> Self {
        Self {
            insert,
            delete,
            substitute,
            matched: 0.0,
        }
    }
}

impl CostPolicy for KindWeights {
    #[inline]
    fn cost(&self, edit: &Edit, _position: usize) -> f64 {
        match edit.kind() {
            EditKind::Insert => self.insert,
            EditKind::Delete => self.delete,
            EditKind::Substitute => self.substitute,
            EditKind::Match => self.matched,
        }
    }
}

/// Edits whose primary character is in `chars` cost nothing; everything else
/// is delegated to `inner`.
///
/// The primary character is the deleted or inserted one, or the source side
/// of a substitution. `FreeChars::new(" ", UnitCost)` makes deleting,
/// inserting or replacing a space free, but turning another character into
/// a space is still charged.
#[derive(Debug, Clone)]
pub struct FreeChars<P> {
    chars: Vec<char>,
    inner: P,
}

impl<P: CostPolicy> FreeChars<P> {
    pub fn new(chars: &str, inner: P) -> Self {
        Self {
            chars: chars.chars().collect(),
            inner,
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: CostPolicy> CostPolicy for FreeChars<P> {
    #[inline]
    fn cost(&self, edit: &Edit, position: usize) -> f64 {
        if self.chars.contains(&edit.character()) {
            0.0
        } else {
            self.inner.cost(edit, position)
        }
    }
}

/// Substitutions that only change letter case cost `case_cost`; everything
/// else is delegated to `inner`.
#[derive(Debug, Clone)]
pub struct CaseInsensitive<P> {
    inner: P,
    case_cost: f64,
}

impl<P: CostPolicy> CaseInsensitive<P> {
    /// Case-only substitutions become free.
    pub fn new(inner: P) -> Self {
        Self::with_case_cost(inner, 0.0)
    }

    pub fn with_case_cost(inner: P, case_cost: f64) -> Self {
        Self { inner, case_cost }
    }
}

impl<P: CostPolicy> CostPolicy for CaseInsensitive<P> {
    fn cost(&self, edit: &Edit, position: usize) -> f64 {
        match *edit {
            Edit::Substitute(from, to) if same_ignoring_case(from, to) => self.case_cost,
            _ => self.inner.cost(edit, position),
        }
    }
}

fn same_ignoring_case(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

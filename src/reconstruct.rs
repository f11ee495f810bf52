//! Path reconstruction from a finished trace.

use std::fmt;

use crate::edit::{Edit, EditKind};
use crate::trace::Trace;

/// Ordered edit path plus its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct EditResult {
    edits: Vec<Edit>,
    total_cost: f64,
}

impl EditResult {
    pub fn new(edits: Vec<Edit>, total_cost: f64) -> Self {
        Self { edits, total_cost }
    }

    /// Edits in source-to-target order.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn into_edits(self) -> Vec<Edit> {
        self.edits
    }

    /// Number of edits of the given kind.
    pub fn count(&self, kind: EditKind) -> usize {
        self.edits.iter().filter(|e| e.kind() == kind).count()
    }

    /// True when every edit is a match (including the empty path).
    pub fn is_identity(&self) -> bool {
        self.edits.iter().all(|e| e.kind() == EditKind::Match)
    }
}

impl fmt::Display for EditResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (k, edit) in self.edits.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{edit}")?;
        }
        write!(f, "] (cost {})", self.total_cost)
    }
}

/// Walk the backpointers of `trace` from its terminal cell to the root.
///
/// The root sentinel is not part of the result. Runs in O(m + n), the
/// longest possible path through the grid.
pub fn reconstruct(trace: &Trace) -> EditResult {
    let mut edits: Vec<Edit> = trace.chain().filter_map(|cell| cell.edit()).collect();
    edits.reverse();
    EditResult::new(edits, trace.cost())
}

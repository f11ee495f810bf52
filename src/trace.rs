//! Backpointer arena for DP cells.
//!
//! Every cell the engine creates is pushed into a [`TraceArena`] and never
//! modified afterwards. A cell refers to the cell it was derived from by
//! [`CellId`], not by a row/column slot, so the rolling rows can be reused
//! while every chain stays reachable from the terminal cell.
//!
//! Chains are acyclic by construction: a cell can only name a predecessor
//! that already exists in the arena, so predecessor ids are strictly smaller
//! than the id of the cell pointing at them. [`TraceArena::retain_reachable`]
//! relies on that ordering to drop dead cells in one backward and one forward
//! pass, which keeps the arena proportional to the live chains instead of the
//! whole DP grid.

use crate::edit::Edit;
use crate::error::{EditError, Result};

/// Largest number of cells a single arena can address.
pub const MAX_CELLS: usize = u32::MAX as usize;

/// Index of a cell inside a [`TraceArena`].
///
/// Ids are only stable until the next [`TraceArena::retain_reachable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(u32);

impl CellId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One DP matrix entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceCell {
    cost: f64,
    edit: Option<Edit>,
    predecessor: Option<CellId>,
}

impl TraceCell {
    /// Accumulated cost of the chain ending in this cell.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Edit labelling the transition into this cell; `None` on the root.
    #[inline]
    pub fn edit(&self) -> Option<Edit> {
        self.edit
    }

    #[inline]
    pub fn predecessor(&self) -> Option<CellId> {
        self.predecessor
    }

    /// The root carries no edit and has no predecessor.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.edit.is_none()
    }
}

/// Storage for the cells of one engine invocation.
#[derive(Debug, Clone)]
pub struct TraceArena {
    cells: Vec<TraceCell>,
    max_cells: usize,
}

impl Default for TraceArena {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl TraceArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            max_cells: MAX_CELLS,
        }
    }

    /// Push the root sentinel (cost 0, no edit).
    pub fn root(&mut self) -> Result<CellId> {
        self.push(TraceCell {
            cost: 0.0,
            edit: None,
            predecessor: None,
        })
    }

    /// Push a cell reached from `from` by `edit`, with its final cost.
    pub fn extend(&mut self, from: CellId, edit: Edit, cost: f64) -> Result<CellId> {
        debug_assert!(from.index() < self.cells.len(), "dangling predecessor");
        self.push(TraceCell {
            cost,
            edit: Some(edit),
            predecessor: Some(from),
        })
    }

    fn push(&mut self, cell: TraceCell) -> Result<CellId> {
        let len = self.cells.len();
        if len >= self.max_cells {
            return Err(EditError::CapacityExceeded { cells: len });
        }
        // max_cells never exceeds u32::MAX.
        let id = CellId(len as u32);
        self.cells.push(cell);
        Ok(id)
    }

    /// Drop every cell not on a chain starting at one of `live`, and rewrite
    /// `live` to the new ids.
    ///
    /// Surviving cells keep their relative order, so predecessors still have
    /// smaller ids than the cells pointing at them.
    pub fn retain_reachable(&mut self, live: &mut [CellId]) {
        let len = self.cells.len();
        let mut reachable = vec![false; len];
        for id in live.iter() {
            reachable[id.index()] = true;
        }
        for idx in (0..len).rev() {
            if reachable[idx] {
                if let Some(p) = self.cells[idx].predecessor {
                    reachable[p.index()] = true;
                }
            }
        }

        // Old index -> new id; only read for reachable cells.
        let mut remap = vec![CellId(0); len];
        let mut kept = 0usize;
        for idx in 0..len {
            if !reachable[idx] {
                continue;
            }
            let mut cell = self.cells[idx].clone();
            cell.predecessor = cell.predecessor.map(|p| remap[p.index()]);
            remap[idx] = CellId(kept as u32);
            self.cells[kept] = cell;
            kept += 1;
        }
        self.cells.truncate(kept);

        for id in live.iter_mut() {
            *id = remap[id.index()];
        }
    }

    #[inline]
    pub fn get(&self, id: CellId) -> &TraceCell {
        &self.cells[id.index()]
    }

    #[inline]
    pub fn cost(&self, id: CellId) -> f64 {
        self.cells[id.index()].cost
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate the chain from `id` back to the root, root included.
    pub fn chain(&self, id: CellId) -> Chain<'_> {
        Chain {
            arena: self,
            next: Some(id),
        }
    }
}

/// Iterator over a backpointer chain, terminal first.
pub struct Chain<'a> {
    arena: &'a TraceArena,
    next: Option<CellId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a TraceCell;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.arena.get(self.next?);
        self.next = cell.predecessor;
        Some(cell)
    }
}

/// Outcome of one engine invocation: the cells of the optimal path plus the
/// id of its terminal cell.
#[derive(Debug, Clone)]
pub struct Trace {
    arena: TraceArena,
    terminal: CellId,
    peak_cells: usize,
}

impl Trace {
    pub(crate) fn new(arena: TraceArena, terminal: CellId, peak_cells: usize) -> Self {
        Self {
            arena,
            terminal,
            peak_cells,
        }
    }

    /// Largest number of cells held at once while computing this trace.
    pub fn peak_cells(&self) -> usize {
        self.peak_cells
    }

    pub fn arena(&self) -> &TraceArena {
        &self.arena
    }

    pub fn terminal_id(&self) -> CellId {
        self.terminal
    }

    pub fn terminal(&self) -> &TraceCell {
        self.arena.get(self.terminal)
    }

    /// Total cost of the optimal path.
    pub fn cost(&self) -> f64 {
        self.terminal().cost
    }

    /// Cells along the optimal path, terminal first, root last.
    pub fn chain(&self) -> Chain<'_> {
        self.arena.chain(self.terminal)
    }
}

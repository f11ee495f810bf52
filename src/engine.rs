//! Weighted edit-distance engine.
//!
//! The engine evaluates the classic edit-distance recurrence row by row,
//! keeping only two rows of cell ids live. Each cell is pushed into a
//! [`TraceArena`] together with a link to the cell it was derived from, so
//! the optimal edit path can still be read back from the terminal cell once
//! the rows themselves have been recycled.
//!
//! For source length m and target length n the engine performs
//! O(m·n) policy calls and arena pushes, while the rolling rows hold
//! O(n) ids at any time. Cells that no live chain reaches are reclaimed by
//! compacting the arena whenever it has grown to twice its last live size,
//! so the arena tracks the cells still reachable from the current row rather
//! than the whole grid. The returned [`Trace`] keeps only the optimal path.

use crate::edit::Edit;
use crate::error::{EditError, Result};
use crate::reconstruct::{reconstruct, EditResult};
use crate::trace::{CellId, Trace, TraceArena};
use crate::traits::CostPolicy;

/// Threshold used when the caller does not bound the search.
pub const UNBOUNDED: f64 = f64::INFINITY;

/// Distance engine bound to a cost policy and an optional threshold.
///
/// Typical usage:
/// ```
/// use weighted_edit::{policy::UnitCost, Edit, EditDistance};
///
/// let engine = EditDistance::new(UnitCost);
/// let result = engine.run("abc", "abcd").unwrap();
/// assert_eq!(result.total_cost(), 1.0);
/// assert_eq!(result.edits().last(), Some(&Edit::Insert('d')));
/// ```
#[derive(Debug, Clone)]
pub struct EditDistance<P: CostPolicy> {
    policy: P,
    threshold: f64,
}

impl<P: CostPolicy> EditDistance<P> {
    /// Create an engine with no threshold.
    pub fn new(policy: P) -> Self {
        Self::with_threshold(policy, UNBOUNDED)
    }

    /// Create an engine that aborts once every cell of a completed row costs
    /// at least `threshold`.
    ///
    /// A NaN threshold is accepted here and rejected by every computation
    /// with [`EditError::InvalidInput`].
    pub fn with_threshold(policy: P, threshold: f64) -> Self {
        Self { policy, threshold }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compute the trace for `source` → `target`.
    pub fn compute(&self, source: &str, target: &str) -> Result<Trace> {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        self.compute_chars(&source, &target)
    }

    /// Compute the trace for pre-split character sequences.
    pub fn compute_chars(&self, source: &[char], target: &[char]) -> Result<Trace> {
        weighted_trace(&self.policy, source, target, self.threshold)
    }

    /// Compute the distance and reconstruct the optimal edit path.
    pub fn run(&self, source: &str, target: &str) -> Result<EditResult> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("edit_distance_run");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let trace = self.compute(source, target)?;
        Ok(reconstruct(&trace))
    }
}

/// Compute the trace for possibly absent sequences.
///
/// Either sequence may be empty but not absent; `None` is reported as
/// [`EditError::InvalidInput`] before any computation. `threshold` defaults
/// to [`UNBOUNDED`].
pub fn compute_distance<P>(
    source: Option<&str>,
    target: Option<&str>,
    policy: &P,
    threshold: Option<f64>,
) -> Result<Trace>
where
    P: CostPolicy + ?Sized,
{
    let source = source.ok_or(EditError::InvalidInput {
        reason: "source sequence is absent",
    })?;
    let target = target.ok_or(EditError::InvalidInput {
        reason: "target sequence is absent",
    })?;
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    weighted_trace(policy, &source, &target, threshold.unwrap_or(UNBOUNDED))
}

/// A candidate transition into the cell being filled.
#[derive(Clone, Copy)]
struct Step {
    from: CellId,
    edit: Edit,
    cost: f64,
}

/// Pick the cheapest candidate. Earlier candidates win ties, so callers pass
/// them in substitute/match, insert, delete order.
#[inline]
fn best(diagonal: Step, insert: Step, delete: Step) -> Step {
    let mut winner = diagonal;
    if insert.cost < winner.cost {
        winner = insert;
    }
    if delete.cost < winner.cost {
        winner = delete;
    }
    winner
}

/// Core recurrence shared by the engine and [`compute_distance`].
pub(crate) fn weighted_trace<P>(
    policy: &P,
    source: &[char],
    target: &[char],
    threshold: f64,
) -> Result<Trace>
where
    P: CostPolicy + ?Sized,
{
    if threshold.is_nan() {
        return Err(EditError::InvalidInput {
            reason: "threshold is NaN",
        });
    }

    let m = source.len();
    let n = target.len();

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("weighted_trace", m, n, threshold);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if n == 0 {
        return straight_chain(policy, source, Edit::Delete);
    }
    if m == 0 {
        return straight_chain(policy, target, Edit::Insert);
    }

    let mut arena = TraceArena::with_capacity(compaction_trigger(n + 1, n));
    let mut prev: Vec<CellId> = Vec::with_capacity(n + 1);
    let mut curr: Vec<CellId> = Vec::with_capacity(n + 1);

    // Row 0: inserts only.
    prev.push(arena.root()?);
    for (j, &ch) in target.iter().enumerate() {
        let from = prev[j];
        let edit = Edit::Insert(ch);
        let cost = arena.cost(from) + policy.cost(&edit, j + 1);
        prev.push(arena.extend(from, edit, cost)?);
    }

    let mut peak = arena.len();
    let mut compact_at = compaction_trigger(arena.len(), n);

    for (i, &from_ch) in source.iter().enumerate() {
        let row = i + 1;

        #[cfg(feature = "tracing")]
        let row_span = tracing::trace_span!("row", row);
        #[cfg(feature = "tracing")]
        let _row_enter = row_span.enter();

        curr.clear();
        let delete = Edit::Delete(from_ch);
        let cost = arena.cost(prev[0]) + policy.cost(&delete, row);
        curr.push(arena.extend(prev[0], delete, cost)?);

        for j in 1..=n {
            let to_ch = target[j - 1];

            let diagonal = Edit::align(from_ch, to_ch);
            let insert = Edit::Insert(to_ch);
            let delete = Edit::Delete(from_ch);

            let step = best(
                Step {
                    from: prev[j - 1],
                    edit: diagonal,
                    cost: arena.cost(prev[j - 1]) + policy.cost(&diagonal, row),
                },
                Step {
                    from: curr[j - 1],
                    edit: insert,
                    cost: arena.cost(curr[j - 1]) + policy.cost(&insert, j),
                },
                Step {
                    from: prev[j],
                    edit: delete,
                    cost: arena.cost(prev[j]) + policy.cost(&delete, row),
                },
            );
            curr.push(arena.extend(step.from, step.edit, step.cost)?);
        }

        // Only completed rows are checked.
        if !curr.iter().any(|&id| arena.cost(id) < threshold) {
            let min_cost = curr
                .iter()
                .map(|&id| arena.cost(id))
                .fold(f64::INFINITY, f64::min);
            #[cfg(feature = "tracing")]
            tracing::debug!(row, min_cost, threshold, "threshold exceeded");
            return Err(EditError::ThresholdExceeded {
                threshold,
                row,
                min_cost,
            });
        }

        std::mem::swap(&mut prev, &mut curr);

        if arena.len() >= compact_at {
            peak = peak.max(arena.len());
            // `curr` holds stale ids until the next row clears it.
            curr.clear();
            arena.retain_reachable(&mut prev);
            compact_at = compaction_trigger(arena.len(), n);
            #[cfg(feature = "tracing")]
            tracing::trace!(row, live = arena.len(), "compacted trace arena");
        }
    }

    peak = peak.max(arena.len());
    let mut terminal = [prev[n]];
    arena.retain_reachable(&mut terminal);
    Ok(Trace::new(arena, terminal[0], peak))
}

/// Arena size at which the next compaction runs: twice the live cells plus
/// two rows of headroom. Compaction stays amortized O(1) per pushed cell.
#[inline]
fn compaction_trigger(live: usize, n: usize) -> usize {
    live.saturating_mul(2).saturating_add((n + 1).saturating_mul(2))
}

/// Chain of one edit per character, used when the other sequence is empty.
fn straight_chain<P, F>(policy: &P, chars: &[char], make: F) -> Result<Trace>
where
    P: CostPolicy + ?Sized,
    F: Fn(char) -> Edit,
{
    let mut arena = TraceArena::with_capacity(chars.len() + 1);
    let mut last = arena.root()?;
    for (k, &ch) in chars.iter().enumerate() {
        let edit = make(ch);
        let cost = arena.cost(last) + policy.cost(&edit, k + 1);
        last = arena.extend(last, edit, cost)?;
    }
    let peak = arena.len();
    Ok(Trace::new(arena, last, peak))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::EditKind;
    use std::cell::RefCell;

    fn unit(edit: &Edit, _position: usize) -> f64 {
        match edit {
            Edit::Match(_) => 0.0,
            _ => 1.0,
        }
    }

    #[test]
    fn both_empty_is_root_only() {
        let trace = EditDistance::new(unit).compute("", "").unwrap();
        assert!(trace.terminal().is_root());
        assert_eq!(trace.cost(), 0.0);
        assert_eq!(trace.arena().len(), 1);
    }

    #[test]
    fn degenerate_chains_accumulate_cost() {
        let positional = |_: &Edit, position: usize| position as f64;
        let trace = EditDistance::new(positional).compute("abc", "").unwrap();
        // 1 + 2 + 3
        assert_eq!(trace.cost(), 6.0);
        assert!(trace
            .chain()
            .filter_map(|c| c.edit())
            .all(|e| e.kind() == EditKind::Delete));

        let trace = EditDistance::new(positional).compute("", "xy").unwrap();
        assert_eq!(trace.cost(), 3.0);
    }

    #[test]
    fn policy_receives_one_based_positions() {
        let seen = RefCell::new(Vec::new());
        let recording = |edit: &Edit, position: usize| {
            seen.borrow_mut().push((*edit, position));
            unit(edit, position)
        };
        EditDistance::new(recording).compute("ab", "c").unwrap();
        let seen = seen.into_inner();
        assert!(seen.iter().all(|&(_, p)| p >= 1));
        assert!(seen.contains(&(Edit::Insert('c'), 1)));
        assert!(seen.contains(&(Edit::Delete('b'), 2)));
        assert!(seen.contains(&(Edit::Substitute('b', 'c'), 2)));
        // row 0: 1 insert; rows 1..=2: 1 leading delete + 3 candidates.
        assert_eq!(seen.len(), 1 + 2 * (1 + 3));
    }

    #[test]
    fn ties_prefer_diagonal_then_insert() {
        let flat = |_: &Edit, _: usize| 1.0;
        let trace = EditDistance::new(flat).compute("a", "b").unwrap();
        assert_eq!(trace.terminal().edit(), Some(Edit::Substitute('a', 'b')));

        // Making the diagonal expensive leaves insert and delete tied.
        let no_sub = |edit: &Edit, _: usize| match edit {
            Edit::Substitute(..) => 5.0,
            _ => 1.0,
        };
        let trace = EditDistance::new(no_sub).compute("a", "b").unwrap();
        assert_eq!(trace.cost(), 2.0);
        assert_eq!(trace.terminal().edit(), Some(Edit::Insert('b')));
    }

    #[test]
    fn threshold_aborts_after_completed_row() {
        let engine = EditDistance::with_threshold(unit, 1.0);
        let err = engine.compute("xyz", "abc").unwrap_err();
        match err {
            EditError::ThresholdExceeded { row, min_cost, .. } => {
                assert_eq!(row, 1);
                assert_eq!(min_cost, 1.0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn threshold_is_strict_lower_bound() {
        // Row 1 of "ab" vs "ab" contains the zero-cost Match cell.
        let engine = EditDistance::with_threshold(unit, 0.5);
        assert!(engine.compute("ab", "ab").is_ok());
        let engine = EditDistance::with_threshold(unit, 0.0);
        assert!(engine.compute("ab", "ab").unwrap_err().is_threshold_exceeded());
    }

    #[test]
    fn nan_threshold_is_invalid() {
        let engine = EditDistance::with_threshold(unit, f64::NAN);
        assert!(matches!(
            engine.compute("a", "b"),
            Err(EditError::InvalidInput { .. })
        ));
    }

    #[test]
    fn absent_sequences_are_invalid() {
        assert!(matches!(
            compute_distance(None, Some("x"), &unit, None),
            Err(EditError::InvalidInput { .. })
        ));
        assert!(matches!(
            compute_distance(Some("x"), None, &unit, None),
            Err(EditError::InvalidInput { .. })
        ));
        let trace = compute_distance(Some(""), Some(""), &unit, None).unwrap();
        assert_eq!(trace.cost(), 0.0);
    }

    #[test]
    fn compute_distance_forwards_threshold() {
        let err = compute_distance(Some("ab"), Some("cd"), &unit, Some(0.0)).unwrap_err();
        assert_eq!(
            err,
            EditError::ThresholdExceeded {
                threshold: 0.0,
                row: 1,
                min_cost: 1.0,
            }
        );
        let trace = compute_distance(Some("ab"), Some("cd"), &unit, Some(UNBOUNDED)).unwrap();
        assert_eq!(trace.cost(), 2.0);
    }

    #[test]
    fn returned_trace_keeps_only_the_optimal_path() {
        let trace = EditDistance::new(unit).compute("kitten", "sitting").unwrap();
        assert_eq!(trace.cost(), 3.0);
        assert_eq!(trace.arena().len(), trace.chain().count());
        assert!(trace.peak_cells() < 7 * 8);
    }

    #[test]
    fn arena_stays_bounded_when_chains_merge() {
        // Disjoint alphabets and an expensive substitution: every cell is
        // reached by inserts along its row after deletes down column 0, so
        // the live cells are one row plus one column.
        let source: Vec<char> = (0..400).map(|k| (b'a' + (k % 10) as u8) as char).collect();
        let target: Vec<char> = (0..400).map(|k| (b'p' + (k % 10) as u8) as char).collect();
        let no_sub = |edit: &Edit, _: usize| match edit {
            Edit::Match(_) => 0.0,
            Edit::Substitute(..) => 5.0,
            _ => 1.0,
        };
        let trace = EditDistance::new(no_sub)
            .compute_chars(&source, &target)
            .unwrap();
        assert_eq!(trace.cost(), 800.0);
        assert!(
            trace.peak_cells() < 401 * 401 / 20,
            "peak {} cells",
            trace.peak_cells()
        );
        assert_eq!(trace.arena().len(), 801);
    }

    #[test]
    fn compaction_preserves_the_optimal_path() {
        // Long enough to trigger several compactions.
        let source = "the quick brown fox jumps over the lazy dog".repeat(4);
        let target = "a quick brown cat jumped over two lazy dogs".repeat(4);
        let result = EditDistance::new(unit).run(&source, &target).unwrap();
        assert_eq!(
            crate::utils::apply_edits(&source, result.edits()).as_deref(),
            Some(target.as_str())
        );
        assert_eq!(
            crate::utils::path_cost(&unit, result.edits()),
            result.total_cost()
        );
    }
}

//! Assorted helpers for working with edit paths.

use crate::edit::Edit;
use crate::traits::CostPolicy;

/// Replay `edits` against `source` and return the produced target.
///
/// Returns `None` when the path is inconsistent with `source`: a delete,
/// substitute or match names a character other than the next source
/// character, or the path leaves source characters unconsumed.
pub fn apply_edits(source: &str, edits: &[Edit]) -> Option<String> {
    let mut rest = source.chars();
    let mut out = String::with_capacity(source.len());
    for edit in edits {
        if edit.consumes_source() && rest.next()? != edit.character() {
            return None;
        }
        match *edit {
            Edit::Insert(c) | Edit::Match(c) => out.push(c),
            Edit::Substitute(_, to) => out.push(to),
            Edit::Delete(_) => {}
        }
    }
    match rest.next() {
        Some(_) => None,
        None => Some(out),
    }
}

/// Sum `policy` over `edits`, using the same 1-based positions the engine
/// passes: source index for delete/substitute/match, target index for insert.
pub fn path_cost<P>(policy: &P, edits: &[Edit]) -> f64
where
    P: CostPolicy + ?Sized,
{
    let mut source_pos = 0usize;
    let mut target_pos = 0usize;
    let mut total = 0.0;
    for edit in edits {
        if edit.consumes_source() {
            source_pos += 1;
        }
        if edit.consumes_target() {
            target_pos += 1;
        }
        let position = if edit.consumes_source() {
            source_pos
        } else {
            target_pos
        };
        total += policy.cost(edit, position);
    }
    total
}

//! Bounded nearest-candidate search.
//!
//! Runs the engine once per candidate with the cost budget as threshold, so
//! hopeless candidates are dropped as soon as a completed row shows that no
//! alignment can stay below the budget. With the `parallel` feature enabled,
//! candidates are evaluated on the rayon thread pool; each evaluation is
//! still a single-threaded matrix walk.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::weighted_trace;
use crate::error::EditError;
use crate::reconstruct::{reconstruct, EditResult};
use crate::traits::CostPolicy;

/// `Sync` when candidates are evaluated on rayon, no bound otherwise.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}
#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> MaybeSync for T {}

/// `Sync` when candidates are evaluated on rayon, no bound otherwise.
#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSync for T {}

/// A candidate that aligns with the query within budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Position of the candidate in the input list.
    pub index: usize,
    pub text: String,
    pub result: EditResult,
}

impl Candidate {
    pub fn cost(&self) -> f64 {
        self.result.total_cost()
    }
}

/// Align `query` against every candidate and keep those whose total cost is
/// at most `max_cost`, cheapest first (input order breaks ties).
///
/// A NaN `max_cost` is rejected with [`EditError::InvalidInput`]; threshold
/// aborts are never surfaced, they only remove the candidate.
pub fn closest<P, S>(
    query: &str,
    candidates: &[S],
    policy: &P,
    max_cost: f64,
) -> Result<Vec<Candidate>, EditError>
where
    P: CostPolicy + MaybeSync + ?Sized,
    S: AsRef<str> + MaybeSync,
{
    if max_cost.is_nan() {
        return Err(EditError::InvalidInput {
            reason: "max_cost is NaN",
        });
    }

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("closest", candidates = candidates.len(), max_cost);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let query: Vec<char> = query.chars().collect();
    let evaluate = |(index, text): (usize, &S)| -> Option<Candidate> {
        let text = text.as_ref();
        let chars: Vec<char> = text.chars().collect();
        // A row whose cheapest cell costs exactly `max_cost` must survive.
        let threshold = next_up(max_cost);
        match weighted_trace(policy, &query, &chars, threshold) {
            Ok(trace) if trace.cost() <= max_cost => Some(Candidate {
                index,
                text: text.to_owned(),
                result: reconstruct(&trace),
            }),
            _ => None,
        }
    };

    #[cfg(feature = "parallel")]
    let mut found: Vec<Candidate> = candidates
        .par_iter()
        .enumerate()
        .filter_map(evaluate)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let mut found: Vec<Candidate> = candidates.iter().enumerate().filter_map(evaluate).collect();

    found.sort_by(|a, b| a.cost().total_cmp(&b.cost()).then(a.index.cmp(&b.index)));
    Ok(found)
}

/// Smallest float strictly greater than `x` (infinity stays infinity).
fn next_up(x: f64) -> f64 {
    if x.is_infinite() && x > 0.0 {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

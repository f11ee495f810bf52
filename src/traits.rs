//! Core trait definitions.
//!
//! The engine knows nothing about what an edit *costs*; it asks a
//! [`CostPolicy`] once per candidate transition. Implement the trait for a
//! struct when the policy carries configuration, or pass a closure
//! `Fn(&Edit, usize) -> f64` directly.

use crate::edit::Edit;

/// Cost assigned to a single edit at a given position.
///
/// Contract:
/// - `position` is 1-based. It indexes the source sequence for
///   [`Edit::Delete`], [`Edit::Substitute`] and [`Edit::Match`], and the
///   target sequence for [`Edit::Insert`].
/// - The returned value must be finite and non-negative. The engine does not
///   check this; negative or NaN costs make the result meaningless.
/// - The function should be pure. The engine calls it three times per
///   interior cell and relies on equal inputs giving equal outputs for
///   reproducible paths.
pub trait CostPolicy {
    fn cost(&self, edit: &Edit, position: usize) -> f64;
}

impl<F> CostPolicy for F
where
    F: Fn(&Edit, usize) -> f64,
{
    #[inline]
    fn cost(&self, edit: &Edit, position: usize) -> f64 {
        self(edit, position)
    }
}

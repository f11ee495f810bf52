//! Weighted edit distance with full edit-path traceback.
//!
//! This crate computes the cheapest way to turn one character sequence into
//! another when every insert, delete, substitute and match carries a cost
//! chosen by the caller, and returns the exact edit path achieving it.
//!
//! ## Core idea
//! 1. Describe what edits cost by implementing [`CostPolicy`] (or pass a
//!    closure `Fn(&Edit, usize) -> f64`).
//! 2. Let [`EditDistance`] evaluate the DP recurrence row by row, keeping
//!    only two rows live.
//! 3. Every cell records the cell it came from, so [`reconstruct`] can walk
//!    back from the final cell and recover the path even though earlier rows
//!    have been recycled.
//!
//! An optional threshold aborts the computation as soon as a completed row
//! shows that no path can stay below it.
//!
//! ## Quick start
//! ```
//! use weighted_edit::{policy::{FreeChars, UnitCost}, Edit, EditDistance};
//!
//! let engine = EditDistance::new(FreeChars::new(" ", UnitCost));
//! let result = engine.run("New york", "newyork").unwrap();
//! assert_eq!(result.total_cost(), 1.0);
//! assert_eq!(result.edits()[0], Edit::Substitute('N', 'n'));
//! ```
//!
//! ## Cargo features
//! - `parallel`: evaluate candidates of [`search::closest`] on rayon.
//! - `tracing`: emit spans and events through the `tracing` crate.
//! - `heavy`: enable long-running stress tests.

pub mod builder;
pub mod edit;
pub mod engine;
pub mod error;
pub mod policy;
pub mod reconstruct;
pub mod search;
pub mod trace;
pub mod traits;
pub mod utils;

pub use crate::builder::EditDistanceBuilder;
pub use crate::edit::{Edit, EditKind};
pub use crate::engine::{compute_distance, EditDistance, UNBOUNDED};
pub use crate::error::{EditError, Result};
pub use crate::reconstruct::{reconstruct, EditResult};
pub use crate::trace::{CellId, Trace, TraceArena, TraceCell};
pub use crate::traits::CostPolicy;

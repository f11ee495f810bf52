//! Example: weighted edit distance with free spaces.
//!
//! Run with:
//! `cargo run --example new_york`
//!
//! Spaces can be deleted or inserted for free, every other edit costs 1, so
//! "New york" -> "newyork" only pays for the capital N.

use weighted_edit::{
    policy::{CaseInsensitive, FreeChars, UnitCost},
    EditDistance,
};

fn main() {
    let s = "New york";
    let t = "newyork";

    let engine = EditDistance::new(FreeChars::new(" ", UnitCost));
    match engine.run(s, t) {
        Ok(result) => {
            for edit in result.edits() {
                println!("{edit}");
            }
            println!("Total cost: {}", result.total_cost());
        }
        Err(err) => eprintln!("new_york: {err}"),
    }

    // Ignoring case as well removes the last charged edit.
    let engine = EditDistance::new(CaseInsensitive::new(FreeChars::new(" ", UnitCost)));
    match engine.run(s, t) {
        Ok(result) => println!("Case-insensitive: {result}"),
        Err(err) => eprintln!("new_york: {err}"),
    }
}

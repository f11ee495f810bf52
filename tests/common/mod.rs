//! Input generators shared by the stress tests and the benchmarks.
#![allow(dead_code)]

use rand::{seq::SliceRandom, Rng};

pub const DNA: &str = "ACGT";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// `len` characters drawn uniformly from `alphabet`.
pub fn random_text<R: Rng>(rng: &mut R, alphabet: &str, len: usize) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    (0..len)
        .filter_map(|_| symbols.choose(rng).copied())
        .collect()
}

/// Apply `edits` random single-character inserts, deletes or replacements.
///
/// Under a unit-cost policy the distance between the input and the result is
/// at most `edits`.
pub fn mutate<R: Rng>(rng: &mut R, text: &str, alphabet: &str, edits: usize) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    let mut chars: Vec<char> = text.chars().collect();
    for _ in 0..edits {
        let Some(&ch) = symbols.choose(rng) else {
            break;
        };
        match rng.gen_range(0..3) {
            0 => {
                let at = rng.gen_range(0..=chars.len());
                chars.insert(at, ch);
            }
            1 if !chars.is_empty() => {
                let at = rng.gen_range(0..chars.len());
                chars.remove(at);
            }
            _ if !chars.is_empty() => {
                let at = rng.gen_range(0..chars.len());
                chars[at] = ch;
            }
            _ => chars.push(ch),
        }
    }
    chars.into_iter().collect()
}

//! Letter cancellation and circular elimination.
//!
//! Both names are normalized, shared letters cancel pairwise, and the
//! number of letters left over is counted around the FLAMES circle until
//! a single relationship remains.

use crate::types::{Reading, Relationship, Step};
use tracing::{debug, trace};

/// Strip every ASCII space and lowercase the rest.
///
/// Only `' '` is removed; tabs and other whitespace are kept as letters.
pub fn normalize(name: &str) -> Vec<char> {
    name.replace(' ', "").to_lowercase().chars().collect()
}

/// Cancel letters that appear in both sequences, one pair per occurrence.
///
/// Walks a snapshot of `first` so every original letter is visited exactly
/// once while the live vectors shrink. Returns the leftovers of each side.
pub fn cancel_common(mut first: Vec<char>, mut second: Vec<char>) -> (Vec<char>, Vec<char>) {
    let snapshot = first.clone();
    for c in snapshot {
        let Some(j) = second.iter().position(|&x| x == c) else {
            continue;
        };
        second.remove(j);
        if let Some(i) = first.iter().position(|&x| x == c) {
            first.remove(i);
        }
    }
    (first, second)
}

/// Number of letters left in both names after cancellation.
pub fn remaining_count(name1: &str, name2: &str) -> usize {
    let (a, b) = cancel_common(normalize(name1), normalize(name2));
    a.len() + b.len()
}

/// Count `remaining` around the circle, removing one entry per pass.
pub fn eliminate(remaining: usize) -> Relationship {
    run_elimination(remaining).0
}

/// Resolve the relationship between two names.
pub fn resolve(name1: &str, name2: &str) -> Relationship {
    eliminate(remaining_count(name1, name2))
}

/// Like [`resolve`], but keeps the leftovers and every elimination step.
pub fn read(name1: &str, name2: &str) -> Reading {
    let (a, b) = cancel_common(normalize(name1), normalize(name2));
    let remaining = a.len() + b.len();
    let (relationship, steps) = run_elimination(remaining);

    debug!(remaining, %relationship, "flames reading complete");

    Reading {
        leftover_first: a.into_iter().collect(),
        leftover_second: b.into_iter().collect(),
        remaining,
        steps,
        relationship,
    }
}

fn run_elimination(remaining: usize) -> (Relationship, Vec<Step>) {
    let mut circle = Relationship::ALL.to_vec();
    let mut steps = Vec::with_capacity(circle.len() - 1);

    while circle.len() > 1 {
        let length = circle.len();
        let index = (remaining % length).checked_sub(1);

        // A zero remainder lands on the last entry; otherwise the entries
        // after `idx` move to the front, leaving the removed one at the end.
        if let Some(idx) = index {
            circle.rotate_left(idx + 1);
        }
        let removed = circle[length - 1];
        circle.truncate(length - 1);

        trace!(length, ?index, %removed, "eliminated");
        steps.push(Step { length, index, removed });
    }

    (circle[0], steps)
}

/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::substitution::IdBinding;
use crate::terms::Variable;
use log::debug;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

// Below this many left-side bindings the join stays on the calling thread.
const PARALLEL_PROBE_THRESHOLD: usize = 4096;

/// Two bindings are compatible iff every variable bound in both maps to the
/// same identifier.
pub fn compatible(left: &IdBinding, right: &IdBinding) -> bool {
    left.iter()
        .all(|(var, id)| right.get(var).map_or(true, |other| other == id))
}

/// Union of two compatible bindings.
pub fn union(left: &IdBinding, right: &IdBinding) -> IdBinding {
    let mut merged = left.clone();
    merged.extend(right.iter().map(|(var, &id)| (var.clone(), id)));
    merged
}

/// Joins two binding sets: every compatible (left, right) pair contributes
/// its union, incompatible pairs are dropped. The result holds no duplicates.
///
/// When each side binds one fixed set of variables (always the case for
/// matcher output and for previous merges of it) this is a hash join keyed
/// on the shared variables. Otherwise every pair is checked.
pub fn merge(left: &[IdBinding], right: &[IdBinding]) -> Vec<IdBinding> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    let merged = match (uniform_domain(left), uniform_domain(right)) {
        (Some(left_vars), Some(right_vars)) => {
            let shared: Vec<&Variable> = left_vars
                .into_iter()
                .filter(|var| right_vars.contains(var))
                .collect();
            hash_join(left, right, &shared)
        }
        _ => nested_loop_join(left, right),
    };

    dedup(merged)
}

/// Folds `merge` over a sequence of candidate sets, in order.
///
/// The sets are pulled lazily, so once the accumulated result is empty no
/// further candidate set is produced. An empty sequence yields the single
/// empty binding.
pub fn join_all<I>(candidates: I) -> Vec<IdBinding>
where
    I: IntoIterator<Item = Vec<IdBinding>>,
{
    let mut candidates = candidates.into_iter();
    let mut accumulated = match candidates.next() {
        Some(first) => dedup(first),
        None => return vec![IdBinding::new()],
    };

    let mut step = 0;
    while !accumulated.is_empty() {
        let Some(candidate) = candidates.next() else {
            break;
        };
        step += 1;
        let before = accumulated.len();
        accumulated = merge(&accumulated, &candidate);
        debug!(
            "join step {}: {} x {} -> {} bindings",
            step,
            before,
            candidate.len(),
            accumulated.len()
        );
    }

    accumulated
}

/// The variables bound by every member of `set`, if they all bind the same ones.
fn uniform_domain(set: &[IdBinding]) -> Option<Vec<&Variable>> {
    let (first, rest) = set.split_first()?;
    let same = rest
        .iter()
        .all(|binding| binding.len() == first.len() && binding.keys().eq(first.keys()));
    same.then(|| first.keys().collect())
}

fn join_key(binding: &IdBinding, shared: &[&Variable]) -> Vec<u32> {
    // Uniform domains guarantee every shared variable is bound.
    shared.iter().filter_map(|var| binding.get(*var).copied()).collect()
}

fn hash_join(left: &[IdBinding], right: &[IdBinding], shared: &[&Variable]) -> Vec<IdBinding> {
    let mut table: FxHashMap<Vec<u32>, Vec<&IdBinding>> = FxHashMap::default();
    for binding in right {
        table.entry(join_key(binding, shared)).or_default().push(binding);
    }

    let matches_for = |binding: &IdBinding| -> Vec<IdBinding> {
        table
            .get(&join_key(binding, shared))
            .map(|matches| matches.iter().map(|other| union(binding, other)).collect())
            .unwrap_or_default()
    };

    if left.len() >= PARALLEL_PROBE_THRESHOLD {
        left.par_iter().flat_map_iter(matches_for).collect()
    } else {
        left.iter().flat_map(matches_for).collect()
    }
}

fn nested_loop_join(left: &[IdBinding], right: &[IdBinding]) -> Vec<IdBinding> {
    let mut merged = Vec::new();
    for a in left {
        for b in right {
            if compatible(a, b) {
                merged.push(union(a, b));
            }
        }
    }
    merged
}

fn dedup(bindings: Vec<IdBinding>) -> Vec<IdBinding> {
    let mut seen = FxHashSet::default();
    bindings
        .into_iter()
        .filter(|binding| seen.insert(binding.clone()))
        .collect()
}

/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::pattern_matcher::PatternMatcher;
use log::debug;
use shared::join_algorithm::join_all;
use shared::query::StarQuery;
use shared::substitution::Substitution;

/// Evaluates every atom of `query` through `matcher` and joins the candidate
/// sets on their shared variables, in the order the atoms are given.
///
/// Atoms after the first empty candidate set are never evaluated. A query
/// without atoms yields the single empty substitution.
pub fn evaluate_star_query(matcher: &PatternMatcher<'_>, query: &StarQuery) -> Vec<Substitution> {
    let candidates = query.atoms.iter().map(|atom| {
        let bindings = matcher.match_ids(atom);
        debug!("{}: {} candidates for {}", query.label, bindings.len(), atom);
        bindings
    });

    join_all(candidates)
        .iter()
        .filter_map(|binding| Substitution::decode(binding, matcher.dictionary()))
        .collect()
}

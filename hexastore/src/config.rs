/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Deserialize, Serialize};

/// Sizing and compaction knobs for a `HexaStore`.
///
/// Capacities are hints only; the store grows past them as needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Distinct constants expected, used to pre-size the dictionary.
    pub expected_terms: usize,
    /// Distinct subjects expected; sizes the subject-led permutations.
    pub expected_subjects: usize,
    /// Distinct predicates expected; sizes the predicate-led permutations.
    pub expected_predicates: usize,
    /// Distinct objects expected; sizes the object-led permutations.
    pub expected_objects: usize,
    /// Release spare map capacity when the store is frozen.
    pub compact_on_freeze: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            expected_terms: 0,
            expected_subjects: 0,
            expected_predicates: 0,
            expected_objects: 0,
            compact_on_freeze: true,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expected_terms(mut self, terms: usize) -> Self {
        self.expected_terms = terms;
        self
    }

    pub fn expected_subjects(mut self, subjects: usize) -> Self {
        self.expected_subjects = subjects;
        self
    }

    pub fn expected_predicates(mut self, predicates: usize) -> Self {
        self.expected_predicates = predicates;
        self
    }

    pub fn expected_objects(mut self, objects: usize) -> Self {
        self.expected_objects = objects;
        self
    }

    pub fn compact_on_freeze(mut self, compact: bool) -> Self {
        self.compact_on_freeze = compact;
        self
    }
}

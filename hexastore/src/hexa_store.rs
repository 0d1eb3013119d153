/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::config::StoreConfig;
use crate::frozen_store::FrozenStore;
use crate::pattern_matcher::PatternMatcher;
use crate::star_query::evaluate_star_query;
use crate::storage_trait::RdfStorage;
use log::{debug, warn};
use shared::dictionary::Dictionary;
use shared::index_manager::SextupleIndex;
use shared::query::StarQuery;
use shared::substitution::Substitution;
use shared::triple::{RdfAtom, Triple};

/// In-memory RDF store: one dictionary for the constants and one six-way
/// permutation index over their identifiers.
///
/// Populate it with `add`/`add_all`, then either query it directly or call
/// `freeze` to share it read-only across threads.
#[derive(Debug, Clone, Default)]
pub struct HexaStore {
    dictionary: Dictionary,
    index: SextupleIndex,
    config: StoreConfig,
}

impl HexaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        HexaStore {
            dictionary: Dictionary::with_capacity(config.expected_terms),
            index: SextupleIndex::with_capacity(
                config.expected_subjects,
                config.expected_predicates,
                config.expected_objects,
            ),
            config,
        }
    }

    /// Stores a ground atom. Returns `false` with no side effect when the
    /// atom holds a variable or is already stored.
    pub fn add(&mut self, atom: &RdfAtom) -> bool {
        let (Some(s), Some(p), Some(o)) = (
            atom.subject.as_constant(),
            atom.predicate.as_constant(),
            atom.object.as_constant(),
        ) else {
            warn!("Rejected non-ground atom: {}", atom);
            return false;
        };

        let triple = Triple {
            subject: self.dictionary.intern(s),
            predicate: self.dictionary.intern(p),
            object: self.dictionary.intern(o),
        };
        self.index.insert(&triple)
    }

    /// Adds every atom. Duplicates are fine; returns `false` if any atom was
    /// rejected as non-ground.
    pub fn add_all<I>(&mut self, atoms: I) -> bool
    where
        I: IntoIterator<Item = RdfAtom>,
    {
        let (mut added, mut duplicates, mut rejected) = (0usize, 0usize, 0usize);
        for atom in atoms {
            if !atom.is_ground() {
                rejected += 1;
            } else if self.add(&atom) {
                added += 1;
            } else {
                duplicates += 1;
            }
        }
        if rejected > 0 {
            warn!("Rejected {} non-ground atoms", rejected);
        }
        debug!(
            "add_all: {} added, {} duplicates, {} rejected, {} stored",
            added,
            duplicates,
            rejected,
            self.index.len()
        );
        rejected == 0
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn index(&self) -> &SextupleIndex {
        &self.index
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn matcher(&self) -> PatternMatcher<'_> {
        PatternMatcher::new(&self.dictionary, &self.index)
    }

    /// Ends the write phase. The returned store is immutable and cheap to
    /// clone across threads.
    pub fn freeze(mut self) -> FrozenStore {
        if self.config.compact_on_freeze {
            self.dictionary.shrink_to_fit();
            self.index.shrink_to_fit();
        }
        debug!(
            "Frozen store with {} triples over {} terms",
            self.index.len(),
            self.dictionary.len()
        );
        FrozenStore::new(self)
    }
}

impl RdfStorage for HexaStore {
    fn size(&self) -> u64 {
        self.index.len()
    }

    fn match_atom(&self, atom: &RdfAtom) -> Vec<Substitution> {
        self.matcher().match_atom(atom)
    }

    fn match_star(&self, query: &StarQuery) -> Vec<Substitution> {
        evaluate_star_query(&self.matcher(), query)
    }

    fn get_atoms(&self) -> Vec<RdfAtom> {
        self.index
            .all_triples()
            .iter()
            .filter_map(|triple| self.dictionary.decode_triple(triple))
            .collect()
    }
}

impl Extend<RdfAtom> for HexaStore {
    fn extend<I: IntoIterator<Item = RdfAtom>>(&mut self, atoms: I) {
        self.add_all(atoms);
    }
}

impl FromIterator<RdfAtom> for HexaStore {
    fn from_iter<I: IntoIterator<Item = RdfAtom>>(atoms: I) -> Self {
        let mut store = HexaStore::new();
        store.add_all(atoms);
        store
    }
}

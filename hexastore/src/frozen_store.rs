/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::hexa_store::HexaStore;
use crate::storage_trait::RdfStorage;
use log::debug;
use rayon::prelude::*;
use shared::dictionary::Dictionary;
use shared::index_manager::SextupleIndex;
use shared::query::StarQuery;
use shared::substitution::Substitution;
use shared::triple::RdfAtom;
use std::sync::Arc;

/// Read-only handle on a populated store.
///
/// Produced by `HexaStore::freeze`. Clones share the same data, and every
/// query path only reads, so handles can be used from any number of threads
/// without locking.
#[derive(Debug, Clone)]
pub struct FrozenStore {
    inner: Arc<HexaStore>,
}

impl FrozenStore {
    pub(crate) fn new(store: HexaStore) -> Self {
        FrozenStore { inner: Arc::new(store) }
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.inner.dictionary()
    }

    pub fn index(&self) -> &SextupleIndex {
        self.inner.index()
    }

    /// Evaluates a batch of queries on the rayon pool. Answers are returned in
    /// the order of `queries`.
    pub fn match_all(&self, queries: &[StarQuery]) -> Vec<Vec<Substitution>> {
        debug!("Evaluating {} queries in parallel", queries.len());
        queries
            .par_iter()
            .map(|query| self.inner.match_star(query))
            .collect()
    }
}

impl RdfStorage for FrozenStore {
    fn size(&self) -> u64 {
        self.inner.size()
    }

    fn match_atom(&self, atom: &RdfAtom) -> Vec<Substitution> {
        self.inner.match_atom(atom)
    }

    fn match_star(&self, query: &StarQuery) -> Vec<Substitution> {
        self.inner.match_star(query)
    }

    fn get_atoms(&self) -> Vec<RdfAtom> {
        self.inner.get_atoms()
    }
}

/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use crate::triple::Triple;

/// One permutation: first key -> second key -> set of third positions.
pub type PermutationIndex = FxHashMap<u32, FxHashMap<u32, FxHashSet<u32>>>;

#[derive(Debug, Clone, Default)]
pub struct SextupleIndex {
    // The six permutations, using HashMap of HashMap of HashSet.
    pub spo: PermutationIndex,
    pub sop: PermutationIndex,
    pub pso: PermutationIndex,
    pub pos: PermutationIndex,
    pub osp: PermutationIndex,
    pub ops: PermutationIndex,
    len: u64,
}

impl SextupleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes each permutation by the kind of key it is led by: distinct
    /// subjects for `spo`/`sop`, predicates for `pso`/`pos`, objects for
    /// `osp`/`ops`.
    pub fn with_capacity(subjects: usize, predicates: usize, objects: usize) -> Self {
        let permutation = |keys: usize| PermutationIndex::with_capacity_and_hasher(keys, Default::default());
        Self {
            spo: permutation(subjects),
            sop: permutation(subjects),
            pso: permutation(predicates),
            pos: permutation(predicates),
            osp: permutation(objects),
            ops: permutation(objects),
            len: 0,
        }
    }

    /// Insert a single triple into all six indexes.
    ///
    /// Returns `false` without touching any permutation when the triple is
    /// already stored. Takes `&mut self`, so the check and the six inserts
    /// cannot interleave with another access.
    pub fn insert(&mut self, triple: &Triple) -> bool {
        if self.contains(triple) {
            return false; // triple already stored
        }
        let Triple { subject: s, predicate: p, object: o } = *triple;
        add_to_index(&mut self.spo, s, p, o);
        add_to_index(&mut self.sop, s, o, p);
        add_to_index(&mut self.pso, p, s, o);
        add_to_index(&mut self.pos, p, o, s);
        add_to_index(&mut self.osp, o, s, p);
        add_to_index(&mut self.ops, o, p, s);
        self.len += 1;
        true
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.scan_sp(triple.subject, triple.predicate)
            .map_or(false, |objects| objects.contains(&triple.object))
    }

    /// Number of distinct stored triples.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every stored triple exactly once, read off the SPO permutation.
    pub fn all_triples(&self) -> Vec<Triple> {
        self.query(None, None, None)
    }

    /// Query the index.
    pub fn query(&self, s: Option<u32>, p: Option<u32>, o: Option<u32>) -> Vec<Triple> {
        let mut results = Vec::new();
        if (s, p, o) == (None, None, None) {
            results.reserve(self.len as usize);
        }
        self.for_each_match(s, p, o, |triple| results.push(triple));
        results
    }

    /// Calls `visit` once per stored triple matching the bound positions.
    ///
    /// The bound positions select the permutation whose leading keys they
    /// are, so only real index entries are walked.
    pub fn for_each_match<F>(&self, s: Option<u32>, p: Option<u32>, o: Option<u32>, mut visit: F)
    where
        F: FnMut(Triple),
    {
        match (s, p, o) {
            // Fully bound
            (Some(ss), Some(pp), Some(oo)) => {
                let triple = Triple { subject: ss, predicate: pp, object: oo };
                if self.contains(&triple) {
                    visit(triple);
                }
            }
            // (S, P, -)
            (Some(ss), Some(pp), None) => {
                if let Some(objects) = self.scan_sp(ss, pp) {
                    for &obj in objects {
                        visit(Triple { subject: ss, predicate: pp, object: obj });
                    }
                }
            }
            // (S, -, O)
            (Some(ss), None, Some(oo)) => {
                if let Some(predicates) = self.scan_so(ss, oo) {
                    for &pred in predicates {
                        visit(Triple { subject: ss, predicate: pred, object: oo });
                    }
                }
            }
            // (S, -, -)
            (Some(ss), None, None) => {
                if let Some(pred_map) = self.spo.get(&ss) {
                    for (&pred, objects) in pred_map {
                        for &obj in objects {
                            visit(Triple { subject: ss, predicate: pred, object: obj });
                        }
                    }
                }
            }
            // (-, P, O)
            (None, Some(pp), Some(oo)) => {
                if let Some(subjects) = self.scan_po(pp, oo) {
                    for &subj in subjects {
                        visit(Triple { subject: subj, predicate: pp, object: oo });
                    }
                }
            }
            // (-, P, -)
            (None, Some(pp), None) => {
                if let Some(subj_map) = self.pso.get(&pp) {
                    for (&subj, objects) in subj_map {
                        for &obj in objects {
                            visit(Triple { subject: subj, predicate: pp, object: obj });
                        }
                    }
                }
            }
            // (-, -, O)
            (None, None, Some(oo)) => {
                if let Some(subj_map) = self.osp.get(&oo) {
                    for (&subj, predicates) in subj_map {
                        for &pred in predicates {
                            visit(Triple { subject: subj, predicate: pred, object: oo });
                        }
                    }
                }
            }
            // (-, -, -) => all
            (None, None, None) => {
                for (&subj, pred_map) in &self.spo {
                    for (&pred, objects) in pred_map {
                        for &obj in objects {
                            visit(Triple { subject: subj, predicate: pred, object: obj });
                        }
                    }
                }
            }
        }
    }

    /// Scan using the Subject-Predicate index (spo)
    pub fn scan_sp(&self, s: u32, p: u32) -> Option<&FxHashSet<u32>> {
        self.spo
            .get(&s)
            .and_then(|pred_map| pred_map.get(&p))
    }

    /// Scan using the Subject-Object index (sop)
    pub fn scan_so(&self, s: u32, o: u32) -> Option<&FxHashSet<u32>> {
        self.sop
            .get(&s)
            .and_then(|obj_map| obj_map.get(&o))
    }

    /// Scan using the Predicate-Object index (pos)
    pub fn scan_po(&self, p: u32, o: u32) -> Option<&FxHashSet<u32>> {
        self.pos
            .get(&p)
            .and_then(|obj_map| obj_map.get(&o))
    }

    /// Release spare capacity in all six permutations, one rayon task each.
    pub fn shrink_to_fit(&mut self) {
        let Self { spo, sop, pso, pos, osp, ops, .. } = self;
        rayon::scope(|s| {
            for index in [spo, sop, pso, pos, osp, ops] {
                s.spawn(move |_| shrink_permutation(index));
            }
        });
    }
}

#[inline]
fn add_to_index(index: &mut PermutationIndex, key1: u32, key2: u32, value: u32) {
    index.entry(key1).or_default().entry(key2).or_default().insert(value);
}

fn shrink_permutation(index: &mut PermutationIndex) {
    use rayon::prelude::*;

    index.par_iter_mut().for_each(|(_, inner_map)| {
        inner_map.values_mut().for_each(|set| set.shrink_to_fit());
        inner_map.shrink_to_fit();
    });
    index.shrink_to_fit();
}

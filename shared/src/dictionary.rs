/*
 * Copyright © 2024 ladroid
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rustc_hash::FxHashMap;
use crate::terms::Term;
use crate::triple::{RdfAtom, Triple};

// Dictionary for encoding and decoding constant labels.
// Identifiers are dense and zero-based: `id_to_string[id]` is the label.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    string_to_id: FxHashMap<String, u32>,
    id_to_string: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            string_to_id: FxHashMap::default(),
            id_to_string: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary {
            string_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_string: Vec::with_capacity(capacity),
        }
    }

    /// Returns the identifier of `value`, assigning the next free one on first sight.
    pub fn intern(&mut self, value: &str) -> u32 {
        if let Some(&id) = self.string_to_id.get(value) {
            id
        } else {
            let id = u32::try_from(self.id_to_string.len())
                .expect("dictionary exhausted the u32 identifier space");
            self.string_to_id.insert(value.to_string(), id);
            self.id_to_string.push(value.to_string());
            id
        }
    }

    /// Non-mutating lookup; probing an unknown label never inserts it.
    pub fn lookup_id(&self, value: &str) -> Option<u32> {
        self.string_to_id.get(value).copied()
    }

    pub fn lookup_term(&self, id: u32) -> Option<&str> {
        self.id_to_string.get(id as usize).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.id_to_string.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_string.is_empty()
    }

    pub fn shrink_to_fit(&mut self) {
        self.string_to_id.shrink_to_fit();
        self.id_to_string.shrink_to_fit();
    }

    /// Rebuilds the ground atom for an encoded triple.
    pub fn decode_triple(&self, triple: &Triple) -> Option<RdfAtom> {
        let s = self.lookup_term(triple.subject)?;
        let p = self.lookup_term(triple.predicate)?;
        let o = self.lookup_term(triple.object)?;
        Some(RdfAtom::new(Term::constant(s), Term::constant(p), Term::constant(o)))
    }
}

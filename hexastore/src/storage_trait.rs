/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use shared::query::StarQuery;
use shared::substitution::Substitution;
use shared::triple::RdfAtom;

/// Read surface shared by the mutable store and its frozen form.
pub trait RdfStorage {
    /// Number of distinct ground triples stored.
    fn size(&self) -> u64;

    /// Substitutions making `atom` true against the stored triples.
    fn match_atom(&self, atom: &RdfAtom) -> Vec<Substitution>;

    /// Answers to `query`, atoms joined in the order given.
    fn match_star(&self, query: &StarQuery) -> Vec<Substitution>;

    /// Every stored triple as a ground atom.
    fn get_atoms(&self) -> Vec<RdfAtom>;
}

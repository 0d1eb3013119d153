/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::terms::Variable;
use crate::triple::RdfAtom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A conjunction of triple patterns joined on their shared variables.
///
/// The atoms are evaluated in the order given. Nothing requires a literal
/// star shape; the answer variables only matter for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarQuery {
    pub label: String,
    pub atoms: Vec<RdfAtom>,
    pub answer_variables: Vec<Variable>,
}

impl StarQuery {
    pub fn new(label: impl Into<String>, atoms: Vec<RdfAtom>, answer_variables: Vec<Variable>) -> Self {
        Self {
            label: label.into(),
            atoms,
            answer_variables,
        }
    }

    /// Distinct variables over all atoms, in order of first appearance.
    pub fn variables(&self) -> Vec<&Variable> {
        let mut vars: Vec<&Variable> = Vec::new();
        for var in self.atoms.iter().flat_map(|atom| atom.variables()) {
            if !vars.contains(&var) {
                vars.push(var);
            }
        }
        vars
    }

    /// Variables occurring in every atom: the centre of the star.
    pub fn central_variables(&self) -> Vec<&Variable> {
        match self.atoms.split_first() {
            None => Vec::new(),
            Some((first, rest)) => first
                .variables()
                .into_iter()
                .filter(|var| rest.iter().all(|atom| atom.variables().contains(var)))
                .collect(),
        }
    }

    /// Same atoms and answer variables, label ignored.
    pub fn same_pattern(&self, other: &StarQuery) -> bool {
        self.atoms == other.atoms && self.answer_variables == other.answer_variables
    }
}

impl fmt::Display for StarQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT")?;
        for var in &self.answer_variables {
            write!(f, " {}", var)?;
        }
        writeln!(f, " WHERE {{")?;
        for atom in &self.atoms {
            writeln!(f, "  {}", atom)?;
        }
        write!(f, "}}")
    }
}

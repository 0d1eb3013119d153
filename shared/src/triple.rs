/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */
use crate::terms::{Term, Variable};
use serde::{Serialize, Deserialize};
use std::fmt;

/// Dictionary-encoded triple.
#[derive(PartialEq, Debug, Clone, Copy, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: u32,
    pub predicate: u32,
    pub object: u32,
}

/// A (subject, predicate, object) triple of terms. Ground when no position
/// holds a variable.
#[derive(PartialEq, Debug, Clone, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RdfAtom {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl RdfAtom {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self { subject, predicate, object }
    }

    pub fn terms(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    pub fn is_ground(&self) -> bool {
        self.terms().iter().all(|t| !t.is_var())
    }

    /// Distinct variables in position order.
    pub fn variables(&self) -> Vec<&Variable> {
        let mut vars: Vec<&Variable> = Vec::with_capacity(3);
        for var in self.terms().into_iter().filter_map(Term::as_variable) {
            if !vars.contains(&var) {
                vars.push(var);
            }
        }
        vars
    }
}

impl fmt::Display for RdfAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

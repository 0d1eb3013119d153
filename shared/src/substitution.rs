/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::dictionary::Dictionary;
use crate::terms::{Term, Variable};
use crate::triple::RdfAtom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Dictionary-encoded partial binding: variable -> constant identifier.
pub type IdBinding = BTreeMap<Variable, u32>;

/// One answer: each variable bound to at most one constant term.
///
/// Two substitutions are equal iff they bind exactly the same variables to
/// exactly the same constants.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Substitution {
    bindings: BTreeMap<Variable, String>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `var` to `constant`. Returns `false` and leaves the substitution
    /// unchanged when `var` is already bound to a different constant.
    pub fn bind(&mut self, var: Variable, constant: impl Into<String>) -> bool {
        let constant = constant.into();
        match self.bindings.get(&var) {
            Some(existing) => *existing == constant,
            None => {
                self.bindings.insert(var, constant);
                true
            }
        }
    }

    pub fn get(&self, var: &Variable) -> Option<&str> {
        self.bindings.get(var).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.bindings.iter().map(|(var, value)| (var, value.as_str()))
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.bindings.keys()
    }

    /// Replaces every bound variable of `atom` by its constant.
    pub fn apply(&self, atom: &RdfAtom) -> RdfAtom {
        let substitute = |term: &Term| match term {
            Term::Variable(var) => self
                .get(var)
                .map(Term::constant)
                .unwrap_or_else(|| term.clone()),
            Term::Constant(_) => term.clone(),
        };
        RdfAtom::new(
            substitute(&atom.subject),
            substitute(&atom.predicate),
            substitute(&atom.object),
        )
    }

    /// Keeps only the bindings of `vars`.
    pub fn project(&self, vars: &[Variable]) -> Substitution {
        let bindings = self
            .bindings
            .iter()
            .filter(|(var, _)| vars.contains(var))
            .map(|(var, value)| (var.clone(), value.clone()))
            .collect();
        Substitution { bindings }
    }

    /// Materializes an encoded binding. `None` if an identifier is unknown to
    /// `dictionary`.
    pub fn decode(binding: &IdBinding, dictionary: &Dictionary) -> Option<Substitution> {
        let mut bindings = BTreeMap::new();
        for (var, &id) in binding {
            bindings.insert(var.clone(), dictionary.lookup_term(id)?.to_string());
        }
        Some(Substitution { bindings })
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (var, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} -> {}", var, value)?;
        }
        f.write_str("}")
    }
}

impl<V: Into<String>> FromIterator<(Variable, V)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Variable, V)>>(iter: I) -> Self {
        let mut substitution = Substitution::new();
        for (var, value) in iter {
            substitution.bind(var, value);
        }
        substitution
    }
}

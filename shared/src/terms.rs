/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named placeholder in a triple pattern. Stored without the leading `?`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable(String);

impl Variable {
    /// Accepts both `x` and `?x`.
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Variable(name.strip_prefix('?').unwrap_or(name).to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// An RDF term as seen by callers: either a constant label (IRI, literal or
/// blank node in lexical form) or a variable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Constant(String),
    Variable(Variable),
}

impl Term {
    pub fn constant(label: impl Into<String>) -> Self {
        Term::Constant(label.into())
    }

    pub fn variable(name: impl AsRef<str>) -> Self {
        Term::Variable(Variable::new(name))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn as_constant(&self) -> Option<&str> {
        match self {
            Term::Constant(label) => Some(label),
            Term::Variable(_) => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(var) => Some(var),
            Term::Constant(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(label) => f.write_str(label),
            Term::Variable(var) => var.fmt(f),
        }
    }
}

impl From<Variable> for Term {
    fn from(var: Variable) -> Self {
        Term::Variable(var)
    }
}

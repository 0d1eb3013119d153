/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use log::trace;
use shared::dictionary::Dictionary;
use shared::index_manager::SextupleIndex;
use shared::substitution::{IdBinding, Substitution};
use shared::terms::Term;
use shared::triple::{RdfAtom, Triple};

/// Which positions of a triple pattern hold constants and which hold variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomMatchType {
    ConstConstConst,
    ConstConstVar,
    ConstVarConst,
    ConstVarVar,
    VarConstConst,
    VarConstVar,
    VarVarConst,
    VarVarVar,
}

impl AtomMatchType {
    pub fn classify(atom: &RdfAtom) -> Self {
        use AtomMatchType::*;
        match (atom.subject.is_var(), atom.predicate.is_var(), atom.object.is_var()) {
            (false, false, false) => ConstConstConst,
            (false, false, true) => ConstConstVar,
            (false, true, false) => ConstVarConst,
            (false, true, true) => ConstVarVar,
            (true, false, false) => VarConstConst,
            (true, false, true) => VarConstVar,
            (true, true, false) => VarVarConst,
            (true, true, true) => VarVarVar,
        }
    }

    /// The permutation whose leading keys are exactly the constant positions.
    pub fn permutation(self) -> &'static str {
        use AtomMatchType::*;
        match self {
            ConstConstConst | ConstConstVar | ConstVarVar | VarVarVar => "SPO",
            ConstVarConst => "SOP",
            VarConstConst => "POS",
            VarConstVar => "PSO",
            VarVarConst => "OSP",
        }
    }

    pub fn is_ground(self) -> bool {
        self == AtomMatchType::ConstConstConst
    }
}

/// Evaluates single triple patterns against a dictionary and its index.
pub struct PatternMatcher<'a> {
    dictionary: &'a Dictionary,
    index: &'a SextupleIndex,
}

impl<'a> PatternMatcher<'a> {
    pub fn new(dictionary: &'a Dictionary, index: &'a SextupleIndex) -> Self {
        PatternMatcher { dictionary, index }
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Encoded bindings of the free positions of `atom`, one per matching
    /// triple. A ground atom yields the single empty binding when stored.
    ///
    /// A constant never interned gives an empty result before the index is
    /// touched.
    pub fn match_ids(&self, atom: &RdfAtom) -> Vec<IdBinding> {
        let (Some(s), Some(p), Some(o)) = (
            self.resolve(&atom.subject),
            self.resolve(&atom.predicate),
            self.resolve(&atom.object),
        ) else {
            return Vec::new();
        };

        let match_type = AtomMatchType::classify(atom);
        trace!("{:?} {} via {}", match_type, atom, match_type.permutation());

        if match_type.is_ground() {
            return match (s, p, o) {
                (Some(subject), Some(predicate), Some(object))
                    if self.index.contains(&Triple { subject, predicate, object }) =>
                {
                    vec![IdBinding::new()]
                }
                _ => Vec::new(),
            };
        }

        let mut bindings = Vec::new();
        self.index.for_each_match(s, p, o, |triple| {
            if let Some(binding) = bind_free_positions(atom, &triple) {
                bindings.push(binding);
            }
        });
        bindings
    }

    /// Decoded form of `match_ids`.
    pub fn match_atom(&self, atom: &RdfAtom) -> Vec<Substitution> {
        self.match_ids(atom)
            .iter()
            .filter_map(|binding| Substitution::decode(binding, self.dictionary))
            .collect()
    }

    // Outer `None`: a constant the dictionary has never seen.
    fn resolve(&self, term: &Term) -> Option<Option<u32>> {
        match term {
            Term::Variable(_) => Some(None),
            Term::Constant(label) => self.dictionary.lookup_id(label).map(Some),
        }
    }
}

// A variable repeated in the pattern only matches triples whose positions agree.
fn bind_free_positions(atom: &RdfAtom, triple: &Triple) -> Option<IdBinding> {
    let ids = [triple.subject, triple.predicate, triple.object];
    let mut binding = IdBinding::new();
    for (term, id) in atom.terms().into_iter().zip(ids) {
        if let Term::Variable(var) = term {
            match binding.get(var) {
                Some(&bound) if bound != id => return None,
                Some(_) => {}
                None => {
                    binding.insert(var.clone(), id);
                }
            }
        }
    }
    Some(binding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::terms::Variable;

    fn c(label: &str) -> Term {
        Term::constant(label)
    }

    fn v(name: &str) -> Term {
        Term::variable(name)
    }

    fn build(triples: &[(&str, &str, &str)]) -> (Dictionary, SextupleIndex) {
        let mut dictionary = Dictionary::new();
        let mut index = SextupleIndex::new();
        for (s, p, o) in triples {
            let triple = Triple {
                subject: dictionary.intern(s),
                predicate: dictionary.intern(p),
                object: dictionary.intern(o),
            };
            index.insert(&triple);
        }
        (dictionary, index)
    }

    #[test]
    fn test_classify_all_cases() {
        use AtomMatchType::*;
        let cases = [
            (RdfAtom::new(c("s"), c("p"), c("o")), ConstConstConst, "SPO"),
            (RdfAtom::new(c("s"), c("p"), v("o")), ConstConstVar, "SPO"),
            (RdfAtom::new(c("s"), v("p"), c("o")), ConstVarConst, "SOP"),
            (RdfAtom::new(c("s"), v("p"), v("o")), ConstVarVar, "SPO"),
            (RdfAtom::new(v("s"), c("p"), c("o")), VarConstConst, "POS"),
            (RdfAtom::new(v("s"), c("p"), v("o")), VarConstVar, "PSO"),
            (RdfAtom::new(v("s"), v("p"), c("o")), VarVarConst, "OSP"),
            (RdfAtom::new(v("s"), v("p"), v("o")), VarVarVar, "SPO"),
        ];
        for (atom, expected, permutation) in cases {
            assert_eq!(AtomMatchType::classify(&atom), expected);
            assert_eq!(expected.permutation(), permutation);
        }
    }

    #[test]
    fn test_ground_match_is_existence_check() {
        let (dictionary, index) = build(&[("s1", "p1", "o1")]);
        let matcher = PatternMatcher::new(&dictionary, &index);

        let hit = matcher.match_atom(&RdfAtom::new(c("s1"), c("p1"), c("o1")));
        assert_eq!(hit, vec![Substitution::new()]);

        let miss = matcher.match_atom(&RdfAtom::new(c("o1"), c("p1"), c("s1")));
        assert!(miss.is_empty());
    }

    #[test]
    fn test_unknown_constant_yields_nothing() {
        let (dictionary, index) = build(&[("s1", "p1", "o1")]);
        let matcher = PatternMatcher::new(&dictionary, &index);
        assert!(matcher.match_ids(&RdfAtom::new(v("x"), c("nope"), v("y"))).is_empty());
        assert!(matcher.match_ids(&RdfAtom::new(c("nope"), c("p1"), c("o1"))).is_empty());
    }

    #[test]
    fn test_two_free_positions_walk_real_entries() {
        let (dictionary, index) = build(&[
            ("s1", "p1", "o1"),
            ("s1", "p2", "o2"),
            ("s2", "p1", "o2"),
        ]);
        let matcher = PatternMatcher::new(&dictionary, &index);
        let mut results = matcher.match_atom(&RdfAtom::new(c("s1"), v("p"), v("o")));
        results.sort();
        let expected: Vec<Substitution> = vec![
            [(Variable::new("p"), "p1"), (Variable::new("o"), "o1")].into_iter().collect(),
            [(Variable::new("p"), "p2"), (Variable::new("o"), "o2")].into_iter().collect(),
        ];
        assert_eq!(results, expected);
    }

    #[test]
    fn test_repeated_variable_requires_agreement() {
        let (dictionary, index) = build(&[("a", "knows", "a"), ("a", "knows", "b")]);
        let matcher = PatternMatcher::new(&dictionary, &index);
        let results = matcher.match_atom(&RdfAtom::new(v("x"), c("knows"), v("x")));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].get(&Variable::new("x")), Some("a"));
    }
}

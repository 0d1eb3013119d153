/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

extern crate criterion;
extern crate hexastore;

use criterion::*;
use hexastore::{HexaStore, RdfStorage, StoreConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::query::StarQuery;
use shared::terms::{Term, Variable};
use shared::triple::RdfAtom;

const SUBJECTS: usize = 5_000;
const PREDICATES: usize = 12;
const OBJECTS: usize = 2_000;
const TRIPLES: usize = 50_000;

fn synthetic_atoms(seed: u64) -> Vec<RdfAtom> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..TRIPLES)
        .map(|_| {
            RdfAtom::new(
                Term::constant(format!("<http://example.org/s{}>", rng.gen_range(0..SUBJECTS))),
                Term::constant(format!("<http://example.org/p{}>", rng.gen_range(0..PREDICATES))),
                Term::constant(format!("<http://example.org/o{}>", rng.gen_range(0..OBJECTS))),
            )
        })
        .collect()
}

fn setup_store() -> HexaStore {
    let config = StoreConfig::new()
        .expected_terms(SUBJECTS + PREDICATES + OBJECTS)
        .expected_subjects(SUBJECTS)
        .expected_predicates(PREDICATES)
        .expected_objects(OBJECTS);
    let mut store = HexaStore::with_config(config);
    store.add_all(synthetic_atoms(42));
    store
}

fn predicate(n: usize) -> Term {
    Term::constant(format!("<http://example.org/p{}>", n))
}

fn star_query(rays: usize) -> StarQuery {
    let atoms = (0..rays)
        .map(|i| RdfAtom::new(Term::variable("v0"), predicate(i), Term::variable(format!("v{}", i + 1))))
        .collect();
    StarQuery::new(format!("star{}", rays), atoms, vec![Variable::new("v0")])
}

fn store_benchmark(c: &mut Criterion) {
    let atoms = synthetic_atoms(42);

    let mut group = c.benchmark_group("load");
    group.sample_size(10);
    group.bench_function("add_all_50k", |b| {
        b.iter(|| {
            let mut store = HexaStore::new();
            store.add_all(black_box(atoms.clone()));
            store
        })
    });
    group.finish();

    let store = setup_store();
    let bound_subject = Term::constant("<http://example.org/s7>");
    let bound_object = Term::constant("<http://example.org/o7>");

    c.bench_function("match_s_p_var", |b| {
        let pattern = RdfAtom::new(bound_subject.clone(), predicate(3), Term::variable("o"));
        b.iter(|| store.match_atom(black_box(&pattern)))
    });
    c.bench_function("match_var_p_o", |b| {
        let pattern = RdfAtom::new(Term::variable("s"), predicate(3), bound_object.clone());
        b.iter(|| store.match_atom(black_box(&pattern)))
    });
    c.bench_function("match_var_p_var", |b| {
        let pattern = RdfAtom::new(Term::variable("s"), predicate(3), Term::variable("o"));
        b.iter(|| store.match_atom(black_box(&pattern)))
    });

    let mut group = c.benchmark_group("star");
    for rays in [2, 3, 4] {
        let query = star_query(rays);
        group.bench_with_input(BenchmarkId::from_parameter(rays), &query, |b, query| {
            b.iter(|| store.match_star(query))
        });
    }
    group.finish();

    let frozen = store.freeze();
    let batch: Vec<StarQuery> = (2..=4).cycle().take(30).map(star_query).collect();
    let mut group = c.benchmark_group("frozen");
    group.sample_size(10);
    group.bench_function("match_all_30", |b| b.iter(|| frozen.match_all(black_box(&batch))));
    group.finish();
}

criterion_group!(benches, store_benchmark);
criterion_main!(benches);

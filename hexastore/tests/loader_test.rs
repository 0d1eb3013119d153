/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[cfg(test)]
mod tests {
    use hexastore::loader::*;
    use hexastore::{HexaStore, LoadError, RdfStorage};
    use std::path::{Path, PathBuf};

    fn data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn test_load_sample_data() {
        let atoms = load_ntriples_file(&data_dir().join("sample_data.nt")).unwrap();
        assert_eq!(atoms.len(), 9);

        let mut store = HexaStore::new();
        let added = load_into_store(&mut store, &data_dir().join("sample_data.nt")).unwrap();
        assert_eq!(added, 8);
        assert_eq!(store.size(), 8);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_ntriples_file(&data_dir().join("does_not_exist.nt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does_not_exist.nt"));
    }

    #[test]
    fn test_query_set_files_are_sorted_and_filtered() {
        let files = query_set_files(&data_dir().join("queries")).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["knows.queryset", "names.queryset"]);

        let single = data_dir().join("queries").join("names.queryset");
        assert_eq!(query_set_files(&single).unwrap(), vec![single]);
    }

    #[test]
    fn test_load_and_evaluate_query_sets() {
        let mut store = HexaStore::new();
        load_into_store(&mut store, &data_dir().join("sample_data.nt")).unwrap();

        let queries = load_query_set_file(&data_dir().join("queries").join("knows.queryset")).unwrap();
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[0].label, "knows.queryset#1");

        let counts: Vec<usize> = queries.iter().map(|q| store.match_star(q).len()).collect();
        assert_eq!(counts, vec![3, 1, 3]);

        let names = load_query_set_file(&data_dir().join("queries").join("names.queryset")).unwrap();
        let counts: Vec<usize> = names.iter().map(|q| store.match_star(q).len()).collect();
        assert_eq!(counts, vec![3, 0]);
    }

    #[test]
    fn test_dedup_queries_keeps_first_occurrence() {
        let queries = load_query_set_file(&data_dir().join("queries").join("knows.queryset")).unwrap();
        let unique = dedup_queries(queries);
        let labels: Vec<&str> = unique.iter().map(|q| q.label.as_str()).collect();
        assert_eq!(labels, vec!["knows.queryset#1", "knows.queryset#2"]);
    }
}

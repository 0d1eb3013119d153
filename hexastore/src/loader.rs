/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::{LoadError, Result};
use crate::hexa_store::HexaStore;
use crate::parser::{parse_ntriples, parse_query_set};
use log::{debug, info};
use shared::query::StarQuery;
use shared::terms::Variable;
use shared::triple::RdfAtom;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const QUERY_SET_EXTENSION: &str = "queryset";

/// Reads and parses an N-Triples file.
pub fn load_ntriples_file(path: &Path) -> Result<Vec<RdfAtom>> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let atoms = parse_ntriples(&content)?;
    info!("Parsed {} triples from {}", atoms.len(), path.display());
    Ok(atoms)
}

/// Loads an N-Triples file into `store`, returning how many triples were new.
pub fn load_into_store(store: &mut HexaStore, path: &Path) -> Result<u64> {
    let atoms = load_ntriples_file(path)?;
    let before = store.index().len();
    store.add_all(atoms);
    let added = store.index().len() - before;
    info!(
        "Loaded {} new triples ({} terms in dictionary)",
        added,
        store.dictionary().len()
    );
    Ok(added)
}

/// Reads a query-set file. Queries are labelled after the file name.
pub fn load_query_set_file(path: &Path) -> Result<Vec<StarQuery>> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let queries = parse_query_set(&content, &source_name)?;
    info!("Parsed {} queries from {}", queries.len(), path.display());
    Ok(queries)
}

/// `path` itself when it is a file, otherwise the `.queryset` files directly
/// inside it, sorted by path.
pub fn query_set_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let entries = fs::read_dir(path).map_err(|e| LoadError::io(path, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry_path = entry.map_err(|e| LoadError::io(path, e))?.path();
        let is_query_set = entry_path
            .extension()
            .map_or(false, |ext| ext == QUERY_SET_EXTENSION);
        if entry_path.is_file() && is_query_set {
            files.push(entry_path);
        }
    }
    files.sort();
    debug!("Found {} query-set files under {}", files.len(), path.display());
    Ok(files)
}

/// Keeps the first query of every group with the same pattern, in order.
pub fn dedup_queries(queries: Vec<StarQuery>) -> Vec<StarQuery> {
    let keep: Vec<bool> = {
        let mut seen: HashSet<(&[RdfAtom], &[Variable])> = HashSet::new();
        queries
            .iter()
            .map(|query| seen.insert((query.atoms.as_slice(), query.answer_variables.as_slice())))
            .collect()
    };

    let total = queries.len();
    let unique: Vec<StarQuery> = queries
        .into_iter()
        .zip(keep)
        .filter_map(|(query, keep)| keep.then_some(query))
        .collect();
    if unique.len() < total {
        info!("Removed {} duplicate queries", total - unique.len());
    }
    unique
}

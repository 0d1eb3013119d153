/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::{Parser, ValueEnum};
use hexastore::loader::{dedup_queries, load_into_store, load_query_set_file, query_set_files};
use hexastore::{HexaStore, RdfStorage, StoreConfig};
use log::info;
use serde::Serialize;
use shared::query::StarQuery;
use shared::substitution::Substitution;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "hexastore-cli",
    version,
    author = "Volodymyr Kadzhaia <vkadzhaia@gmail.com>",
    author = "Pieter Bonte <pieter.bonte@kuleuven.be>",
    about = "Evaluate star query sets against an in-memory hexastore",
    long_about = "Loads an N-Triples file into an in-memory hexastore, freezes it, and evaluates every query of one or more WatDiv-style query sets against it, reporting the number of answers per query."
)]
struct Args {
    #[arg(short, long, help = "N-Triples file to load", value_name = "FILE")]
    data: PathBuf,

    #[arg(
        short,
        long,
        required = true,
        help = "Query-set file, or directory of .queryset files (repeatable)",
        value_name = "PATH"
    )]
    queries: Vec<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help = "Report format")]
    format: OutputFormat,

    #[arg(short, long, help = "Worker threads for query evaluation", value_name = "N")]
    threads: Option<usize>,

    #[arg(long, help = "Drop queries whose pattern already occurred")]
    dedup: bool,

    #[arg(long, help = "Print answers projected on the selected variables")]
    show_results: bool,

    #[arg(long, help = "Store configuration as JSON", value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Log at debug level")]
    verbose: bool,
}

#[derive(Serialize)]
struct QueryReport<'a> {
    label: &'a str,
    answers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<Vec<Substitution>>,
}

#[derive(Serialize)]
struct Report<'a> {
    triples: u64,
    queries: usize,
    zero_answer_queries: usize,
    load_ms: u128,
    evaluation_ms: u128,
    reports: Vec<QueryReport<'a>>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new().num_threads(threads).build_global()?;
    }

    let config = match &args.config {
        Some(path) => serde_json::from_str::<StoreConfig>(&fs::read_to_string(path)?)?,
        None => StoreConfig::default(),
    };

    let load_start = Instant::now();
    let mut store = HexaStore::with_config(config);
    load_into_store(&mut store, &args.data)?;
    let store = store.freeze();
    let load_ms = load_start.elapsed().as_millis();
    info!("Store ready: {} triples in {} ms", store.size(), load_ms);

    let mut queries: Vec<StarQuery> = Vec::new();
    for path in &args.queries {
        for file in query_set_files(path)? {
            queries.extend(load_query_set_file(&file)?);
        }
    }
    if args.dedup {
        queries = dedup_queries(queries);
    }

    let eval_start = Instant::now();
    let answers = store.match_all(&queries);
    let evaluation_ms = eval_start.elapsed().as_millis();
    info!("Evaluated {} queries in {} ms", queries.len(), evaluation_ms);

    let reports: Vec<QueryReport> = queries
        .iter()
        .zip(answers)
        .map(|(query, results)| QueryReport {
            label: &query.label,
            answers: results.len(),
            results: args.show_results.then(|| {
                results
                    .iter()
                    .map(|result| result.project(&query.answer_variables))
                    .collect()
            }),
        })
        .collect();

    let report = Report {
        triples: store.size(),
        queries: reports.len(),
        zero_answer_queries: reports.iter().filter(|r| r.answers == 0).count(),
        load_ms,
        evaluation_ms,
        reports,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }
    Ok(())
}

fn print_text(report: &Report) {
    for query in &report.reports {
        println!("{}\t{}", query.label, query.answers);
        for result in query.results.iter().flatten() {
            println!("  {}", result);
        }
    }
    println!(
        "{} queries over {} triples, {} without answers (load {} ms, evaluation {} ms)",
        report.queries, report.triples, report.zero_answer_queries, report.load_ms, report.evaluation_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["hexastore-cli", "--data", "d.nt", "-q", "a.queryset", "-q", "dir"]).unwrap();
        assert_eq!(args.data, PathBuf::from("d.nt"));
        assert_eq!(args.queries.len(), 2);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.threads.is_none());
        assert!(!args.dedup && !args.show_results && !args.verbose);
    }

    #[test]
    fn test_queries_are_required() {
        assert!(Args::try_parse_from(["hexastore-cli", "--data", "d.nt"]).is_err());
    }

    #[test]
    fn test_json_report_shape() {
        let report = Report {
            triples: 2,
            queries: 1,
            zero_answer_queries: 0,
            load_ms: 1,
            evaluation_ms: 1,
            reports: vec![QueryReport { label: "q#1", answers: 2, results: None }],
        };
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["reports"][0]["label"], "q#1");
        assert!(json["reports"][0].get("results").is_none());
    }
}

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
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, tag_no_case, take_while, take_while1},
    character::complete::{alpha1, alphanumeric1, char, multispace1, not_line_ending, one_of, space0},
    combinator::{all_consuming, map, opt, recognize, value},
    error::{Error as NomError, ErrorKind},
    multi::{many0, many1},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};
use rayon::prelude::*;
use shared::query::StarQuery;
use shared::terms::{Term, Variable};
use shared::triple::RdfAtom;

// Parser for an IRI within angle brackets, kept with its brackets
pub fn parse_iri(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('<'),
        take_while(|c: char| c != '>' && !c.is_whitespace()),
        char('>'),
    )))(input)
}

// Parser for a blank node label like _:b0
pub fn parse_blank_node(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        tag("_:"),
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
    ))(input)
}

fn string_body(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((
        is_not("\\\""),
        recognize(pair(char('\\'), one_of("tbnrf\"'\\uU"))),
    ))))(input)
}

fn language_tag(input: &str) -> IResult<&str, &str> {
    recognize(tuple((char('@'), alpha1, many0(pair(char('-'), alphanumeric1)))))(input)
}

fn datatype(input: &str) -> IResult<&str, &str> {
    recognize(pair(tag("^^"), parse_iri))(input)
}

// Parser for a literal with optional language tag or datatype, in lexical form
pub fn parse_literal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('"'),
        string_body,
        char('"'),
        opt(alt((language_tag, datatype))),
    )))(input)
}

// Parser for variables (e.g., ?v0)
pub fn parse_variable(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        char('?'),
        take_while1(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('#'), not_line_ending))(input)
}

// Whitespace and comments between tokens
fn ws(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((multispace1, comment))))(input)
}

fn constant<'a>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, &'a str>,
) -> impl FnMut(&'a str) -> IResult<&'a str, Term> {
    map(parser, |label: &str| Term::constant(label))
}

fn ntriples_statement(input: &str) -> IResult<&str, RdfAtom> {
    let (input, subject) = constant(alt((parse_iri, parse_blank_node)))(input)?;
    let (input, _) = space0(input)?;
    let (input, predicate) = constant(parse_iri)(input)?;
    let (input, _) = space0(input)?;
    let (input, object) = constant(alt((parse_iri, parse_blank_node, parse_literal)))(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char('.')(input)?;
    Ok((input, RdfAtom::new(subject, predicate, object)))
}

/// Parses one N-Triples line. Blank and comment-only lines yield `None`.
pub fn parse_ntriples_line(input: &str) -> IResult<&str, Option<RdfAtom>> {
    let (input, _) = space0(input)?;
    if input.is_empty() || input.starts_with('#') {
        let (input, _) = opt(comment)(input)?;
        return Ok((input, None));
    }
    let (input, atom) = ntriples_statement(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = opt(comment)(input)?;
    Ok((input, Some(atom)))
}

/// Parses a whole N-Triples document, lines in parallel. The first malformed
/// line, in document order, is reported.
pub fn parse_ntriples(input: &str) -> Result<Vec<RdfAtom>> {
    let lines: Vec<(usize, &str)> = input.lines().enumerate().collect();
    let parsed: Vec<Result<Option<RdfAtom>>> = lines
        .par_iter()
        .map(|&(number, line)| {
            all_consuming(parse_ntriples_line)(line)
                .map(|(_, atom)| atom)
                .map_err(|err| LoadError::Syntax {
                    line: number + 1,
                    message: describe_line_error(line, err),
                })
        })
        .collect();

    let mut atoms = Vec::with_capacity(parsed.len());
    for result in parsed {
        if let Some(atom) = result? {
            atoms.push(atom);
        }
    }
    Ok(atoms)
}

fn query_term(input: &str) -> IResult<&str, Term> {
    alt((
        map(parse_variable, |name: &str| Term::variable(name)),
        constant(alt((parse_iri, parse_literal, parse_blank_node))),
    ))(input)
}

fn triple_pattern(input: &str) -> IResult<&str, RdfAtom> {
    let (input, subject) = query_term(input)?;
    let (input, _) = ws(input)?;
    let (input, predicate) = query_term(input)?;
    let (input, _) = ws(input)?;
    let (input, object) = query_term(input)?;
    Ok((input, RdfAtom::new(subject, predicate, object)))
}

// `None` stands for `SELECT *`
fn projection(input: &str) -> IResult<&str, Option<Vec<Variable>>> {
    alt((
        value(None, preceded(ws, char('*'))),
        map(many1(preceded(ws, map(parse_variable, |name: &str| Variable::new(name)))), Some),
    ))(input)
}

fn select_query(input: &str) -> IResult<&str, (Option<Vec<Variable>>, Vec<RdfAtom>)> {
    let (input, _) = tag_no_case("SELECT")(input)?;
    let (input, projection) = projection(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = tag_no_case("WHERE")(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char('{')(input)?;
    let (input, _) = ws(input)?;
    let (input, atoms) = many0(terminated(
        triple_pattern,
        tuple((ws, opt(char('.')), ws)),
    ))(input)?;
    let (input, _) = char('}')(input)?;
    Ok((input, (projection, atoms)))
}

/// Parses a query set: a sequence of `SELECT ... WHERE { ... }` blocks.
/// Queries are labelled `<source_name>#<n>`, counting from 1.
pub fn parse_query_set(input: &str, source_name: &str) -> Result<Vec<StarQuery>> {
    let to_error = |err| query_error(input, source_name, err);
    let (mut rest, _) = ws(input).map_err(to_error)?;

    let mut queries = Vec::new();
    while !rest.is_empty() {
        let (after, (projection, atoms)) = select_query(rest).map_err(to_error)?;
        let (after, _) = ws(after).map_err(to_error)?;

        let label = format!("{}#{}", source_name, queries.len() + 1);
        let mut query = StarQuery::new(label, atoms, Vec::new());
        query.answer_variables = match projection {
            Some(variables) => variables,
            None => query.variables().into_iter().cloned().collect(),
        };
        queries.push(query);
        rest = after;
    }
    Ok(queries)
}

fn query_error(input: &str, source_name: &str, err: nom::Err<NomError<&str>>) -> LoadError {
    LoadError::Query {
        source_name: source_name.to_string(),
        message: format_parse_error(input, err),
    }
}

/// Renders a nom failure with its line, column and a caret under the
/// offending character.
pub fn format_parse_error(input: &str, err: nom::Err<NomError<&str>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let (line_no, col_no) = locate(input, e.input);
            let error_line = input.lines().nth(line_no - 1).unwrap_or("[end of input]");
            format!(
                "\nSyntax error at line {}, column {}{}:\n{}\n{}^ Here\n",
                line_no,
                col_no,
                error_description(e.code),
                error_line,
                " ".repeat(col_no - 1)
            )
        }
        nom::Err::Incomplete(_) => {
            "Incomplete input: the parser needs more input to complete parsing".to_string()
        }
    }
}

fn describe_line_error(line: &str, err: nom::Err<NomError<&str>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let (_, col_no) = locate(line, e.input);
            format!(
                "column {}{}\n{}\n{}^ Here",
                col_no,
                error_description(e.code),
                line,
                " ".repeat(col_no - 1)
            )
        }
        nom::Err::Incomplete(_) => "incomplete statement".to_string(),
    }
}

// 1-based line and column of `remaining` within `input`
fn locate(input: &str, remaining: &str) -> (usize, usize) {
    let offset = input.len().saturating_sub(remaining.len());
    let mut line_no = 1;
    let mut col_no = 1;
    for (i, c) in input.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_no += 1;
            col_no = 1;
        } else {
            col_no += 1;
        }
    }
    (line_no, col_no)
}

fn error_description(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Tag => ". Expected a keyword",
        ErrorKind::Char => ". Expected a specific character",
        ErrorKind::Alt => ". Expected a term",
        ErrorKind::Eof => ". Expected end of statement",
        _ => "",
    }
}

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
    use hexastore::parser::*;
    use hexastore::LoadError;
    use shared::terms::{Term, Variable};
    use shared::triple::RdfAtom;

    #[test]
    fn test_parse_ntriples_line() {
        let line = r#"<http://example.org/a> <http://example.org/p> "x"@en . # trailing"#;
        let (rest, atom) = parse_ntriples_line(line).unwrap();
        assert_eq!(rest, "");
        assert_eq!(
            atom,
            Some(RdfAtom::new(
                Term::constant("<http://example.org/a>"),
                Term::constant("<http://example.org/p>"),
                Term::constant("\"x\"@en"),
            ))
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_ntriples_line(""), Ok(("", None)));
        assert_eq!(parse_ntriples_line("   "), Ok(("", None)));
        assert_eq!(parse_ntriples_line("# just a comment"), Ok(("", None)));
    }

    #[test]
    fn test_parse_ntriples_document() {
        let doc = "\
<http://a> <http://p> <http://b> .
# comment

_:n1 <http://p> \"lit\"^^<http://www.w3.org/2001/XMLSchema#string> .
<http://a><http://p><http://c>.
";
        let atoms = parse_ntriples(doc).unwrap();
        assert_eq!(atoms.len(), 3);
        assert_eq!(atoms[1].subject, Term::constant("_:n1"));
        assert_eq!(
            atoms[1].object,
            Term::constant("\"lit\"^^<http://www.w3.org/2001/XMLSchema#string>")
        );
        assert_eq!(atoms[2].object, Term::constant("<http://c>"));
    }

    #[test]
    fn test_ntriples_syntax_error_reports_line() {
        let doc = "<http://a> <http://p> <http://b> .\n<http://a> \"not a predicate\" <http://b> .\n";
        match parse_ntriples(doc) {
            Err(LoadError::Syntax { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.starts_with("column 12"));
                assert!(message.contains("^ Here"));
            }
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_earliest_malformed_line_is_reported() {
        let mut doc = String::new();
        for i in 0..200 {
            doc.push_str(&format!("<http://s{}> <http://p> <http://o> .\n", i));
        }
        doc.push_str("<http://s> <http://p> .\n");
        for i in 0..200 {
            doc.push_str(&format!("<http://t{}> <http://p> <http://o> .\n", i));
        }
        doc.push_str("<http://s> <http://p> <http://o>\n");

        match parse_ntriples(&doc) {
            Err(LoadError::Syntax { line, .. }) => assert_eq!(line, 201),
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_final_dot_is_an_error() {
        assert!(matches!(
            parse_ntriples("<http://a> <http://p> <http://b>"),
            Err(LoadError::Syntax { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_query_set() {
        let input = "
SELECT ?v0 WHERE {
    ?v0 <http://p1> ?v1 .
    ?v0 <http://p2> \"x\" .
}
# second query, last dot omitted
select * where { ?v0 <http://p3> <http://o> }
";
        let queries = parse_query_set(input, "watdiv.queryset").unwrap();
        assert_eq!(queries.len(), 2);

        assert_eq!(queries[0].label, "watdiv.queryset#1");
        assert_eq!(queries[0].answer_variables, vec![Variable::new("v0")]);
        assert_eq!(queries[0].atoms.len(), 2);
        assert_eq!(queries[0].atoms[1].object, Term::constant("\"x\""));

        assert_eq!(queries[1].label, "watdiv.queryset#2");
        assert_eq!(queries[1].answer_variables, vec![Variable::new("v0")]);
        assert_eq!(queries[1].atoms[0].object, Term::constant("<http://o>"));
    }

    #[test]
    fn test_empty_query_set() {
        assert!(parse_query_set("  \n# nothing here\n", "empty").unwrap().is_empty());
    }

    #[test]
    fn test_query_syntax_error_has_caret() {
        let input = "SELECT ?v0 WHERE {\n  ?v0 <http://p> ?v1 .\n";
        match parse_query_set(input, "broken") {
            Err(LoadError::Query { source_name, message }) => {
                assert_eq!(source_name, "broken");
                assert!(message.contains("Syntax error at line 3"));
                assert!(message.contains("^ Here"));
            }
            other => panic!("expected a query error, got {:?}", other),
        }
    }
}

//! N-Triples serializer for statement collections.

use crate::model::{Statement, Term};

/// Serializes a statement collection to an N-Triples document, one
/// statement per line, absolute IRIs throughout.
#[must_use]
pub fn to_ntriples(statements: &[Statement]) -> String {
    let mut out = String::with_capacity(statements.len() * 128);
    for statement in statements {
        out.push('<');
        out.push_str(&statement.subject);
        out.push_str("> <");
        out.push_str(&statement.predicate);
        out.push_str("> ");
        out.push_str(&object(&statement.object));
        out.push_str(" .\n");
    }
    out
}

fn object(term: &Term) -> String {
    match term {
        Term::Iri(value) => format!("<{value}>"),
        Term::Plain(value) => format!("\"{}\"", escape(value)),
        Term::Lang(value, tag) => format!("\"{}\"@{tag}", escape(value)),
        Term::Typed(value, datatype) => format!("\"{}\"^^<{datatype}>", escape(value)),
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{iris, Term};

    #[test]
    fn every_line_ends_with_a_period() {
        let statements = vec![
            Statement::new("http://example.org/a", iris::RDF_TYPE, Term::iri(iris::PC_CONTRACT)),
            Statement::new("http://example.org/a", iris::RDFS_LABEL, Term::lang("Lavori", "it")),
        ];
        let nt = to_ntriples(&statements);
        assert_eq!(nt.lines().count(), 2);
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "missing terminator: {line}");
        }
    }

    #[test]
    fn literal_forms() {
        let nt = to_ntriples(&[
            Statement::new("http://e/s", "http://e/p", Term::plain("v")),
            Statement::new("http://e/s", "http://e/p", Term::lang("testo", "it")),
            Statement::new("http://e/s", "http://e/p", Term::typed("1.5", iris::XSD_FLOAT)),
        ]);
        let lines: Vec<_> = nt.lines().collect();
        assert_eq!(lines[0], "<http://e/s> <http://e/p> \"v\" .");
        assert_eq!(lines[1], "<http://e/s> <http://e/p> \"testo\"@it .");
        assert_eq!(
            lines[2],
            "<http://e/s> <http://e/p> \"1.5\"^^<http://www.w3.org/2001/XMLSchema#float> ."
        );
    }

    #[test]
    fn quotes_backslashes_and_newlines_are_escaped() {
        let nt = to_ntriples(&[Statement::new(
            "http://e/s",
            "http://e/p",
            Term::plain("a \"b\" \\ c\nd"),
        )]);
        assert_eq!(
            nt,
            "<http://e/s> <http://e/p> \"a \\\"b\\\" \\\\ c\\nd\" .\n"
        );
    }

    #[test]
    fn empty_collection_serializes_to_an_empty_document() {
        assert_eq!(to_ntriples(&[]), "");
    }
}

//! Static procedure-type taxonomy.
//!
//! Maps the Italian procedure-type labels published in the source records to
//! the broader procedure categories of the public-contracts ontology. The
//! table is fixed at build time; its statement block is emitted once per
//! run, independent of how many records are processed.

use crate::model::{iris, uri, Statement, Term};

/// One taxonomy row: a source label and its broader category IRI.
#[derive(Debug, Clone, Copy)]
pub struct ProcedureType {
    /// The label as it appears in the `sceltaContraente` field.
    pub label: &'static str,
    /// IRI of the broader procedure category; empty when the row has none.
    pub broader: &'static str,
}

const PT_OPEN: &str = "http://purl.org/procurement/public-contracts-procedure-types#Open";
const PT_RESTRICTED: &str =
    "http://purl.org/procurement/public-contracts-procedure-types#Restricted";
const PT_NEGOTIATED: &str =
    "http://purl.org/procurement/public-contracts-procedure-types#Negotiated";
const PT_COMPETITIVE_DIALOGUE: &str =
    "http://purl.org/procurement/public-contracts-procedure-types#CompetitiveDialogue";
const PT_NEGOTIATED_WITHOUT_COMPETITION: &str =
    "http://purl.org/procurement/public-contracts-procedure-types#NegotiatedWithoutCompetition";
const PT_AWARD_WITHOUT_PRIOR_PUBLICATION: &str =
    "http://purl.org/procurement/public-contracts-procedure-types#AwardWithoutPriorPublication";
const PT_SPECIAL: &str =
    "http://public-contracts.nexacenter.org/id/public-contracts-procedure-types#Special";

/// The 18 procedure-type rows, as enumerated by the national publication
/// rules. Labels are verbatim source values (including their spacing).
pub const PROCEDURE_TYPES: [ProcedureType; 18] = [
    ProcedureType {
        label: "01-PROCEDURA APERTA",
        broader: PT_OPEN,
    },
    ProcedureType {
        label: "02-PROCEDURA RISTRETTA",
        broader: PT_RESTRICTED,
    },
    ProcedureType {
        label: "21-PROCEDURA RISTRETTA DERIVANTE DA AVVISI CON CUI SI INDICE LA GARA",
        broader: PT_RESTRICTED,
    },
    ProcedureType {
        label: "22-PROCEDURA NEGOZIATA DERIVANTE DA AVVISI CON CUI SI INDICE LA GARA",
        broader: PT_RESTRICTED,
    },
    ProcedureType {
        label: "07-SISTEMA DINAMICO DI ACQUISIZIONE",
        broader: PT_RESTRICTED,
    },
    ProcedureType {
        label: "03-PROCEDURA NEGOZIATA PREVIA PUBBLICAZIONE DEL BANDO",
        broader: PT_NEGOTIATED,
    },
    ProcedureType {
        label: "04-PROCEDURA NEGOZIATA SENZA PREVIA PUBBLICAZIONE DEL BANDO",
        broader: PT_NEGOTIATED,
    },
    ProcedureType {
        label: "05-DIALOGO COMPETITIVO",
        broader: PT_COMPETITIVE_DIALOGUE,
    },
    ProcedureType {
        label: "27-CONFRONTO COMPETITIVO IN ADESIONE AD ACCORDO QUADRO/CONVENZIONE",
        broader: PT_COMPETITIVE_DIALOGUE,
    },
    ProcedureType {
        label: "06-PROCEDURA NEGOZIATA SENZA PREVIA INDIZIONE DI  GARA ART. 221 D.LGS. 163/2006",
        broader: PT_NEGOTIATED_WITHOUT_COMPETITION,
    },
    ProcedureType {
        label: "08-AFFIDAMENTO IN ECONOMIA - COTTIMO FIDUCIARIO",
        broader: PT_AWARD_WITHOUT_PRIOR_PUBLICATION,
    },
    ProcedureType {
        label: "23-AFFIDAMENTO IN ECONOMIA - AFFIDAMENTO DIRETTO",
        broader: PT_AWARD_WITHOUT_PRIOR_PUBLICATION,
    },
    ProcedureType {
        label: "24-AFFIDAMENTO DIRETTO A SOCIETA' IN HOUSE",
        broader: PT_AWARD_WITHOUT_PRIOR_PUBLICATION,
    },
    ProcedureType {
        label: "25-AFFIDAMENTO DIRETTO A SOCIETA' RAGGRUPPATE/CONSORZIATE O CONTROLLATE NELLE CONCESSIONI DI LL.PP",
        broader: PT_AWARD_WITHOUT_PRIOR_PUBLICATION,
    },
    ProcedureType {
        label: "26-AFFIDAMENTO DIRETTO IN ADESIONE AD ACCORDO QUADRO/CONVENZIONE",
        broader: PT_AWARD_WITHOUT_PRIOR_PUBLICATION,
    },
    ProcedureType {
        label: "17-AFFIDAMENTO DIRETTO EX ART. 5 DELLA LEGGE N.381/91",
        broader: PT_AWARD_WITHOUT_PRIOR_PUBLICATION,
    },
    ProcedureType {
        label: "14-PROCEDURA SELETTIVA EX ART 238 C.7, D.LGS. 163/2006",
        broader: PT_SPECIAL,
    },
    ProcedureType {
        label: "28-PROCEDURA AI SENSI DEI REGOLAMENTI DEGLI ORGANI COSTITUZIONALI",
        broader: PT_SPECIAL,
    },
];

/// Emits the full taxonomy block.
///
/// Per row: a `skos:narrower` link to the broader category (when the row has
/// one), a second `skos:narrower` link to the DBpedia property placeholder,
/// and the Italian label.
#[must_use]
pub fn statements() -> Vec<Statement> {
    let mut out = Vec::with_capacity(PROCEDURE_TYPES.len() * 3);
    for row in &PROCEDURE_TYPES {
        let subject = uri::procedure_type(row.label);
        if !row.broader.is_empty() {
            out.push(Statement::new(
                &subject,
                iris::SKOS_NARROWER,
                Term::iri(row.broader),
            ));
        }
        out.push(Statement::new(
            &subject,
            iris::SKOS_NARROWER,
            Term::iri(iris::DBO_PROPERTY),
        ));
        out.push(Statement::new(
            subject,
            iris::RDFS_LABEL,
            Term::lang(row.label, "it"),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighteen_rows() {
        assert_eq!(PROCEDURE_TYPES.len(), 18);
    }

    #[test]
    fn every_row_carries_a_broader_category() {
        // All current rows have one; the builder still gates on it so a
        // future row without a category stays well-formed.
        assert!(PROCEDURE_TYPES.iter().all(|row| !row.broader.is_empty()));
    }

    #[test]
    fn statement_block_shape() {
        let block = statements();
        assert_eq!(block.len(), 18 * 3);
        let labels = block
            .iter()
            .filter(|s| s.predicate == iris::RDFS_LABEL)
            .count();
        assert_eq!(labels, 18);
    }

    #[test]
    fn subjects_are_slugged_procedure_type_uris() {
        let block = statements();
        assert!(block.iter().all(|s| s
            .subject
            .starts_with("http://public-contracts.nexacenter.org/id/procedureTypes/")));
        assert!(block
            .iter()
            .any(|s| s.subject.ends_with("procedureTypes/01procedura_aperta")));
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(statements(), statements());
    }
}

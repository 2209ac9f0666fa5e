//! Participant and winner statement builders.
//!
//! Winners and plain participants share one positional scan and one tender
//! builder; the winner flag only adds the award statements on top of the
//! shared set.

use serde_json::Value;

use super::{group, Contract};
use crate::document;
use crate::model::{iris, uri, Statement, Term};
use crate::resolver::{self, Identity};

/// Scans a winners or participants array.
///
/// The two shapes are independent, not mutually exclusive: an entry tagged
/// as an individual participant runs the tender path, an entry carrying a
/// nested `raggruppamento` runs the group path, and an entry can run both.
/// Group tenders never carry the winner flag, even from the winners scan.
#[must_use]
pub fn scan(entries: &[Value], contract: &Contract<'_>, is_winner: bool) -> Vec<Statement> {
    let mut out = Vec::new();
    for entry in entries {
        if document::text(entry, "type") == "partecipante" {
            out.extend(tender_statements(entry, contract, is_winner));
        }
        if let Some(members) = entry.get("raggruppamento").and_then(Value::as_array) {
            let group_id = document::text(entry, "groupHash");
            out.extend(group::statements(members, contract, &group_id, false));
        }
    }
    out
}

/// Builds the tender and business-entity statements for one individual
/// participant entry.
#[must_use]
pub fn tender_statements(
    entry: &Value,
    contract: &Contract<'_>,
    is_winner: bool,
) -> Vec<Statement> {
    let identity = resolver::resolve(entry);
    let mut out = single_participant(entry, &identity);

    let tender = uri::tender(contract.cig_uri, &identity.key);
    out.push(Statement::new(
        &tender,
        iris::RDFS_LABEL,
        Term::lang(
            format!(
                "CIG: {} - Identificativo offerente: {}",
                contract.cig, identity.key
            ),
            "it",
        ),
    ));

    if is_winner {
        out.push(Statement::new(
            &tender,
            iris::RDFS_LABEL,
            Term::lang(
                format!(
                    "CIG: {} - Identificativo aggiudicatario: {}",
                    contract.cig, identity.key
                ),
                "it",
            ),
        ));
        out.push(Statement::new(
            contract.subject,
            iris::PC_AWARDED_TENDER,
            Term::iri(&tender),
        ));
    }

    out.push(Statement::new(
        &tender,
        iris::RDF_TYPE,
        Term::iri(iris::PC_TENDER),
    ));
    out.push(Statement::new(
        contract.subject,
        iris::PC_HAS_TENDER,
        Term::iri(&tender),
    ));
    out.push(Statement::new(
        tender,
        iris::PC_BIDDER,
        Term::iri(uri::business_entity(&identity.key)),
    ));

    out
}

/// Builds the statements describing the business entity itself, shared by
/// the individual-participant path and the group-member iteration.
///
/// Nationality is published for domestic entities only. When the
/// anonymization hash stands in for the identity, the entity gets the
/// not-a-valid-identifier label instead of a VAT identifier.
#[must_use]
pub fn single_participant(entry: &Value, identity: &Identity) -> Vec<Statement> {
    let mut out = Vec::new();
    let entity = uri::business_entity(&identity.key);

    if identity.is_domestic {
        out.push(Statement::new(
            &entity,
            iris::DBO_COUNTRY,
            Term::iri(iris::DBR_ITALY),
        ));
    }
    // Foreign entities, nationality-bearing or not, get no country
    // statement; `has_nationality` only records whether one could be
    // derived at all.

    if !document::text(entry, "companyHash").is_empty() {
        out.push(Statement::new(
            &entity,
            iris::RDFS_LABEL,
            Term::lang("Codice fiscale assente o non valido", "it"),
        ));
    } else {
        let domestic = document::text(entry, "codiceFiscale");
        if !domestic.is_empty() {
            out.push(Statement::new(
                &entity,
                iris::GR_VAT_ID,
                Term::plain(domestic),
            ));
        } else {
            let foreign = document::text(entry, "identificativoFiscaleEstero");
            if !foreign.is_empty() {
                out.push(Statement::new(
                    &entity,
                    iris::GR_VAT_ID,
                    Term::plain(foreign),
                ));
            }
        }
    }

    out.push(Statement::new(
        entity,
        iris::RDF_TYPE,
        Term::iri(iris::GR_BUSINESS_ENTITY),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SUBJECT: &str =
        "http://public-contracts.nexacenter.org/id/public_contracts/5128833EDE";

    fn contract() -> Contract<'static> {
        Contract {
            subject: SUBJECT,
            cig: "5128833EDE",
            cig_uri: "5128833EDE",
        }
    }

    #[test]
    fn winner_adds_award_statements_without_duplicating_shared_ones() {
        let entry = json!({
            "codiceFiscale": "01015600057",
            "type": "partecipante",
        });
        let plain = tender_statements(&entry, &contract(), false);
        let winner = tender_statements(&entry, &contract(), true);

        // The winner set is the shared set plus one extra label and the
        // award relation.
        assert_eq!(winner.len(), plain.len() + 2);
        assert!(winner
            .iter()
            .any(|s| s.predicate == iris::PC_AWARDED_TENDER));
        assert!(!plain.iter().any(|s| s.predicate == iris::PC_AWARDED_TENDER));
        for statement in &plain {
            assert!(winner.contains(statement));
        }
    }

    #[test]
    fn missing_identifier_yields_empty_uri_segments() {
        let entry = json!({ "ragioneSociale": "Sconosciuta", "type": "partecipante" });
        let out = tender_statements(&entry, &contract(), false);
        assert!(out.iter().any(|s| {
            s.predicate == iris::PC_BIDDER
                && s.object
                    == Term::iri("http://public-contracts.nexacenter.org/id/businessEntities/")
        }));
        assert!(out
            .iter()
            .any(|s| s.subject.ends_with("tenders/5128833ede_")));
    }

    #[test]
    fn hashed_entity_gets_the_invalid_identifier_label_and_no_vat_id() {
        let entry = json!({ "companyHash": "AbC123" });
        let identity = resolver::resolve(&entry);
        let out = single_participant(&entry, &identity);
        assert!(out.iter().any(|s| s.predicate == iris::RDFS_LABEL
            && s.object == Term::lang("Codice fiscale assente o non valido", "it")));
        assert!(!out.iter().any(|s| s.predicate == iris::GR_VAT_ID));
        assert!(!out.iter().any(|s| s.predicate == iris::DBO_COUNTRY));
    }

    #[test]
    fn hash_with_domestic_code_still_suppresses_the_country_statement() {
        // Documented quirk: the hash keys the entity, the fiscal code keeps
        // nationality determinable, yet no country statement is published
        // because the entity is not treated as domestic.
        let entry = json!({ "companyHash": "AbC123", "codiceFiscale": "01015600057" });
        let identity = resolver::resolve(&entry);
        assert!(identity.has_nationality);
        let out = single_participant(&entry, &identity);
        assert!(!out.iter().any(|s| s.predicate == iris::DBO_COUNTRY));
        assert!(out
            .iter()
            .any(|s| s.subject.ends_with("businessEntities/abc123")));
    }

    #[test]
    fn vat_id_falls_back_to_the_foreign_identifier() {
        let entry = json!({ "identificativoFiscaleEstero": "DE-777" });
        let identity = resolver::resolve(&entry);
        let out = single_participant(&entry, &identity);
        assert!(out.iter().any(|s| s.predicate == iris::GR_VAT_ID
            && s.object == Term::plain("DE-777")));
        assert!(!out.iter().any(|s| s.predicate == iris::DBO_COUNTRY));
    }

    #[test]
    fn exactly_one_type_statement_per_entity() {
        let entry = json!({ "codiceFiscale": "01015600057" });
        let identity = resolver::resolve(&entry);
        let out = single_participant(&entry, &identity);
        let types = out
            .iter()
            .filter(|s| s.predicate == iris::RDF_TYPE)
            .count();
        assert_eq!(types, 1);
    }

    #[test]
    fn entry_can_be_both_individual_and_group() {
        let entries = vec![json!({
            "type": "partecipante",
            "codiceFiscale": "01015600057",
            "groupHash": "g1",
            "raggruppamento": [
                { "codiceFiscale": "04187501004", "ruolo": "02-MANDATARIA" }
            ],
        })];
        let out = scan(&entries, &contract(), false);
        // Individual tender and group tender both present.
        assert!(out
            .iter()
            .any(|s| s.subject.ends_with("tenders/5128833ede_01015600057")));
        assert!(out
            .iter()
            .any(|s| s.subject.ends_with("tenders/5128833ede_group_g1")));
    }

    #[test]
    fn group_in_winners_scan_is_not_awarded() {
        let entries = vec![json!({
            "groupHash": "g1",
            "raggruppamento": [
                { "codiceFiscale": "04187501004", "ruolo": "02-MANDATARIA" }
            ],
        })];
        let out = scan(&entries, &contract(), true);
        assert!(!out.iter().any(|s| s.predicate == iris::PC_AWARDED_TENDER));
    }
}

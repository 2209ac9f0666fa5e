//! Contract statement builder.
//!
//! Builds the full statement set for one procurement record: the contract
//! resource itself, its optional payment and completion-time blocks, the
//! winners and participants (via the participant scan), and the contracting
//! authority.

use serde_json::Value;

use super::{participant, Contract};
use crate::document;
use crate::model::{iris, uri, Statement, Term};

/// Builds every statement for one parsed procurement record.
#[must_use]
pub fn statements(record: &Value) -> Vec<Statement> {
    let mut out = Vec::new();

    let year = document::text(record, "annoRiferimento");

    let cig = {
        let value = document::text(record, "cig");
        if value.is_empty() {
            "Missing cig".to_owned()
        } else {
            value
        }
    };
    let cig_valid = document::text(record, "cigValid") == "true";
    let cig_uri = if cig_valid {
        cig.clone()
    } else {
        document::text(record, "cigHash")
    };

    let subject = uri::contract(&cig_uri);
    let contract = Contract {
        subject: &subject,
        cig: &cig,
        cig_uri: &cig_uri,
    };

    // Source validation errors are republished as opaque literals. Null
    // entries are skipped rather than terminating the scan.
    if let Some(errors) = record.get("errors").and_then(Value::as_array) {
        for error in errors.iter().filter(|e| !e.is_null()) {
            out.push(Statement::new(
                &subject,
                uri::property("error"),
                Term::plain(document::json_text(error)),
            ));
        }
    }

    let processing_date = document::text(record, "dataDiElaborazione");
    if !processing_date.is_empty() {
        out.push(Statement::new(
            &subject,
            uri::property("processingDate"),
            Term::plain(processing_date),
        ));
    }

    let oggetto = document::text(record, "oggetto");
    out.push(Statement::new(
        &subject,
        iris::RDFS_LABEL,
        Term::lang(&oggetto, "it"),
    ));
    out.push(Statement::new(
        &subject,
        iris::DCTERMS_SOURCE,
        Term::plain(document::text(record, "urlFile")),
    ));
    out.push(Statement::new(
        &subject,
        iris::RDF_TYPE,
        Term::iri(iris::PC_CONTRACT),
    ));

    let identifier = if cig_valid {
        cig.clone()
    } else {
        format!("{cig} (not valid)")
    };
    out.push(Statement::new(
        &subject,
        iris::DCTERMS_IDENTIFIER,
        Term::plain(identifier),
    ));
    out.push(Statement::new(
        &subject,
        iris::DCTERMS_DESCRIPTION,
        Term::lang(oggetto, "it"),
    ));

    // The price is always published, even when empty or malformed; the
    // numeric validity of the value is the source's responsibility.
    out.push(Statement::new(
        &subject,
        iris::PC_AGREED_PRICE,
        Term::typed(
            document::text(record, "importoAggiudicazione"),
            iris::XSD_FLOAT,
        ),
    ));

    let original_price = document::text(record, "importoAggiudicazioneOriginale");
    if !original_price.is_empty() {
        out.push(Statement::new(
            &subject,
            uri::property("originalAgreedPrice"),
            Term::plain(original_price),
        ));
    }

    let procedure = document::text(record, "sceltaContraente");
    if !procedure.is_empty() {
        out.push(Statement::new(
            &subject,
            iris::PC_PROCEDURE_TYPE,
            Term::iri(uri::procedure_type(&procedure)),
        ));
    }

    // Tracks errors in the procedure-type values.
    let procedure_error = document::text(record, "sceltaContraenteOriginal");
    if !procedure_error.is_empty() {
        let property = uri::property("procedureTypeError");
        out.push(Statement::new(
            &subject,
            &property,
            Term::plain(procedure_error),
        ));
        out.push(Statement::new(
            property,
            iris::RDFS_LABEL,
            Term::lang("Valore originale del campo sceltaContraente", "it"),
        ));
    }

    let liquidated = document::text(record, "importoSommeLiquidate");
    if !liquidated.is_empty() {
        out.extend(payment_statements(&subject, &cig_uri, &year, &liquidated));
    }

    // Upstream reuses the originalAgreedPrice property for the original
    // liquidated sum.
    let original_liquidated = document::text(record, "importoSommeLiquidateOriginal");
    if !original_liquidated.is_empty() {
        out.push(Statement::new(
            &subject,
            uri::property("originalAgreedPrice"),
            Term::plain(original_liquidated),
        ));
    }

    if let Some(times) = record.get("tempiCompletamento") {
        out.extend(completion_statements(&subject, times));
    }

    if let Some(winners) = record.get("aggiudicatari").and_then(Value::as_array) {
        out.extend(participant::scan(winners, &contract, true));
    }
    if let Some(participants) = record.get("partecipanti").and_then(Value::as_array) {
        out.extend(participant::scan(participants, &contract, false));
    }

    // The contracting-authority relation is always published, even when the
    // authority identifier is empty.
    let authority = uri::business_entity(&document::text(record, "cfStrutturaProponenteANAC"));
    out.push(Statement::new(
        &authority,
        iris::RDF_TYPE,
        Term::iri(iris::GR_BUSINESS_ENTITY),
    ));
    out.push(Statement::new(
        subject,
        iris::PC_CONTRACTING_AUTHORITY,
        Term::iri(authority),
    ));

    out
}

/// The payment sub-block: all statements gated together on one non-empty
/// check of the liquidated-sum field.
fn payment_statements(
    subject: &str,
    cig_uri: &str,
    year: &str,
    liquidated: &str,
) -> Vec<Statement> {
    let payment = uri::payment(cig_uri, year);
    vec![
        Statement::new(subject, iris::PAYMENT, Term::iri(&payment)),
        Statement::new(
            &payment,
            iris::PAYMENT_NET_AMOUNT,
            Term::typed(liquidated, iris::XSD_FLOAT),
        ),
        Statement::new(&payment, iris::TIME_YEAR, Term::typed(year, iris::XSD_INT)),
        Statement::new(
            &payment,
            iris::RDFS_LABEL,
            Term::typed(liquidated, iris::XSD_FLOAT),
        ),
        Statement::new(subject, iris::TIME_YEAR, Term::typed(year, iris::XSD_INT)),
        Statement::new(payment, iris::RDF_TYPE, Term::iri(iris::PAYMENT_CLASS)),
    ]
}

/// The completion-time sub-block: four dates, each independently gated.
fn completion_statements(subject: &str, times: &Value) -> Vec<Statement> {
    let mut out = Vec::new();

    let start = document::text(times, "dataInizio");
    if !start.is_empty() {
        out.push(Statement::new(
            subject,
            iris::PC_START_DATE,
            Term::typed(start, iris::XSD_DATE),
        ));
    }
    let end = document::text(times, "dataUltimazione");
    if !end.is_empty() {
        out.push(Statement::new(
            subject,
            iris::PC_ESTIMATED_END_DATE,
            Term::typed(end, iris::XSD_DATE),
        ));
    }
    let original_start = document::text(times, "dataInizioOriginale");
    if !original_start.is_empty() {
        out.push(Statement::new(
            subject,
            uri::property("originalStartDate"),
            Term::plain(original_start),
        ));
    }
    let original_end = document::text(times, "dataUltimazioneOriginale");
    if !original_end.is_empty() {
        out.push(Statement::new(
            subject,
            uri::property("originalEstimatedEndDate"),
            Term::plain(original_end),
        ));
    }
    out
}

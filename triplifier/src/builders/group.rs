//! Bidder-group statement builders.
//!
//! A group entry carries its members in a nested array. The group resource
//! is keyed by the externally supplied group hash; its tender is keyed by
//! the contract code segment plus that hash. Each member re-runs the
//! identity resolver and the single-participant builder.

use serde_json::Value;

use super::{participant, Contract};
use crate::document;
use crate::model::{iris, uri, Statement, Term};
use crate::resolver;

/// Role codes that mark the lead member of a group.
const LEAD_ROLES: [&str; 2] = ["02-MANDATARIA", "04-CAPOGRUPPO"];

/// Placeholder head label used when no member carries a lead role.
const UNDETERMINED_HEAD: &str = "indefinito";

/// Builds the statements for one group occurrence.
#[must_use]
pub fn statements(
    members: &[Value],
    contract: &Contract<'_>,
    group_id: &str,
    is_winner: bool,
) -> Vec<Statement> {
    let mut out = Vec::new();

    let group = uri::group(group_id);
    let tender = uri::group_tender(contract.cig_uri, group_id);
    let head = head_key(members);

    out.push(Statement::new(
        &group,
        iris::RDFS_LABEL,
        Term::lang(
            format!("Raggruppamento con capogruppo/mandataria con identificativo {head}"),
            "it",
        ),
    ));
    out.push(Statement::new(&tender, iris::PC_BIDDER, Term::iri(&group)));
    out.push(Statement::new(
        &tender,
        iris::RDF_TYPE,
        Term::iri(iris::PC_TENDER),
    ));

    if is_winner {
        out.push(Statement::new(
            &tender,
            iris::RDFS_LABEL,
            Term::lang(
                format!(
                    "Raggruppamento aggiudicatario: capogruppo/mandataria con identificativo {head}"
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
        iris::RDFS_LABEL,
        Term::lang(
            format!(
                "Raggruppamento partecipante: capogruppo/mandataria con identificativo {head}"
            ),
            "it",
        ),
    ));
    out.push(Statement::new(
        contract.subject,
        iris::PC_HAS_TENDER,
        Term::iri(tender),
    ));
    out.push(Statement::new(
        &group,
        iris::RDF_TYPE,
        Term::iri(iris::FOAF_GROUP),
    ));

    for member in members {
        let identity = resolver::resolve(member);
        let entity = uri::business_entity(&identity.key);

        let role = document::text(member, "ruolo");
        if role.is_empty() {
            out.push(Statement::new(
                &group,
                iris::FOAF_MEMBER,
                Term::iri(&entity),
            ));
        } else {
            let role_property = uri::role_property(&role);
            out.push(Statement::new(
                &role_property,
                iris::RDFS_LABEL,
                Term::lang(&role, "it"),
            ));
            out.push(Statement::new(
                &role_property,
                iris::RDFS_SUBPROPERTY_OF,
                Term::iri(iris::ORG_ROLE),
            ));
            out.push(Statement::new(&group, role_property, Term::iri(&entity)));
        }

        // Tracks errors in the role values.
        let original_role = document::text(member, "ruoloOriginale");
        if !original_role.is_empty() {
            out.push(Statement::new(
                &entity,
                uri::property("originalRole"),
                Term::plain(original_role),
            ));
        }

        out.extend(participant::single_participant(member, &identity));
    }

    out
}

/// The head of a group is the last member carrying a lead role; groups
/// without one get the placeholder.
fn head_key(members: &[Value]) -> String {
    let mut head = UNDETERMINED_HEAD.to_owned();
    for member in members {
        let role = document::text(member, "ruolo");
        if LEAD_ROLES.contains(&role.as_str()) {
            head = resolver::resolve(member).key;
        }
    }
    head
}

//! Statement model and vocabulary for the triplification engine.
//!
//! A [`Statement`] is one subject–predicate–object triple. Subjects and
//! predicates are absolute IRIs held as owned strings; objects are either
//! IRIs or literals ([`Term`]). Statements are synthesized fresh per input
//! record and never mutated after creation.

use crate::slug::normalize;

/// A term in object position: an IRI reference or a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An absolute IRI reference.
    Iri(String),
    /// A plain literal without datatype or language tag.
    Plain(String),
    /// A language-tagged literal.
    Lang(String, &'static str),
    /// A datatype-tagged literal. The datatype IRI comes from [`iris`].
    Typed(String, &'static str),
}

impl Term {
    /// Creates an IRI reference term.
    pub fn iri(value: impl Into<String>) -> Self {
        Term::Iri(value.into())
    }

    /// Creates a plain literal term.
    pub fn plain(value: impl Into<String>) -> Self {
        Term::Plain(value.into())
    }

    /// Creates a language-tagged literal term.
    pub fn lang(value: impl Into<String>, tag: &'static str) -> Self {
        Term::Lang(value.into(), tag)
    }

    /// Creates a datatype-tagged literal term.
    pub fn typed(value: impl Into<String>, datatype: &'static str) -> Self {
        Term::Typed(value.into(), datatype)
    }
}

/// One subject–predicate–object statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Subject IRI.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: Term,
}

impl Statement {
    /// Creates a statement from a subject IRI, predicate IRI, and object term.
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// Vocabulary IRI constants used by the statement builders.
pub mod iris {
    /// Base IRI of every resource minted by this engine.
    pub const BASE: &str = "http://public-contracts.nexacenter.org/id/";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:subPropertyOf`.
    pub const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";

    /// `dcterms:source`.
    pub const DCTERMS_SOURCE: &str = "http://purl.org/dc/terms/source";
    /// `dcterms:identifier`.
    pub const DCTERMS_IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
    /// `dcterms:description`.
    pub const DCTERMS_DESCRIPTION: &str = "http://purl.org/dc/terms/description";

    /// Public-contracts ontology: the Contract class.
    pub const PC_CONTRACT: &str = "http://purl.org/procurement/public-contracts#Contract";
    /// Public-contracts ontology: the Tender class.
    pub const PC_TENDER: &str = "http://purl.org/procurement/public-contracts#Tender";
    /// Public-contracts ontology: agreed price of a contract.
    pub const PC_AGREED_PRICE: &str = "http://purl.org/procurement/public-contracts#agreedPrice";
    /// Public-contracts ontology: procedure type of a contract.
    pub const PC_PROCEDURE_TYPE: &str =
        "http://purl.org/procurement/public-contracts#procedureType";
    /// Public-contracts ontology: actual start date.
    pub const PC_START_DATE: &str = "http://purl.org/procurement/public-contracts#startDate";
    /// Public-contracts ontology: estimated end date.
    pub const PC_ESTIMATED_END_DATE: &str =
        "http://purl.org/procurement/public-contracts#estimatedEndDate";
    /// Public-contracts ontology: contracting authority of a contract.
    pub const PC_CONTRACTING_AUTHORITY: &str =
        "http://purl.org/procurement/public-contracts#contractingAuthority";
    /// Public-contracts ontology: tender submitted for a contract.
    pub const PC_HAS_TENDER: &str = "http://purl.org/procurement/public-contracts#tender";
    /// Public-contracts ontology: bidder behind a tender.
    pub const PC_BIDDER: &str = "http://purl.org/procurement/public-contracts#bidder";
    /// Public-contracts ontology: the tender a contract was awarded to.
    pub const PC_AWARDED_TENDER: &str =
        "http://purl.org/procurement/public-contracts#awardedTender";

    /// Payments ontology: the Payment class.
    pub const PAYMENT_CLASS: &str = "http://reference.data.gov.uk/def/payment#Payment";
    /// Payments ontology: payment attached to a contract.
    pub const PAYMENT: &str = "http://reference.data.gov.uk/def/payment#payment";
    /// Payments ontology: net amount of a payment.
    pub const PAYMENT_NET_AMOUNT: &str = "http://reference.data.gov.uk/def/payment#netAmount";

    /// OWL-Time: year of a payment or contract.
    pub const TIME_YEAR: &str = "http://www.w3.org/2006/time#year";

    /// GoodRelations: the BusinessEntity class.
    pub const GR_BUSINESS_ENTITY: &str = "http://purl.org/goodrelations/v1#BusinessEntity";
    /// GoodRelations: VAT identifier of a business entity.
    pub const GR_VAT_ID: &str = "http://purl.org/goodrelations/v1#vatID";

    /// FOAF: the Group class.
    pub const FOAF_GROUP: &str = "http://xmlns.com/foaf/0.1/Group";
    /// FOAF: plain group membership, used when a member carries no role.
    pub const FOAF_MEMBER: &str = "http://xmlns.com/foaf/0.1/member";

    /// SKOS: narrower-concept link used by the procedure-type taxonomy.
    pub const SKOS_NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";

    /// DBpedia: country of a business entity.
    pub const DBO_COUNTRY: &str = "http://dbpedia.org/ontology/country";
    /// DBpedia: the Italy resource.
    pub const DBR_ITALY: &str = "http://dbpedia.org/resource/Italy";
    /// DBpedia: generic property placeholder linked from every taxonomy row.
    pub const DBO_PROPERTY: &str = "http://dbpedia.org/ontology/property";

    /// W3C organization ontology: the role property taxonomy rows specialize.
    pub const ORG_ROLE: &str = "http://www.w3.org/ns/org#role";

    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:int`.
    pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    /// `xsd:date`.
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
}

/// Constructors for resource URIs under [`iris::BASE`].
///
/// Every free-text value that lands inside a path segment goes through
/// [`normalize`](crate::slug::normalize) here, so call sites cannot forget
/// it. Identifier-shaped values the source guarantees URI-safe (the contract
/// code segment, group hashes) are used verbatim.
pub mod uri {
    use super::iris::BASE;
    use super::normalize;

    /// `public_contracts/{cig_uri}` — the contract resource.
    #[must_use]
    pub fn contract(cig_uri: &str) -> String {
        format!("{BASE}public_contracts/{cig_uri}")
    }

    /// `payments/{slug(cig_uri)}_{year}` — the payment resource.
    #[must_use]
    pub fn payment(cig_uri: &str, year: &str) -> String {
        format!("{BASE}payments/{}_{year}", normalize(cig_uri))
    }

    /// `businessEntities/{slug(key)}` — one rule for authorities, bidders,
    /// and group members alike.
    #[must_use]
    pub fn business_entity(key: &str) -> String {
        format!("{BASE}businessEntities/{}", normalize(key))
    }

    /// `tenders/{slug(cig_uri_key)}` — an individual participant's tender.
    #[must_use]
    pub fn tender(cig_uri: &str, key: &str) -> String {
        format!("{BASE}tenders/{}", normalize(&format!("{cig_uri}_{key}")))
    }

    /// `tenders/{slug(cig_uri)}_group_{group_id}` — a group's tender.
    #[must_use]
    pub fn group_tender(cig_uri: &str, group_id: &str) -> String {
        format!("{BASE}tenders/{}_group_{group_id}", normalize(cig_uri))
    }

    /// `groups/{group_id}` — a bidder group, keyed by its supplied hash.
    #[must_use]
    pub fn group(group_id: &str) -> String {
        format!("{BASE}groups/{group_id}")
    }

    /// `procedureTypes/{slug(label)}` — a procedure-type concept.
    #[must_use]
    pub fn procedure_type(label: &str) -> String {
        format!("{BASE}procedureTypes/{}", normalize(label))
    }

    /// `properties/{name}` — an engine-local property.
    #[must_use]
    pub fn property(name: &str) -> String {
        format!("{BASE}properties/{name}")
    }

    /// `propertiesRole/{slug(role)}` — a group-membership role property.
    #[must_use]
    pub fn role_property(role: &str) -> String {
        format!("{BASE}propertiesRole/{}", normalize(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_holds_owned_terms() {
        let statement = Statement::new(
            uri::contract("5128833EDE"),
            iris::RDF_TYPE,
            Term::iri(iris::PC_CONTRACT),
        );
        assert_eq!(
            statement.subject,
            "http://public-contracts.nexacenter.org/id/public_contracts/5128833EDE"
        );
        assert_eq!(statement.object, Term::iri(iris::PC_CONTRACT));
    }

    #[test]
    fn tender_uri_slugs_the_joined_segment() {
        assert_eq!(
            uri::tender("5128833EDE", "01015600057"),
            "http://public-contracts.nexacenter.org/id/tenders/5128833ede_01015600057"
        );
    }

    #[test]
    fn group_tender_keeps_the_group_id_verbatim() {
        assert_eq!(
            uri::group_tender("5128833EDE", "AbC123"),
            "http://public-contracts.nexacenter.org/id/tenders/5128833ede_group_AbC123"
        );
    }

    #[test]
    fn business_entity_tolerates_an_empty_key() {
        assert_eq!(
            uri::business_entity(""),
            "http://public-contracts.nexacenter.org/id/businessEntities/"
        );
    }
}

//! Participant identity resolution.
//!
//! Every participant-like fragment — a winner, a plain participant, or a
//! group member — resolves to one canonical identity key through the same
//! fixed priority order. The key feeds the business-entity and tender URI
//! constructors; the flags drive the nationality statements.

use serde_json::Value;

use crate::document;

/// The resolved identity of a participant-like fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The string used to build the business-entity URI. Empty when the
    /// fragment carries no identifying field at all; callers tolerate the
    /// resulting empty URI segment.
    pub key: String,
    /// True when the key is a domestic fiscal code.
    pub is_domestic: bool,
    /// False only when an anonymization hash stands in for the identity and
    /// no fiscal code of either kind is present.
    pub has_nationality: bool,
}

/// Resolves the canonical identity key of a participant-like fragment.
///
/// Priority order, first match wins:
/// 1. a non-empty `companyHash` — nationality stays determinable only when a
///    domestic or foreign fiscal code is also present on the fragment
/// 2. a non-empty `codiceFiscale` — a domestic entity
/// 3. `identificativoFiscaleEstero`, possibly empty — a foreign entity
#[must_use]
pub fn resolve(fragment: &Value) -> Identity {
    let hash = document::text(fragment, "companyHash");
    let domestic = document::text(fragment, "codiceFiscale");
    let foreign = document::text(fragment, "identificativoFiscaleEstero");

    if !hash.is_empty() {
        // The hash suppresses nationality only when no fiscal code is
        // present at all; with a code alongside, the entity stays
        // nationality-bearing but is still keyed by the hash.
        return Identity {
            key: hash,
            is_domestic: false,
            has_nationality: !(domestic.is_empty() && foreign.is_empty()),
        };
    }
    if !domestic.is_empty() {
        return Identity {
            key: domestic,
            is_domestic: true,
            has_nationality: true,
        };
    }
    Identity {
        key: foreign,
        is_domestic: false,
        has_nationality: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hash_wins_over_both_fiscal_codes() {
        let fragment = json!({
            "companyHash": "abc123",
            "codiceFiscale": "01015600057",
            "identificativoFiscaleEstero": "FR-99",
        });
        let identity = resolve(&fragment);
        assert_eq!(identity.key, "abc123");
        assert!(!identity.is_domestic);
        assert!(identity.has_nationality);
    }

    #[test]
    fn hash_alone_suppresses_nationality() {
        let identity = resolve(&json!({ "companyHash": "abc123" }));
        assert_eq!(identity.key, "abc123");
        assert!(!identity.is_domestic);
        assert!(!identity.has_nationality);
    }

    #[test]
    fn domestic_code_without_hash() {
        let identity = resolve(&json!({ "codiceFiscale": "01015600057" }));
        assert_eq!(identity.key, "01015600057");
        assert!(identity.is_domestic);
        assert!(identity.has_nationality);
    }

    #[test]
    fn foreign_identifier_is_the_last_resort() {
        let identity = resolve(&json!({ "identificativoFiscaleEstero": "FR-99" }));
        assert_eq!(identity.key, "FR-99");
        assert!(!identity.is_domestic);
        assert!(identity.has_nationality);
    }

    #[test]
    fn nothing_at_all_resolves_to_an_empty_key() {
        let identity = resolve(&json!({ "ragioneSociale": "Ditta Anonima" }));
        assert_eq!(identity.key, "");
        assert!(!identity.is_domestic);
        assert!(identity.has_nationality);
    }

    #[test]
    fn empty_fields_count_as_absent() {
        let identity = resolve(&json!({
            "companyHash": "",
            "codiceFiscale": "",
            "identificativoFiscaleEstero": "FR-99",
        }));
        assert_eq!(identity.key, "FR-99");
    }
}

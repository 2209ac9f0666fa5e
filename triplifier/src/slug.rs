//! URI-safe string normalization.
//!
//! [`normalize`] turns arbitrary free text into a token safe to embed in a
//! URI path segment. The transformation list is order-sensitive: the en/em
//! dash is first rewritten to a hyphen and the hyphen is stripped later, and
//! the underscore collapse runs after spaces and slashes have become
//! underscores.

/// Characters removed outright, after quote and dash handling.
const STRIPPED: [char; 9] = [':', '°', '?', '(', ')', '-', '[', ']', ','];

/// Normalizes free text into a URI-path-safe slug.
///
/// Deterministic and pure. The double-underscore collapse is a single
/// left-to-right pass, so a run of three or more underscores is not
/// guaranteed fully collapsed (and only such runs keep collapsing under
/// repeated application; everything else is a fixed point after one call).
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut s = text.replace('´', "'");
    s = s.replace('’', "");
    s = s.replace('\'', "");
    s = s.replace('“', "\"").replace('”', "\"");
    s = s.replace('"', "");
    s = s.replace('–', "-").replace('—', "-");
    s = collapse_tab_runs(&s);
    for c in STRIPPED {
        s = s.replace(c, "");
    }
    s = s.replace('.', "_");
    s = s.replace(' ', "_").replace('/', "_");
    s = s.replace("__", "_");
    s.to_lowercase()
}

/// Collapses every run of consecutive tabs to a single tab.
fn collapse_tab_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c == '\t' {
            if !in_run {
                out.push('\t');
            }
            in_run = true;
        } else {
            in_run = false;
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_replaces_spaces() {
        assert_eq!(normalize("PROCEDURA APERTA"), "procedura_aperta");
    }

    #[test]
    fn dots_become_underscores() {
        assert_eq!(normalize("S.p.A."), "s_p_a_");
    }

    #[test]
    fn apostrophes_and_quote_variants_are_stripped() {
        assert_eq!(normalize("SOCIETA' IN HOUSE"), "societa_in_house");
        assert_eq!(normalize("dell’arte"), "dellarte");
        assert_eq!(normalize("un´altra"), "unaltra");
        assert_eq!(normalize("“quoted”"), "quoted");
    }

    #[test]
    fn en_dash_is_rewritten_then_stripped_with_hyphens() {
        // "–" → "-" first, then every hyphen is removed; the surrounding
        // spaces become a double underscore collapsed to one.
        assert_eq!(normalize("A – B"), "a_b");
        assert_eq!(normalize("COTTIMO - FIDUCIARIO"), "cottimo_fiduciario");
    }

    #[test]
    fn underscore_collapse_is_a_single_pass() {
        assert_eq!(normalize("a   b"), "a__b");
        assert_eq!(normalize("a  b"), "a_b");
    }

    #[test]
    fn slashes_and_brackets() {
        assert_eq!(normalize("LL.PP [2006]/bis"), "ll_pp_2006_bis");
    }

    #[test]
    fn idempotent_under_repeated_application() {
        for input in [
            "08-AFFIDAMENTO IN ECONOMIA - COTTIMO FIDUCIARIO",
            "S.p.A.",
            "A – B",
            "5128833EDE_01015600057",
            "",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn taxonomy_style_label() {
        assert_eq!(
            normalize("08-AFFIDAMENTO IN ECONOMIA - COTTIMO FIDUCIARIO"),
            "08affidamento_in_economia_cottimo_fiduciario"
        );
    }

    #[test]
    fn tab_runs_collapse_to_one_tab() {
        assert_eq!(normalize("a\t\t\tb"), "a\tb");
    }
}

//! Entity statement builders.
//!
//! Each builder is a pure function from a document fragment (and
//! already-resolved context) to a list of statements: no shared mutable
//! state, identical input gives identical output. The contract builder is
//! the entry point; it invokes the participant scan for the winners and
//! participants arrays, and the scan in turn invokes the group builder for
//! nested bidder groups, which re-enters the single-participant path per
//! member.

pub mod contract;
pub mod group;
pub mod participant;

/// Already-resolved contract context shared by the participant and group
/// builders.
#[derive(Debug, Clone, Copy)]
pub struct Contract<'a> {
    /// The contract resource URI.
    pub subject: &'a str,
    /// The raw contract code, used in label text (may be the missing-cig
    /// placeholder).
    pub cig: &'a str,
    /// The URI-segment form of the contract code: the valid code, or the
    /// hash fallback, or empty.
    pub cig_uri: &'a str,
}

//! Tracking-parameter classification rules.
//!
//! The rule set is fixed at compile time and never mutated at runtime. The
//! exact names and prefixes below are compatibility-critical: they must match
//! the deny-list the page has always shipped, byte for byte.

/// Query-parameter names that are always tracking noise (exact, case-sensitive match).
const EXACT_DENY_LIST: &[&str] = &[
    "_kx",
    "cid",
    "ck_subscriber_id",
    "cmpid",
    "ea.tracking.id",
    "EMLCID",
    "EMLDTL",
    "fbclid",
    "gclid",
    "linkID",
    "mailId",
    "msclkid",
    "mc_cid",
    "mcID",
    "mc_eid",
    "mgparam",
    "rfrr",
];

/// Prefixes that mark a parameter as tracking noise regardless of suffix.
const DENY_PREFIXES: &[&str] = &["cm_", "pk_", "utm_"];

/// Immutable classification rules for tracking parameters.
///
/// A key is considered tracking noise when it appears verbatim in the exact
/// deny-list, or when it starts with one of the deny prefixes.
#[derive(Debug, Clone, Copy)]
pub struct TrackingRuleSet {
    exact: &'static [&'static str],
    prefixes: &'static [&'static str],
}

impl TrackingRuleSet {
    /// Returns the built-in rule set.
    pub fn builtin() -> Self {
        Self {
            exact: EXACT_DENY_LIST,
            prefixes: DENY_PREFIXES,
        }
    }

    /// Tests whether a query-parameter key is tracking noise.
    pub fn is_tracking(&self, key: &str) -> bool {
        self.exact.contains(&key) || self.prefixes.iter().any(|prefix| key.starts_with(prefix))
    }
}

impl Default for TrackingRuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Validated identifiers shared by the loader, ranker and tool contract.
//!
//! Both types normalise their input (trim + uppercase) on construction, so
//! two values compare equal exactly when their normalised text does.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PhenorankError;

// ---------------------------------------------------------------------------
// Phenotype term (HPO identifier)
// ---------------------------------------------------------------------------

/// An HPO-style phenotype identifier such as `HP:0001250`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PhenotypeTerm(String);

impl PhenotypeTerm {
    /// Normalise `raw` and accept it if it reads `HP:` followed by digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalised = raw.trim().to_uppercase();
        term_regex().is_match(&normalised).then_some(Self(normalised))
    }

    /// True for the ontology's canonical seven-digit form.
    pub fn is_canonical(&self) -> bool {
        canonical_term_regex().is_match(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn term_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also admit other Unicode digit classes.
    RE.get_or_init(|| Regex::new(r"^HP:[0-9]+$").unwrap())
}

fn canonical_term_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^HP:[0-9]{7}$").unwrap())
}

impl FromStr for PhenotypeTerm {
    type Err = PhenorankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PhenorankError::InvalidTerm(s.to_string()))
    }
}

impl fmt::Display for PhenotypeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PhenotypeTerm {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PhenotypeTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PhenotypeTerm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Gene symbol
// ---------------------------------------------------------------------------

/// Canonical (uppercase) gene symbol, e.g. `SCN1A`. Opaque beyond being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GeneSymbol(String);

impl GeneSymbol {
    pub fn parse(raw: &str) -> Option<Self> {
        let normalised = raw.trim().to_uppercase();
        (!normalised.is_empty()).then_some(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for GeneSymbol {
    type Err = PhenorankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PhenorankError::InvalidGeneSymbol(s.to_string()))
    }
}

impl fmt::Display for GeneSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for GeneSymbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GeneSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for GeneSymbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_is_trimmed_and_uppercased() {
        let term = PhenotypeTerm::parse("  hp:0001250 ").unwrap();
        assert_eq!(term.as_str(), "HP:0001250");
    }

    #[test]
    fn test_term_accepts_any_digit_count() {
        assert!(PhenotypeTerm::parse("HP:1").is_some());
        assert!(PhenotypeTerm::parse("HP:00012500").is_some());
    }

    #[test]
    fn test_term_rejects_malformed_ids() {
        for raw in ["not-an-id", "HP:", "HP:000A001", "HP 0001250", "OMIM:123456", "", "HP:0001250x"] {
            assert!(PhenotypeTerm::parse(raw).is_none(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_term_rejects_non_ascii_digits() {
        // Arabic-Indic digits are `\d` in Unicode regex mode.
        assert!(PhenotypeTerm::parse("HP:\u{0661}\u{0662}").is_none());
    }

    #[test]
    fn test_canonical_form_is_seven_digits() {
        assert!(PhenotypeTerm::parse("HP:0001250").unwrap().is_canonical());
        assert!(!PhenotypeTerm::parse("HP:1250").unwrap().is_canonical());
    }

    #[test]
    fn test_term_deserialize_validates() {
        let ok: PhenotypeTerm = serde_json::from_str("\"hp:0000001\"").unwrap();
        assert_eq!(ok.to_string(), "HP:0000001");
        assert!(serde_json::from_str::<PhenotypeTerm>("\"nope\"").is_err());
    }

    #[test]
    fn test_gene_symbol_normalises() {
        assert_eq!(GeneSymbol::parse(" scn1a ").unwrap().as_str(), "SCN1A");
        assert!(GeneSymbol::parse("   ").is_none());
        assert!("".parse::<GeneSymbol>().is_err());
    }

    #[test]
    fn test_gene_symbols_order_lexicographically() {
        let mut genes: Vec<GeneSymbol> = ["GENEB", "GENEA", "ABCA4"]
            .iter()
            .filter_map(|g| GeneSymbol::parse(g))
            .collect();
        genes.sort();
        let names: Vec<&str> = genes.iter().map(GeneSymbol::as_str).collect();
        assert_eq!(names, ["ABCA4", "GENEA", "GENEB"]);
    }
}

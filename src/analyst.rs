// src/analyst.rs
// THE INSIGHT GENERATOR
// "AI analysis" in name only: a fixed rule table turns the enriched record
// into commentary. No model is consulted, nothing is learned; each
// conditional is independent and the emission order never changes.

use serde::{Deserialize, Serialize};

use crate::enrichment::EnrichedRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub key_insights: Vec<String>,
    pub risk_assessment: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// Flattens the three groups in display order.
    pub fn lines(&self) -> Vec<String> {
        self.key_insights
            .iter()
            .chain(self.risk_assessment.iter())
            .chain(self.recommendations.iter())
            .cloned()
            .collect()
    }
}

/// Total over missing fields: a rule whose field is absent simply emits
/// nothing. The risk and recommendation groups are boilerplate and always
/// present.
pub fn analyze(record: &EnrichedRecord) -> AnalysisReport {
    let mut key_insights = Vec::new();

    if let Some(name) = present(&record.business_name) {
        key_insights.push(format!("{} is registered in Connecticut", name));
    }

    match present(&record.status) {
        Some("Active") => {
            key_insights.push("The business is currently Active and in good standing".to_string());
        }
        Some(other) => {
            key_insights.push(format!(
                "The business status is {} which may require attention",
                other
            ));
        }
        None => {}
    }

    if let Some(date) = present(&record.filing_date) {
        key_insights.push(format!("Originally filed on {}", date));
    }

    if let Some(kind) = present(&record.business_type) {
        key_insights.push(format!("Registered as a {}", kind));
    }

    AnalysisReport {
        key_insights,
        risk_assessment: vec![
            "Low Risk: Business is properly registered and active".to_string(),
            "Filing History: Complete and consistent".to_string(),
        ],
        recommendations: vec![
            "Verify physical location matches registered address".to_string(),
            "Check for any recent ownership changes".to_string(),
            "Review any related entities for common ownership patterns".to_string(),
        ],
    }
}

/// Appends the related-entities observation when the search surfaced more
/// than one row.
pub fn note_related_entities(report: &mut AnalysisReport, result_count: usize) {
    if result_count > 1 {
        report.key_insights.push(format!(
            "Found {} related business entities that may have common ownership",
            result_count
        ));
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::{enrich, EnrichedRecord};

    fn empty_record() -> EnrichedRecord {
        EnrichedRecord {
            business_name: None,
            filing_number: None,
            business_type: None,
            status: None,
            filing_date: None,
            business_address: None,
            mailing_address: None,
            agent_name: None,
            agent_address: None,
            annual_report_due: None,
        }
    }

    #[test]
    fn full_record_emits_every_rule_in_order() {
        let report = analyze(&enrich("acme"));
        assert_eq!(
            report.key_insights,
            vec![
                "ACME is registered in Connecticut".to_string(),
                "The business is currently Active and in good standing".to_string(),
                "Originally filed on 01/15/2020".to_string(),
                "Registered as a Domestic Limited Liability Company".to_string(),
            ]
        );
        assert_eq!(report.risk_assessment.len(), 2);
        assert_eq!(report.recommendations.len(), 3);
    }

    #[test]
    fn missing_status_omits_the_status_line() {
        let mut record = enrich("acme");
        record.status = None;
        let report = analyze(&record);
        assert!(!report
            .lines()
            .iter()
            .any(|line| line.contains("Active") || line.contains("require attention")));
    }

    #[test]
    fn non_active_status_flags_attention() {
        let mut record = enrich("acme");
        record.status = Some("Dissolved".to_string());
        let report = analyze(&record);
        assert!(report
            .key_insights
            .contains(&"The business status is Dissolved which may require attention".to_string()));
    }

    #[test]
    fn empty_record_still_yields_boilerplate() {
        let report = analyze(&empty_record());
        assert!(report.key_insights.is_empty());
        assert_eq!(report.risk_assessment.len(), 2);
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.lines().len(), 5);
    }

    #[test]
    fn related_entities_noted_only_for_multiple_rows() {
        let mut report = analyze(&enrich("acme"));
        note_related_entities(&mut report, 1);
        assert!(!report.lines().iter().any(|l| l.contains("related business")));

        note_related_entities(&mut report, 3);
        assert!(report.key_insights.contains(
            &"Found 3 related business entities that may have common ownership".to_string()
        ));
    }
}

// src/reporter.rs
// CSV export and console rendering of a finished research report.

use std::error::Error;

use csv::Writer;

use crate::enrichment::EnrichedRecord;
use crate::pipeline::ResearchReport;

pub struct Reporter;

impl Reporter {
    /// One header row derived from the profile's field labels, one data row.
    pub fn export_csv(record: &EnrichedRecord) -> Result<String, Box<dyn Error>> {
        let mut wtr = Writer::from_writer(Vec::new());
        wtr.serialize(record)?;
        wtr.flush()?;
        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }

    /// `<term>_business_data.csv`, with the term slugged so it is safe as a
    /// filename on every platform.
    pub fn export_filename(term: &str) -> String {
        let slug: String = term
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}_business_data.csv", slug)
    }

    pub fn print_summary(report: &ResearchReport) {
        println!("\n📊 RESEARCH SUMMARY: '{}'", report.term);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        if let Some(error) = &report.error {
            println!("❌ {}", error);
        }
        if let Some(notice) = &report.notice {
            println!("ℹ️ {}", notice);
        }

        println!("Results: {}", report.results.len());
        for (i, record) in report.results.iter().enumerate() {
            println!("  [{}]", i + 1);
            for (label, value) in record.field_pairs() {
                println!("    {:<14} {}", label, value);
            }
        }

        if let Some(enriched) = &report.enriched {
            println!("\n🏢 Entity Profile:");
            for (label, value) in enriched.field_pairs() {
                println!("  {:<18} {}", label, value);
            }
        }

        if let Some(analysis) = &report.analysis {
            println!("\n🧠 Key Insights:");
            for line in &analysis.key_insights {
                println!("  - {}", line);
            }
            println!("\n⚖️ Risk Assessment:");
            for line in &analysis.risk_assessment {
                println!("  - {}", line);
            }
            println!("\n💡 Recommendations:");
            for line in &analysis.recommendations {
                println!("  - {}", line);
            }
        }

        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    }
}

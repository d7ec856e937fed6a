// src/pipeline.rs
// One search submission, end to end: validate, query, extract, enrich,
// analyze. Runs synchronously inside the request; no state survives the
// submission and nothing is cached between searches.

use serde::{Deserialize, Serialize};

use crate::analyst::{self, AnalysisReport};
use crate::criteria::SearchCriteria;
use crate::enrichment::{self, EnrichedRecord};
use crate::extractor::{self, ResultRecord, FALLBACK_NOTICE};
use crate::registry::{build_search_url, QueryOutcome, RegistryLookup};

pub const EMPTY_CRITERIA_MESSAGE: &str =
    "Enter at least one of business name, filing number, or principal name";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineState {
    #[default]
    Idle,
    Validating,
    Querying,
    Enriching,
    Analyzing,
    // Terminal states; only these two ever appear in a finished report.
    Rendered,
    Error,
}

/// Everything the UI host needs to render one finished submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchReport {
    pub term: String,
    pub state: PipelineState,
    pub results: Vec<ResultRecord>,
    pub enriched: Option<EnrichedRecord>,
    pub analysis: Option<AnalysisReport>,
    /// Set on the fallback path: full data needs dynamic rendering.
    pub notice: Option<String>,
    pub error: Option<String>,
    pub generated_at: String,
}

impl ResearchReport {
    fn error_state(term: String, message: String) -> Self {
        Self {
            term,
            state: PipelineState::Error,
            results: Vec::new(),
            enriched: None,
            analysis: None,
            notice: None,
            error: Some(message),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn stage(state: PipelineState) {
    println!("▶️ PIPELINE: {:?}", state);
}

/// Runs the whole pipeline for one submission. Every failure is converted
/// to a rendered error report; nothing escapes to the caller.
pub fn run_research(criteria: &SearchCriteria, registry: &dyn RegistryLookup) -> ResearchReport {
    stage(PipelineState::Validating);
    let Some(term) = criteria.resolve_search_term() else {
        println!("⚠️ PIPELINE: no usable search field, halting before any fetch");
        return ResearchReport::error_state(String::new(), EMPTY_CRITERIA_MESSAGE.to_string());
    };

    println!("🕵️ PIPELINE: researching '{}'", term);

    stage(PipelineState::Querying);
    let request_url = build_search_url(&term);
    let extraction = match registry.query(&term) {
        QueryOutcome::Success(body) => extractor::extract(&body, &term, &request_url),
        QueryOutcome::HttpError(code) => {
            return ResearchReport::error_state(term, format!("Registry returned HTTP {}", code));
        }
        QueryOutcome::NetworkError(message) => {
            return ResearchReport::error_state(
                term,
                format!("Registry request failed: {}", message),
            );
        }
    };

    // The profile is synthesized from the term alone and deliberately
    // ignores the extracted rows (see enrichment.rs).
    stage(PipelineState::Enriching);
    let enriched = enrichment::enrich(&term);

    stage(PipelineState::Analyzing);
    let mut analysis = analyst::analyze(&enriched);
    analyst::note_related_entities(&mut analysis, extraction.records.len());

    let notice = extraction.fell_back.then(|| FALLBACK_NOTICE.to_string());

    stage(PipelineState::Rendered);
    ResearchReport {
        term,
        state: PipelineState::Rendered,
        results: extraction.records,
        enriched: Some(enriched),
        analysis: Some(analysis),
        notice,
        error: None,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

// src/api.rs
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::criteria::SearchCriteria;
use crate::enrichment;
use crate::pipeline::{self, PipelineState};
use crate::reporter::Reporter;
use crate::AppState;

// 1. The Request Format (the UI host's form, one field per input)
#[derive(Deserialize)]
pub struct ResearchRequest {
    pub business_name: Option<String>,
    pub business_city: Option<String>,
    pub filing_number: Option<String>,
    pub principal_name: Option<String>,
}

impl From<ResearchRequest> for SearchCriteria {
    fn from(req: ResearchRequest) -> Self {
        SearchCriteria {
            business_name: req.business_name,
            business_city: req.business_city,
            filing_number: req.filing_number,
            principal_name: req.principal_name,
        }
    }
}

// 2. The Export Request
#[derive(Deserialize)]
pub struct ExportRequest {
    pub term: String,
}

// POST /api/research
pub async fn run_research(
    data: web::Data<AppState>,
    req: web::Json<ResearchRequest>,
) -> impl Responder {
    let criteria: SearchCriteria = req.into_inner().into();
    let registry = data.registry.clone();

    // The registry fetch blocks for up to its timeout; keep it off the
    // async workers.
    let report = web::block(move || pipeline::run_research(&criteria, registry.as_ref())).await;

    match report {
        Ok(report) => {
            Reporter::print_summary(&report);
            // Validation failure is the caller's mistake; network-level
            // failures still render as a report for the UI to display.
            if report.state == PipelineState::Error && report.term.is_empty() {
                return HttpResponse::BadRequest().json(report);
            }
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            println!("❌ API Error: research task failed: {}", e);
            HttpResponse::InternalServerError().json(json!({ "error": "Research pipeline failed" }))
        }
    }
}

// POST /api/export
// Builds the enriched profile for the term and hands it back as a CSV
// attachment: header row plus exactly one data row.
pub async fn export_csv(req: web::Json<ExportRequest>) -> impl Responder {
    let term = req.term.trim();
    if term.is_empty() {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "A search term is required for export" }));
    }

    let record = enrichment::enrich(term);
    match Reporter::export_csv(&record) {
        Ok(csv) => {
            let filename = Reporter::export_filename(term);
            println!("✅ API: exporting {}", filename);
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(csv)
        }
        Err(e) => {
            println!("❌ API Error: CSV export failed: {}", e);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to build CSV export" }))
        }
    }
}

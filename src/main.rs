// src/main.rs
// BIZSCOUT CORE - API SERVER
// Serves the search-form frontend via REST API (Actix-Web). The UI host
// posts form values and renders whatever the pipeline hands back; the core
// never touches UI state directly.

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

// Modules
mod analyst;
mod api;
mod criteria;
mod enrichment;
mod extractor;
mod pipeline;
mod registry;
mod reporter;

use registry::RegistryClient;

// Shared State for the Server. The registry client only carries the ureq
// agent; no search data survives a request.
pub struct AppState {
    pub registry: Arc<RegistryClient>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("🚀 BizScout API Server Starting...");

    let registry = Arc::new(RegistryClient::new());

    let app_state = web::Data::new(AppState { registry });

    println!("🌍 Server running at http://127.0.0.1:8080");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(app_state.clone())
            .route("/api/research", web::post().to(api::run_research))
            .route("/api/export", web::post().to(api::export_csv))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}

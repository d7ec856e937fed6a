// src/registry.rs
// THE REGISTRY QUERY CLIENT
// One best-effort GET against the Connecticut business registry per search.
// The live site renders its result list with JavaScript, so a static fetch
// usually comes back without the expected markup; the extractor owns that
// fallback. No retries here, one shot per submission.

use std::time::Duration;

pub const REGISTRY_BASE_URL: &str = "https://service.ct.gov/business/s/onlinebusinesssearch";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Some registries reject unidentified clients outright, so we present a
// plain desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Outcome of a single registry fetch. Downstream code pattern-matches on
/// this instead of catching transport exceptions ad hoc.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    Success(String),
    HttpError(u16),
    NetworkError(String),
}

/// Seam between the pipeline and the network, so tests can stand in a
/// scripted registry without opening sockets.
pub trait RegistryLookup: Send + Sync {
    fn query(&self, term: &str) -> QueryOutcome;
}

pub fn build_search_url(term: &str) -> String {
    format!("{}?searchTerm={}", REGISTRY_BASE_URL, urlencoding::encode(term))
}

pub struct RegistryClient {
    agent: ureq::Agent,
}

impl RegistryClient {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        Self { agent }
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryLookup for RegistryClient {
    fn query(&self, term: &str) -> QueryOutcome {
        let url = build_search_url(term);
        println!("🔎 REGISTRY: GET {}", url);

        let response = self
            .agent
            .get(&url)
            .set("User-Agent", USER_AGENT)
            .set(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .set("Accept-Language", "en-US,en;q=0.9")
            .call();

        match response {
            Ok(resp) => {
                let status = resp.status();
                if status != 200 {
                    println!("⚠️ REGISTRY: unexpected HTTP {} from registry", status);
                    return QueryOutcome::HttpError(status);
                }
                match resp.into_string() {
                    Ok(body) => {
                        println!("✅ REGISTRY: fetched {} bytes", body.len());
                        QueryOutcome::Success(body)
                    }
                    Err(e) => QueryOutcome::NetworkError(e.to_string()),
                }
            }
            Err(ureq::Error::Status(code, _)) => {
                println!("⚠️ REGISTRY: HTTP {} from registry", code);
                QueryOutcome::HttpError(code)
            }
            Err(err) => {
                println!("⚠️ REGISTRY: transport failure: {}", err);
                QueryOutcome::NetworkError(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_appends_the_term() {
        let url = build_search_url("acme");
        assert_eq!(
            url,
            "https://service.ct.gov/business/s/onlinebusinesssearch?searchTerm=acme"
        );
    }

    #[test]
    fn search_url_encodes_special_characters() {
        let url = build_search_url("acme & co");
        assert!(url.ends_with("searchTerm=acme%20%26%20co"));
    }
}

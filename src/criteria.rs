// src/criteria.rs
// THE INPUT COLLECTOR
// Four optional form fields arrive from the UI host. At least one usable
// field must be present before a registry query is issued.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub business_name: Option<String>,
    pub business_city: Option<String>,
    pub filing_number: Option<String>,
    pub principal_name: Option<String>,
}

impl SearchCriteria {
    /// Picks the primary search term: business name beats filing number,
    /// filing number beats principal name. City is a refinement field only
    /// and never becomes the term itself.
    pub fn resolve_search_term(&self) -> Option<String> {
        [&self.business_name, &self.filing_number, &self.principal_name]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|term| !term.is_empty())
            .map(str::to_string)
    }
}

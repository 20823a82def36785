//! Request DTOs for the quote API.

use serde::Deserialize;

/// Query parameters for a quote request.
///
/// Dates arrive as raw strings so the engine can distinguish missing
/// values from unparseable ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteParams {
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    /// Accepted but not used in pricing; reserved for capacity validation.
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub promo_code: Option<String>,
}

//! JSON shapes exchanged with the recipe service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub ingredients: Vec<String>,
    pub sort_by: String,
    pub tags: Vec<String>,
    pub data_structure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// Absent when the service found nothing.
    pub recipes: Option<Vec<RecipeSummaryRecord>>,
    pub total_matches: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeSummaryRecord {
    pub name: String,
    #[serde(default)]
    pub matched_ingredients: Vec<String>,
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
    #[serde(default)]
    pub matched_tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub minutes: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub n_steps: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub minutes: Option<u64>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub n_steps: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub n_ingredients: Option<u64>,
}

/// Body of `GET /recipe/{data_structure}/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DetailResponse {
    /// The service reported an error message meant for the user.
    Rejected { error: String },
    Found(RecipeRecord),
}

/// Accepts integers, floats and numeric strings; anything else (such as
/// "Time not available") becomes `None`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

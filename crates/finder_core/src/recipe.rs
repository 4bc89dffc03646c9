/// One ranked match returned by the search service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeSummary {
    /// Display name; also the identifier used to fetch the full recipe.
    pub name: String,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub matched_tags: Vec<String>,
    /// Total time in minutes, `None` when the service does not know it.
    pub minutes: Option<u64>,
    pub steps: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub recipes: Vec<RecipeSummary>,
    pub total_matches: u64,
}

impl SearchResult {
    /// Result used when the service answers without a `recipes` field.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Full recipe record fetched on demand for one selected summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDetail {
    pub name: String,
    pub description: Option<String>,
    pub minutes: Option<u64>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
}

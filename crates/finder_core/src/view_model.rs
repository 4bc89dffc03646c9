use crate::{IndexVariant, Notice, RecipeDetail, RecipeSummary, SortKey};

/// The search service only looks at this many ingredients per query.
pub const INGREDIENT_LIMIT: usize = 10;

pub const EMPTY_QUERY_PROMPT: &str = "Please enter some ingredients or select at least one tag";
pub const SEARCH_LOADING_MESSAGE: &str = "Loading results...";
pub const SEARCH_ERROR_MESSAGE: &str = "Error fetching data";
pub const DETAIL_ERROR_MESSAGE: &str = "Error fetching recipe details";
pub const NO_RECIPES_FOUND: &str = "No recipes found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Idle,
    Searching,
    Results,
    Detail,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub ingredients_text: String,
    pub ingredient_count: usize,
    pub ingredients_over_limit: bool,
    pub selected_tags: Vec<String>,
    pub sort_key: SortKey,
    pub index_variant: IndexVariant,
    pub status_text: Option<String>,
    /// Set when a search completed without any recipe.
    pub no_results: bool,
    pub total_matches: u64,
    pub rows: Vec<RecipeRowView>,
    pub detail: Option<RecipeDetail>,
    pub detail_loading: bool,
    pub error: Option<String>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRowView {
    pub index: usize,
    pub name: String,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    /// Matched tags, narrowed to the selected ones when any are selected.
    pub tags: Vec<String>,
    pub minutes: Option<u64>,
    pub steps: u64,
}

impl RecipeRowView {
    pub(crate) fn from_summary(
        index: usize,
        summary: &RecipeSummary,
        selected_tags: &[String],
    ) -> Self {
        let tags = if selected_tags.is_empty() {
            summary.matched_tags.clone()
        } else {
            summary
                .matched_tags
                .iter()
                .filter(|tag| selected_tags.contains(tag))
                .cloned()
                .collect()
        };

        Self {
            index,
            name: summary.name.clone(),
            matched_ingredients: summary.matched_ingredients.clone(),
            missing_ingredients: summary.missing_ingredients.clone(),
            tags,
            minutes: summary.minutes,
            steps: summary.steps,
        }
    }
}

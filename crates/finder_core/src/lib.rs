//! Recipe finder core: pure query/view state machine and view-model helpers.
mod effect;
mod msg;
mod query;
mod recipe;
mod state;
mod tags;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use query::{
    normalize, parse_ingredients, IndexVariant, QueryError, QueryStore, SearchQuery, SortKey,
    TagSet,
};
pub use recipe::{RecipeDetail, RecipeSummary, SearchResult};
pub use state::{AppState, Notice, NoticeKind, RequestId, ViewState};
pub use tags::{is_known_tag, TAG_VOCABULARY};
pub use update::update;
pub use view_model::{
    AppViewModel, RecipeRowView, Screen, DETAIL_ERROR_MESSAGE, EMPTY_QUERY_PROMPT,
    INGREDIENT_LIMIT, NO_RECIPES_FOUND, SEARCH_ERROR_MESSAGE, SEARCH_LOADING_MESSAGE,
};

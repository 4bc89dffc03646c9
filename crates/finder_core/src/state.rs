use std::mem;

use crate::view_model::{
    AppViewModel, RecipeRowView, Screen, DETAIL_ERROR_MESSAGE, EMPTY_QUERY_PROMPT,
    INGREDIENT_LIMIT, NO_RECIPES_FOUND, SEARCH_ERROR_MESSAGE, SEARCH_LOADING_MESSAGE,
};
use crate::{
    parse_ingredients, Effect, IndexVariant, QueryError, QueryStore, RecipeDetail, SearchResult,
    SortKey,
};

/// Identifies one outgoing request so late completions can be told apart.
pub type RequestId = u64;

/// What the user currently sees. Replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Searching,
    Results(SearchResult),
    /// A single recipe, plus the result list it was opened from.
    Detail {
        recipe: RecipeDetail,
        results: SearchResult,
    },
    /// Search failed; carries the user-facing message.
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Input needs attention before anything is sent.
    Prompt,
    /// Message authored by the recipe service, shown verbatim.
    Application,
    /// Transport or decoding failure on a non-destructive request.
    Transport,
}

/// Transient message shown next to the current view without replacing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: QueryStore,
    view: ViewState,
    search_in_flight: Option<RequestId>,
    detail_in_flight: Option<RequestId>,
    next_request_id: RequestId,
    notice: Option<Notice>,
    /// Technical detail of the most recent failure, kept for diagnostics only.
    last_failure: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(sort_key: SortKey, index_variant: IndexVariant) -> Self {
        Self {
            query: QueryStore::with_defaults(sort_key, index_variant),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &QueryStore {
        &self.query
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn search_in_flight(&self) -> Option<RequestId> {
        self.search_in_flight
    }

    pub fn detail_in_flight(&self) -> Option<RequestId> {
        self.detail_in_flight
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let selected_tags: Vec<String> = self.query.tags().to_vec();
        let ingredient_count = parse_ingredients(self.query.ingredients_text()).len();

        let mut view = AppViewModel {
            screen: Screen::Idle,
            ingredients_text: self.query.ingredients_text().to_string(),
            ingredient_count,
            ingredients_over_limit: ingredient_count > INGREDIENT_LIMIT,
            selected_tags,
            sort_key: self.query.sort_key(),
            index_variant: self.query.index_variant(),
            detail_loading: self.detail_in_flight.is_some(),
            notice: self.notice.clone(),
            ..AppViewModel::default()
        };

        match &self.view {
            ViewState::Idle => {}
            ViewState::Searching => {
                view.screen = Screen::Searching;
                view.status_text = Some(SEARCH_LOADING_MESSAGE.to_string());
            }
            ViewState::Results(results) => {
                view.screen = Screen::Results;
                view.total_matches = results.total_matches;
                view.no_results = results.is_empty();
                view.status_text = Some(if results.is_empty() {
                    NO_RECIPES_FOUND.to_string()
                } else {
                    format!("{} recipes found!", results.total_matches)
                });
                view.rows = results
                    .recipes
                    .iter()
                    .enumerate()
                    .map(|(index, summary)| {
                        RecipeRowView::from_summary(index, summary, &view.selected_tags)
                    })
                    .collect();
            }
            ViewState::Detail { recipe, results } => {
                view.screen = Screen::Detail;
                view.total_matches = results.total_matches;
                view.detail = Some(recipe.clone());
            }
            ViewState::Error(message) => {
                view.screen = Screen::Error;
                view.status_text = Some(message.clone());
                view.error = Some(message.clone());
            }
        }

        view
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn query_mut(&mut self) -> &mut QueryStore {
        &mut self.query
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Snapshots the query and moves to `Searching`.
    ///
    /// Returns `None` without touching the view while a search is outstanding,
    /// while a recipe is open, or when the query is empty.
    pub(crate) fn begin_search(&mut self) -> Option<Effect> {
        match self.view {
            ViewState::Searching | ViewState::Detail { .. } => return None,
            ViewState::Idle | ViewState::Results(_) | ViewState::Error(_) => {}
        }
        if self.search_in_flight.is_some() {
            return None;
        }

        let query = match self.query.snapshot() {
            Ok(query) => query,
            Err(QueryError::EmptyQuery) => {
                self.notice = Some(Notice::new(NoticeKind::Prompt, EMPTY_QUERY_PROMPT));
                self.mark_dirty();
                return None;
            }
            Err(_) => return None,
        };

        let request_id = self.allocate_request_id();
        self.search_in_flight = Some(request_id);
        // Any outstanding detail belongs to the list being replaced.
        self.detail_in_flight = None;
        self.notice = None;
        self.view = ViewState::Searching;
        self.mark_dirty();
        Some(Effect::Search { request_id, query })
    }

    pub(crate) fn complete_search(&mut self, request_id: RequestId, result: SearchResult) {
        if self.search_in_flight != Some(request_id) {
            return;
        }
        self.search_in_flight = None;
        self.view = ViewState::Results(result);
        self.mark_dirty();
    }

    pub(crate) fn fail_search(&mut self, request_id: RequestId, detail: String) {
        if self.search_in_flight != Some(request_id) {
            return;
        }
        self.search_in_flight = None;
        self.last_failure = Some(detail);
        self.view = ViewState::Error(SEARCH_ERROR_MESSAGE.to_string());
        self.mark_dirty();
    }

    /// Starts a detail request for the result at `index`. A newer selection
    /// supersedes any request still outstanding.
    pub(crate) fn select_recipe(&mut self, index: usize) -> Option<Effect> {
        let ViewState::Results(results) = &self.view else {
            return None;
        };
        let recipe_name = results.recipes.get(index)?.name.clone();

        let request_id = self.allocate_request_id();
        self.detail_in_flight = Some(request_id);
        self.notice = None;
        self.mark_dirty();
        Some(Effect::FetchDetail {
            request_id,
            index_variant: self.query.index_variant(),
            recipe_name,
        })
    }

    /// Clears the outstanding detail request if `request_id` is it.
    fn settle_detail(&mut self, request_id: RequestId) -> bool {
        if self.detail_in_flight != Some(request_id) {
            return false;
        }
        self.detail_in_flight = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn complete_detail(&mut self, request_id: RequestId, recipe: RecipeDetail) {
        if !self.settle_detail(request_id) {
            return;
        }
        if let ViewState::Results(results) = &mut self.view {
            let results = mem::take(results);
            self.view = ViewState::Detail { recipe, results };
        }
    }

    pub(crate) fn reject_detail(&mut self, request_id: RequestId, message: String) {
        if self.settle_detail(request_id) {
            self.notice = Some(Notice::new(NoticeKind::Application, message));
        }
    }

    pub(crate) fn fail_detail(&mut self, request_id: RequestId, detail: String) {
        if self.settle_detail(request_id) {
            self.last_failure = Some(detail);
            self.notice = Some(Notice::new(NoticeKind::Transport, DETAIL_ERROR_MESSAGE));
        }
    }

    pub(crate) fn back_to_results(&mut self) {
        if let ViewState::Detail { results, .. } = &mut self.view {
            let results = mem::take(results);
            self.view = ViewState::Results(results);
            self.notice = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }
}

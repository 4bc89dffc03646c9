use std::time::Duration;

use finder_core::{Effect, Msg, RecipeDetail, RecipeSummary, RequestId, SearchQuery, SearchResult};
use finder_engine::{
    ClientError, ClientSettings, DetailResponse, EngineEvent, EngineHandle, RecipeRecord,
    RecipeSummaryRecord, SearchRequest, SearchResponse,
};
use finder_logging::{finder_debug, finder_info, finder_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search { request_id, query } => {
                    finder_info!(
                        "Search request_id={} ingredients={:?} tags={:?} sort={} index={}",
                        request_id,
                        query.ingredients,
                        query.tags,
                        query.sort_key,
                        query.index_variant
                    );
                    self.engine.search(request_id, search_request(&query));
                }
                Effect::FetchDetail {
                    request_id,
                    index_variant,
                    recipe_name,
                } => {
                    finder_info!(
                        "FetchDetail request_id={} index={} name={}",
                        request_id,
                        index_variant,
                        recipe_name
                    );
                    self.engine
                        .fetch_detail(request_id, index_variant.as_str(), recipe_name);
                }
            }
        }
    }

    /// Blocks up to `timeout` for the first completion, then collects any others.
    pub fn wait_messages(&self, timeout: Duration) -> Vec<Msg> {
        let Some(first) = self.engine.recv_timeout(timeout) else {
            return Vec::new();
        };
        finder_debug!("Completion for request {}", first.request_id());
        let mut messages = vec![event_to_msg(first)];
        messages.extend(self.drain_messages());
        messages
    }

    /// Collects every completion that arrived since the last call.
    pub fn drain_messages(&self) -> Vec<Msg> {
        let mut messages = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            finder_debug!("Completion for request {}", event.request_id());
            messages.push(event_to_msg(event));
        }
        messages
    }
}

pub(crate) fn search_request(query: &SearchQuery) -> SearchRequest {
    SearchRequest {
        ingredients: query.ingredients.clone(),
        sort_by: query.sort_key.as_str().to_string(),
        tags: query.tags.clone(),
        data_structure: query.index_variant.as_str().to_string(),
    }
}

pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => search_msg(request_id, result),
        EngineEvent::DetailCompleted { request_id, result } => detail_msg(request_id, result),
    }
}

fn search_msg(request_id: RequestId, result: Result<SearchResponse, ClientError>) -> Msg {
    match result {
        Ok(response) => {
            let result = match response.recipes {
                Some(records) => {
                    let recipes: Vec<RecipeSummary> =
                        records.into_iter().map(map_summary).collect();
                    let total_matches = response
                        .total_matches
                        .unwrap_or(recipes.len() as u64);
                    SearchResult {
                        recipes,
                        total_matches,
                    }
                }
                None => {
                    finder_info!("Search {} answered without recipes", request_id);
                    SearchResult::empty()
                }
            };
            finder_info!(
                "Search {} returned {} of {} matches",
                request_id,
                result.recipes.len(),
                result.total_matches
            );
            Msg::SearchSucceeded { request_id, result }
        }
        Err(err) => {
            finder_warn!("Search {} failed: {}", request_id, err);
            Msg::SearchFailed {
                request_id,
                detail: err.to_string(),
            }
        }
    }
}

fn detail_msg(request_id: RequestId, result: Result<DetailResponse, ClientError>) -> Msg {
    match result {
        Ok(DetailResponse::Found(record)) => Msg::DetailLoaded {
            request_id,
            recipe: map_detail(record),
        },
        Ok(DetailResponse::Rejected { error }) => {
            finder_info!("Detail {} rejected by service: {}", request_id, error);
            Msg::DetailRejected {
                request_id,
                message: error,
            }
        }
        Err(err) => {
            finder_warn!("Detail {} failed: {}", request_id, err);
            Msg::DetailFailed {
                request_id,
                detail: err.to_string(),
            }
        }
    }
}

fn map_summary(record: RecipeSummaryRecord) -> RecipeSummary {
    RecipeSummary {
        name: record.name,
        matched_ingredients: record.matched_ingredients,
        missing_ingredients: record.missing_ingredients,
        matched_tags: record.matched_tags,
        minutes: record.minutes,
        steps: record.n_steps.unwrap_or(0),
    }
}

fn map_detail(record: RecipeRecord) -> RecipeDetail {
    RecipeDetail {
        name: record.name,
        description: record.description.filter(|d| !d.trim().is_empty()),
        minutes: record.minutes,
        ingredients: record.ingredients,
        steps: record.steps,
        tags: record.tags,
    }
}

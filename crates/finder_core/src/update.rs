use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::IngredientsChanged(text) => {
            if state.query().ingredients_text() != text {
                state.query_mut().set_ingredients_text(text);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::TagToggled(tag) => {
            if state.query_mut().toggle_tag(&tag) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SortKeyChanged(key) => {
            if state.query().sort_key() != key {
                state.query_mut().set_sort_key(key);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::IndexVariantChanged(variant) => {
            if state.query().index_variant() != variant {
                state.query_mut().set_index_variant(variant);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchSubmitted => state.begin_search().into_iter().collect(),
        Msg::SearchSucceeded { request_id, result } => {
            state.complete_search(request_id, result);
            Vec::new()
        }
        Msg::SearchFailed { request_id, detail } => {
            state.fail_search(request_id, detail);
            Vec::new()
        }
        Msg::RecipeSelected { index } => state.select_recipe(index).into_iter().collect(),
        Msg::DetailLoaded { request_id, recipe } => {
            state.complete_detail(request_id, recipe);
            Vec::new()
        }
        Msg::DetailRejected {
            request_id,
            message,
        } => {
            state.reject_detail(request_id, message);
            Vec::new()
        }
        Msg::DetailFailed { request_id, detail } => {
            state.fail_detail(request_id, detail);
            Vec::new()
        }
        Msg::BackToResults => {
            state.back_to_results();
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
    };

    (state, effects)
}

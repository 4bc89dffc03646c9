use finder_core::{
    update, AppState, Effect, IndexVariant, Msg, NoticeKind, RecipeDetail, RecipeSummary,
    RequestId, Screen, SearchResult, ViewState, DETAIL_ERROR_MESSAGE,
};

fn init_logging() {
    finder_logging::initialize_for_tests();
}

fn results() -> SearchResult {
    let recipe = |name: &str, tags: &[&str]| RecipeSummary {
        name: name.to_string(),
        matched_ingredients: vec!["egg".to_string(), "flour".to_string()],
        missing_ingredients: vec!["sugar".to_string()],
        matched_tags: tags.iter().map(|t| t.to_string()).collect(),
        minutes: Some(45),
        steps: 7,
    };
    SearchResult {
        recipes: vec![
            recipe("Apple Pie", &["dessert", "baked"]),
            recipe("Crepes & Jam", &["breakfast"]),
        ],
        total_matches: 2,
    }
}

fn detail(name: &str) -> RecipeDetail {
    RecipeDetail {
        name: name.to_string(),
        description: Some("A classic.".to_string()),
        minutes: Some(45),
        ingredients: vec!["apples".to_string(), "flour".to_string()],
        steps: vec!["Peel".to_string(), "Bake".to_string()],
        tags: vec!["dessert".to_string()],
    }
}

/// Drives a fresh state into `Results` with the canned list.
fn state_with_results() -> AppState {
    let (state, _) = update(AppState::new(), Msg::IngredientsChanged("egg".to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let request_id = match effects.as_slice() {
        [Effect::Search { request_id, .. }] => *request_id,
        other => panic!("expected search effect, got {other:?}"),
    };
    let (mut state, _) = update(
        state,
        Msg::SearchSucceeded {
            request_id,
            result: results(),
        },
    );
    state.consume_dirty();
    state
}

fn select(state: AppState, index: usize) -> (AppState, RequestId) {
    let (state, effects) = update(state, Msg::RecipeSelected { index });
    match effects.as_slice() {
        [Effect::FetchDetail { request_id, .. }] => (state, *request_id),
        other => panic!("expected detail effect, got {other:?}"),
    }
}

#[test]
fn selecting_uses_current_index_variant_and_name() {
    init_logging();
    let (state, _) = update(
        state_with_results(),
        Msg::IndexVariantChanged(IndexVariant::HashMap),
    );
    let (state, effects) = update(state, Msg::RecipeSelected { index: 1 });

    assert_eq!(
        effects,
        vec![Effect::FetchDetail {
            request_id: 2,
            index_variant: IndexVariant::HashMap,
            recipe_name: "Crepes & Jam".to_string(),
        }]
    );
    // Still showing the list while the detail loads.
    assert_eq!(state.view_state(), &ViewState::Results(results()));
    assert!(state.view().detail_loading);
}

#[test]
fn out_of_range_selection_is_ignored() {
    init_logging();
    let (mut state, effects) = update(state_with_results(), Msg::RecipeSelected { index: 9 });
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn selection_outside_results_is_ignored() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::RecipeSelected { index: 0 });
    assert!(effects.is_empty());
}

#[test]
fn detail_round_trip_preserves_results() {
    init_logging();
    let before = results();
    let (state, id) = select(state_with_results(), 0);
    assert_eq!(state.detail_in_flight(), Some(id));
    assert!(state.view().detail_loading);

    let (state, _) = update(
        state,
        Msg::DetailLoaded {
            request_id: id,
            recipe: detail("Apple Pie"),
        },
    );
    let view = state.view();
    assert_eq!(view.screen, Screen::Detail);
    assert_eq!(view.detail, Some(detail("Apple Pie")));
    assert!(!view.detail_loading);
    assert_eq!(state.detail_in_flight(), None);

    let (state, effects) = update(state, Msg::BackToResults);
    assert!(effects.is_empty());
    assert_eq!(state.view_state(), &ViewState::Results(before.clone()));
    assert_eq!(state.view().total_matches, before.total_matches);
}

#[test]
fn detail_error_field_keeps_results_and_raises_notice() {
    init_logging();
    let (state, id) = select(state_with_results(), 0);

    let (state, _) = update(
        state,
        Msg::DetailRejected {
            request_id: id,
            message: "not found".to_string(),
        },
    );

    assert_eq!(state.view_state(), &ViewState::Results(results()));
    let notice = state.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Application);
    assert!(notice.text.contains("not found"));
    assert_eq!(state.view().screen, Screen::Results);
}

#[test]
fn detail_transport_failure_keeps_results() {
    init_logging();
    let (state, id) = select(state_with_results(), 1);

    let (state, _) = update(
        state,
        Msg::DetailFailed {
            request_id: id,
            detail: "http status 500".to_string(),
        },
    );

    assert_eq!(state.view_state(), &ViewState::Results(results()));
    assert_eq!(state.last_failure(), Some("http status 500"));
    let notice = state.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Transport);
    assert_eq!(notice.text, DETAIL_ERROR_MESSAGE);

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert_eq!(state.notice(), None);
}

#[test]
fn newer_selection_supersedes_older_detail() {
    init_logging();
    let (state, first) = select(state_with_results(), 0);
    let (state, second) = select(state, 1);

    let (state, _) = update(
        state,
        Msg::DetailLoaded {
            request_id: first,
            recipe: detail("Apple Pie"),
        },
    );
    assert_eq!(state.view().screen, Screen::Results);

    let (state, _) = update(
        state,
        Msg::DetailLoaded {
            request_id: second,
            recipe: detail("Crepes & Jam"),
        },
    );
    assert_eq!(state.view().detail.map(|d| d.name), Some("Crepes & Jam".into()));
}

#[test]
fn stale_detail_cannot_clobber_a_new_search() {
    init_logging();
    let (state, detail_id) = select(state_with_results(), 0);

    // A new search starts before the detail answers.
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let search_id = match effects.as_slice() {
        [Effect::Search { request_id, .. }] => *request_id,
        other => panic!("expected search effect, got {other:?}"),
    };

    let (state, _) = update(
        state,
        Msg::DetailLoaded {
            request_id: detail_id,
            recipe: detail("Apple Pie"),
        },
    );
    assert_eq!(state.view_state(), &ViewState::Searching);

    let fresh = SearchResult {
        recipes: Vec::new(),
        total_matches: 0,
    };
    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            request_id: search_id,
            result: fresh.clone(),
        },
    );
    let (state, _) = update(
        state,
        Msg::DetailRejected {
            request_id: detail_id,
            message: "late".to_string(),
        },
    );
    assert_eq!(state.view_state(), &ViewState::Results(fresh));
    assert_eq!(state.notice(), None);
}

#[test]
fn search_is_ignored_while_detail_is_open() {
    init_logging();
    let (state, id) = select(state_with_results(), 0);
    let (state, _) = update(
        state,
        Msg::DetailLoaded {
            request_id: id,
            recipe: detail("Apple Pie"),
        },
    );

    let (state, effects) = update(state, Msg::SearchSubmitted);
    assert!(effects.is_empty());
    assert_eq!(state.view().screen, Screen::Detail);
}

#[test]
fn back_outside_detail_is_noop() {
    init_logging();
    let state = state_with_results();
    let (next, effects) = update(state.clone(), Msg::BackToResults);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn row_tags_follow_selected_tags() {
    init_logging();
    let state = state_with_results();
    let view = state.view();
    assert_eq!(view.rows[0].tags, vec!["dessert", "baked"]);

    let (state, _) = update(state, Msg::TagToggled("baked".to_string()));
    let view = state.view();
    assert_eq!(view.rows[0].tags, vec!["baked"]);
    assert!(view.rows[1].tags.is_empty());
}

use finder_core::{
    AppViewModel, NoticeKind, RecipeDetail, RecipeRowView, Screen, INGREDIENT_LIMIT,
    TAG_VOCABULARY,
};

use super::constants::{BACK_HINT, DETAIL_LOADING, IDLE_HINT, NO_RESULTS_HINT};

/// Renders the whole view as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(query_line(view));
    if view.ingredients_over_limit {
        lines.push(format!(
            "Note: {} ingredients entered; the service only uses the first {}.",
            view.ingredient_count, INGREDIENT_LIMIT
        ));
    }
    if let Some(notice) = &view.notice {
        let prefix = match notice.kind {
            NoticeKind::Prompt => "!",
            NoticeKind::Application | NoticeKind::Transport => "Error:",
        };
        lines.push(format!("{prefix} {}", notice.text));
    }

    match view.screen {
        Screen::Idle => lines.push(IDLE_HINT.to_string()),
        Screen::Searching => lines.extend(view.status_text.clone()),
        Screen::Results => {
            lines.extend(view.status_text.clone());
            if view.no_results {
                lines.push(NO_RESULTS_HINT.to_string());
            } else {
                let noun = if view.rows.len() == 1 {
                    "recipe"
                } else {
                    "recipes"
                };
                lines.push(format!("Showing {} {noun}", view.rows.len()));
            }
            for row in &view.rows {
                lines.extend(render_row(row));
            }
            if view.detail_loading {
                lines.push(DETAIL_LOADING.to_string());
            }
        }
        Screen::Detail => {
            if let Some(detail) = &view.detail {
                lines.extend(render_detail(detail));
            }
        }
        Screen::Error => {
            if let Some(error) = &view.error {
                lines.push(format!("Error: {error}"));
            }
        }
    }

    lines
}

/// Lists the tag vocabulary, marking the selected ones.
pub fn render_tags(view: &AppViewModel) -> Vec<String> {
    TAG_VOCABULARY
        .chunks(4)
        .map(|chunk| {
            chunk
                .iter()
                .map(|tag| {
                    let mark = if view.selected_tags.iter().any(|t| t == tag) {
                        'x'
                    } else {
                        ' '
                    };
                    format!("[{mark}] {tag:<14}")
                })
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}

fn query_line(view: &AppViewModel) -> String {
    let ingredients = if view.ingredients_text.trim().is_empty() {
        "(none)"
    } else {
        view.ingredients_text.trim()
    };
    let tags = if view.selected_tags.is_empty() {
        "(none)".to_string()
    } else {
        view.selected_tags.join(", ")
    };
    format!(
        "Ingredients: {ingredients} | Tags: {tags} | Sort: {} | Index: {}",
        view.sort_key.label(),
        view.index_variant.label()
    )
}

fn render_row(row: &RecipeRowView) -> Vec<String> {
    let mut lines = vec![
        format!("[{}] {}", row.index + 1, row.name),
        format!("    Matching ingredients: {}", list_or_none(&row.matched_ingredients)),
        format!("    Missing ingredients: {}", list_or_none(&row.missing_ingredients)),
        format!(
            "    Total time: {} | Steps: {}",
            format_minutes(row.minutes),
            row.steps
        ),
    ];
    if !row.tags.is_empty() {
        let tags: Vec<String> = row.tags.iter().map(|t| capitalize(t)).collect();
        lines.push(format!("    Tags: {}", tags.join(", ")));
    }
    lines
}

fn render_detail(detail: &RecipeDetail) -> Vec<String> {
    let mut lines = vec![
        detail.name.clone(),
        format!(
            "Description: {}",
            detail
                .description
                .as_deref()
                .unwrap_or("Description not available")
        ),
        format!("Time: {}", format_minutes(detail.minutes)),
    ];
    if !detail.tags.is_empty() {
        let tags: Vec<String> = detail.tags.iter().map(|t| capitalize(t)).collect();
        lines.push(format!("Tags: {}", tags.join(", ")));
    }
    lines.push("Ingredients:".to_string());
    lines.extend(
        detail
            .ingredients
            .iter()
            .map(|ingredient| format!("  - {}", capitalize(ingredient))),
    );
    lines.push("Steps:".to_string());
    lines.extend(
        detail
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("  {}. {step}", i + 1)),
    );
    lines.push(BACK_HINT.to_string());
    lines
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "1 hour 5 minutes"; `N/A` when unknown or zero.
pub fn format_minutes(minutes: Option<u64>) -> String {
    let Some(total) = minutes.filter(|m| *m > 0) else {
        return "N/A".to_string();
    };
    let hours = total / 60;
    let rest = total % 60;

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(format!("{hours} hour{}", if hours > 1 { "s" } else { "" }));
    }
    if rest > 0 {
        parts.push(format!("{rest} minute{}", if rest > 1 { "s" } else { "" }));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::{update, AppState, Effect, Msg, RecipeSummary, SearchResult};

    fn results_view() -> AppViewModel {
        let (state, _) = update(AppState::new(), Msg::IngredientsChanged("egg".into()));
        let (state, effects) = update(state, Msg::SearchSubmitted);
        let Some(Effect::Search { request_id, .. }) = effects.first().cloned() else {
            panic!("expected search effect");
        };
        let (state, _) = update(
            state,
            Msg::SearchSucceeded {
                request_id,
                result: SearchResult {
                    recipes: vec![RecipeSummary {
                        name: "Omelette".into(),
                        matched_ingredients: vec!["egg".into()],
                        missing_ingredients: Vec::new(),
                        matched_tags: vec!["breakfast".into()],
                        minutes: Some(65),
                        steps: 3,
                    }],
                    total_matches: 1,
                },
            },
        );
        state.view()
    }

    #[test]
    fn minutes_format_like_a_sentence() {
        assert_eq!(format_minutes(Some(65)), "1 hour 5 minutes");
        assert_eq!(format_minutes(Some(120)), "2 hours");
        assert_eq!(format_minutes(Some(1)), "1 minute");
        assert_eq!(format_minutes(Some(0)), "N/A");
        assert_eq!(format_minutes(None), "N/A");
    }

    #[test]
    fn results_render_rows_with_numbers() {
        let lines = render(&results_view());
        assert_eq!(
            lines,
            vec![
                "Ingredients: egg | Tags: (none) | Sort: Matched Ingredients | Index: Trie",
                "1 recipes found!",
                "Showing 1 recipe",
                "[1] Omelette",
                "    Matching ingredients: egg",
                "    Missing ingredients: None",
                "    Total time: 1 hour 5 minutes | Steps: 3",
                "    Tags: Breakfast",
            ]
        );
    }

    #[test]
    fn idle_view_shows_hint() {
        let lines = render(&AppState::new().view());
        assert_eq!(lines.last().map(String::as_str), Some(IDLE_HINT));
    }

    #[test]
    fn detail_lists_ingredients_and_numbered_steps() {
        let lines = render_detail(&RecipeDetail {
            name: "Toast".into(),
            description: None,
            minutes: Some(5),
            ingredients: vec!["bread".into()],
            steps: vec!["Toast the bread".into(), "Butter it".into()],
            tags: Vec::new(),
        });
        assert_eq!(
            lines,
            vec![
                "Toast",
                "Description: Description not available",
                "Time: 5 minutes",
                "Ingredients:",
                "  - Bread",
                "Steps:",
                "  1. Toast the bread",
                "  2. Butter it",
                BACK_HINT,
            ]
        );
    }

    #[test]
    fn detail_shows_tags_when_present() {
        let lines = render_detail(&RecipeDetail {
            name: "Salad".into(),
            description: Some("Crisp and green".into()),
            minutes: None,
            ingredients: vec!["lettuce".into()],
            steps: vec!["Toss".into()],
            tags: vec!["vegan".into(), "low-calorie".into()],
        });
        assert_eq!(lines[1], "Description: Crisp and green");
        assert_eq!(lines[2], "Time: N/A");
        assert_eq!(lines[3], "Tags: Vegan, Low-calorie");
        assert_eq!(lines[4], "Ingredients:");
    }

    #[test]
    fn empty_results_suggest_broadening_the_query() {
        let (state, _) = update(
            AppState::new(),
            Msg::IngredientsChanged("unobtainium".into()),
        );
        let (state, effects) = update(state, Msg::SearchSubmitted);
        let Some(Effect::Search { request_id, .. }) = effects.first().cloned() else {
            panic!("expected search effect");
        };
        let (state, _) = update(
            state,
            Msg::SearchSucceeded {
                request_id,
                result: SearchResult::empty(),
            },
        );
        let lines = render(&state.view());
        assert_eq!(&lines[1..], &["No recipes found", NO_RESULTS_HINT]);
    }

    #[test]
    fn tag_listing_marks_selection() {
        let (state, _) = update(AppState::new(), Msg::TagToggled("vegan".into()));
        let lines = render_tags(&state.view());
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("[x] vegan"));
        assert!(lines[0].contains("[ ] vegetarian"));
    }
}

use finder_core::{
    normalize, parse_ingredients, IndexVariant, QueryError, SortKey, TagSet, TAG_VOCABULARY,
};
use proptest::prelude::*;

fn vocabulary_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TAG_VOCABULARY.to_vec())
}

proptest! {
    #[test]
    fn parsed_ingredients_are_never_blank(raw in ".*") {
        for ingredient in parse_ingredients(&raw) {
            prop_assert!(!ingredient.is_empty());
            prop_assert_eq!(ingredient.trim(), ingredient.as_str());
        }
    }

    #[test]
    fn comma_joined_tokens_survive_in_order(
        tokens in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8})?", 0..12),
    ) {
        let raw = tokens.join(" , ");
        prop_assert_eq!(parse_ingredients(&raw), tokens);
    }

    #[test]
    fn toggling_twice_restores_membership(
        prefix in prop::collection::vec(vocabulary_tag(), 0..10),
        tag in vocabulary_tag(),
    ) {
        let mut tags = TagSet::new();
        for t in &prefix {
            tags.toggle(t);
        }
        let before: Vec<&str> = {
            let mut v: Vec<_> = tags.iter().collect();
            v.sort_unstable();
            v
        };

        tags.toggle(tag);
        tags.toggle(&tag.to_uppercase());

        let mut after: Vec<&str> = tags.iter().collect();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn normalize_rejects_only_fully_empty_queries(raw in "[ ,]*[a-z]{0,3}[ ,]*") {
        let result = normalize(&raw, &TagSet::new(), SortKey::default(), IndexVariant::default());
        if raw.chars().any(|c| c.is_ascii_alphabetic()) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(QueryError::EmptyQuery));
        }
    }
}

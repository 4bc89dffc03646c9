/// Every tag the search service understands, in display order.
pub const TAG_VOCABULARY: [&str; 32] = [
    "vegan",
    "vegetarian",
    "gluten-free",
    "low-carb",
    "high-protein",
    "dairy-free",
    "nut-free",
    "low-fat",
    "italian",
    "mexican",
    "indian",
    "chinese",
    "mediterranean",
    "american",
    "thai",
    "japanese",
    "breakfast",
    "lunch",
    "dinner",
    "snack",
    "dessert",
    "grilled",
    "baked",
    "fried",
    "roasted",
    "slow-cooked",
    "raw",
    "spicy",
    "sweet",
    "savory",
    "sour",
    "salty",
];

/// Returns the vocabulary entry matching `tag` after trimming and lower-casing.
pub(crate) fn canonical_tag(tag: &str) -> Option<&'static str> {
    let wanted = tag.trim().to_lowercase();
    TAG_VOCABULARY
        .iter()
        .copied()
        .find(|known| *known == wanted)
}

pub fn is_known_tag(tag: &str) -> bool {
    canonical_tag(tag).is_some()
}

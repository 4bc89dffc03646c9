pub const PROMPT: &str = "> ";

pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  ingredients <a, b, c>   set the comma-separated ingredient list (alias: i)",
    "  tag <name>              toggle a tag on or off (alias: t)",
    "  tags                    list every tag and whether it is selected",
    "  sort <key>              matched_ingredients | total_time | num_steps",
    "  index <variant>         trie | hashmap",
    "  search [a, b, c]        search, optionally setting ingredients first (alias: s)",
    "  open <n>                show full detail for result n (alias: o)",
    "  back                    return from a recipe to the results",
    "  dismiss                 clear the current notice",
    "  help                    show this help (alias: ?)",
    "  quit                    leave (alias: q, exit)",
];

pub const IDLE_HINT: &str = "Enter some ingredients, then type `search`. Type `help` for commands.";
pub const DETAIL_LOADING: &str = "Loading recipe details...";
pub const NO_RESULTS_HINT: &str = "Try fewer ingredients or different tags.";
pub const BACK_HINT: &str = "(type `back` to return to the results)";

use crate::{IndexVariant, RecipeDetail, RequestId, SearchResult, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the ingredient input (raw, comma separated).
    IngredientsChanged(String),
    /// User clicked a tag toggle.
    TagToggled(String),
    SortKeyChanged(SortKey),
    IndexVariantChanged(IndexVariant),
    /// User asked for a search with the current query.
    SearchSubmitted,
    /// Search request finished with a well-formed body.
    SearchSucceeded {
        request_id: RequestId,
        result: SearchResult,
    },
    /// Search request failed in transport or returned an unparseable body.
    SearchFailed {
        request_id: RequestId,
        detail: String,
    },
    /// User picked the result at `index` from the current list.
    RecipeSelected { index: usize },
    DetailLoaded {
        request_id: RequestId,
        recipe: RecipeDetail,
    },
    /// Detail endpoint answered with an explicit `error` message.
    DetailRejected {
        request_id: RequestId,
        message: String,
    },
    /// Detail request failed in transport or returned an unparseable body.
    DetailFailed {
        request_id: RequestId,
        detail: String,
    },
    /// User left the detail view.
    BackToResults,
    /// User dismissed the current notice.
    NoticeDismissed,
}

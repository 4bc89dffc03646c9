use crate::{IndexVariant, RequestId, SearchQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the query to the search endpoint.
    Search {
        request_id: RequestId,
        query: SearchQuery,
    },
    /// GET one recipe from the detail endpoint.
    FetchDetail {
        request_id: RequestId,
        index_variant: IndexVariant,
        recipe_name: String,
    },
}

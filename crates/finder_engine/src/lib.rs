//! Recipe finder engine: HTTP client for the recipe service and effect execution.
mod client;
mod engine;
mod types;
mod wire;

pub use client::{detail_url, search_url, ClientSettings, RecipeClient, ReqwestRecipeClient};
pub use engine::EngineHandle;
pub use types::{ClientError, EngineEvent, FailureKind, RequestId};
pub use wire::{DetailResponse, RecipeRecord, RecipeSummaryRecord, SearchRequest, SearchResponse};

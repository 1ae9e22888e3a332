mod orchestrator;
mod query;

pub use orchestrator::{search_all_halls, SearchReport};
pub use query::{MatchSet, SearchQuery};

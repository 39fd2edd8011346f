//! Domain models shared by the engine and the orchestration layer.

mod classification;
mod criteria;
mod organization;
mod search;

pub use classification::{ClassificationResult, SOURCE_SEPARATOR};
pub use criteria::{KeywordSet, MatchCriteria};
pub use organization::OrganizationRow;
pub use search::{SearchResponse, SearchResultRecord};

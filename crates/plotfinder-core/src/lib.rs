pub mod config;
pub mod logging;

pub mod error;
pub mod export;
pub mod extractor;
pub mod provider;
pub mod query;
pub mod resolver;
pub mod retrieve;
pub mod types;

pub use error::{PlotError, ProviderError};
pub use provider::{EncyclopediaProvider, WikipediaProvider};
pub use retrieve::{retrieve_plot, RetrievalSettings};
pub use types::{Article, CandidateMatch, PageId, PlotResult, Retrieval, Section};

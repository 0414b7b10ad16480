//! Business logic services module.

pub mod chain_query;
pub mod outcome;

pub use chain_query::{ChainQueryService, TX_STATUS_UNAVAILABLE};
pub use outcome::{ToolOutcome, FALLBACK_ERROR_MESSAGE};

//! The Bounded Concurrent Paginator: discovery call, capped page queue,
//! fixed-size worker pool, repo-keyed deduplication.

pub mod dedup;
pub mod search;

pub use search::paginate;

//! The discovery task: search for a keyword, emit one entity per distinct
//! repository into a caller-supplied sink.
//!
//! Entity creation lives behind the [`EntitySink`] trait so the host
//! framework's entity model stays an external collaborator and the task is
//! testable with an in-memory sink.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fetch::PageFetcher;

/// Entity kinds this task can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A project hosted on a GitLab instance.
    GitlabProject,
}

/// A discovered entity handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// What kind of entity was discovered.
    pub kind: EntityKind,
    /// Entity name — for [`EntityKind::GitlabProject`], the repo name.
    pub name: String,
}

/// Receives discovered entities.
///
/// The host framework implements this against its entity-creation API;
/// tests implement it with a plain `Vec`.
pub trait EntitySink {
    /// Record one discovered entity.
    fn create_entity(&mut self, entity: Entity);
}

/// Static description of the task, for host-framework registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMetadata {
    /// Machine name of the task.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Reference documentation URLs.
    pub references: &'static [&'static str],
    /// Whether the task touches only third-party services, never the target.
    pub passive: bool,
    /// Input entity kinds the task accepts.
    pub allowed_types: &'static [&'static str],
    /// Entity kinds the task can create.
    pub created_types: &'static [&'static str],
}

/// Metadata for the Searchcode discovery task.
pub fn metadata() -> TaskMetadata {
    TaskMetadata {
        name: "search_searchcode",
        description: "Uses the Searchcode API to find a keyword in public repositories.",
        references: &["https://searchcode.com/api/"],
        passive: true,
        allowed_types: &["UniqueToken", "String"],
        created_types: &["GitlabProject"],
    }
}

/// Run the discovery task for one keyword.
///
/// Searches, logs the distinct-repo count, and creates one
/// [`EntityKind::GitlabProject`] entity per distinct repository. An empty
/// result set creates nothing. Returns the number of entities created.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for invalid configuration or an empty
/// keyword; all transport and decode failures are absorbed by the search
/// itself.
pub async fn run<F, S>(
    keyword: &str,
    config: &SearchConfig,
    fetcher: &F,
    sink: &mut S,
) -> Result<usize, SearchError>
where
    F: PageFetcher,
    S: EntitySink,
{
    let matches = crate::search(keyword, config, fetcher).await?;
    tracing::info!(count = matches.len(), "obtained results");

    if matches.is_empty() {
        return Ok(0);
    }

    let count = matches.len();
    for record in matches {
        sink.create_entity(Entity {
            kind: EntityKind::GitlabProject,
            name: record.repo,
        });
    }
    Ok(count)
}

//! Result deduplication by repository name.
//!
//! Many matches on many pages can point at the same repository; downstream
//! entity creation wants one record per distinct `repo`. The first record
//! seen for a repo is kept — inputs are order-insensitive, so which
//! representative survives is deliberately unspecified.

use std::collections::HashMap;

use crate::types::CodeMatch;

/// Deduplicate code matches by their `repo` field.
///
/// Keeps one representative per distinct repository. The output order is
/// **not** guaranteed. Running this twice yields the same set as running
/// it once.
pub fn dedup_by_repo(matches: Vec<CodeMatch>) -> Vec<CodeMatch> {
    let mut seen: HashMap<String, CodeMatch> = HashMap::with_capacity(matches.len());

    for record in matches {
        seen.entry(record.repo.clone()).or_insert(record);
    }

    seen.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_match(repo: &str, filename: &str) -> CodeMatch {
        serde_json::from_value(serde_json::json!({
            "repo": repo,
            "filename": filename,
        }))
        .expect("valid match")
    }

    #[test]
    fn unique_repos_pass_through() {
        let matches = vec![make_match("org/a", "a.rs"), make_match("org/b", "b.rs")];
        let deduped = dedup_by_repo(matches);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn duplicate_repos_merged() {
        let matches = vec![
            make_match("org/a", "lib.rs"),
            make_match("org/a", "main.rs"),
            make_match("org/b", "b.rs"),
        ];
        let deduped = dedup_by_repo(matches);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn first_representative_kept() {
        let matches = vec![
            make_match("org/a", "first.rs"),
            make_match("org/a", "second.rs"),
        ];
        let deduped = dedup_by_repo(matches);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].filename.as_deref(), Some("first.rs"));
    }

    #[test]
    fn dedup_is_idempotent() {
        let matches = vec![
            make_match("org/a", "a.rs"),
            make_match("org/b", "b.rs"),
            make_match("org/a", "dup.rs"),
        ];
        let once = dedup_by_repo(matches);
        let mut twice = dedup_by_repo(once.clone());

        let mut once_repos: Vec<&str> = once.iter().map(|m| m.repo.as_str()).collect();
        let mut twice_repos: Vec<&str> = twice.iter().map(|m| m.repo.as_str()).collect();
        once_repos.sort_unstable();
        twice_repos.sort_unstable();
        assert_eq!(once_repos, twice_repos);

        twice.sort_by(|a, b| a.repo.cmp(&b.repo));
        assert_eq!(twice.len(), 2);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(dedup_by_repo(vec![]).is_empty());
    }

    #[test]
    fn single_match_passes_through() {
        let deduped = dedup_by_repo(vec![make_match("org/solo", "solo.rs")]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].repo, "org/solo");
    }
}

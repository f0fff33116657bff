//! GitHub-backed pull request source.
//!
//! Lists the open pull requests of one repository through the GitHub REST
//! API, keeping those whose labels contain every configured label.

mod models;

pub use models::{HeadRef, Label, PullRequestItem};

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};

use crate::source::{PullRequest, PullRequestSource, SourceError};

/// API endpoint used when no explicit host is configured.
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Pull requests requested per page.
const PAGE_SIZE: u8 = 100;

/// Lists labeled open pull requests from one GitHub repository.
///
/// Configuration is fixed at construction. Every [`list`] call starts from
/// the first page and re-fetches the full listing; nothing is cached
/// across calls.
///
/// [`list`]: PullRequestSource::list
pub struct GithubLister {
    client: Octocrab,
    owner: String,
    repo: String,
    labels: Vec<String>,
}

impl GithubLister {
    /// Builds a lister bound to one repository on github.com or a GitHub
    /// Enterprise host.
    ///
    /// # Arguments
    ///
    /// * `url` - API host URL; `None` selects github.com
    /// * `token` - Personal access token used for authentication
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `labels` - Labels a pull request must carry to be listed
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::ClientInitialization`] when the host URL is
    /// malformed or the client cannot be constructed.
    pub fn new(
        url: Option<String>,
        token: String,
        owner: String,
        repo: String,
        labels: Vec<String>,
    ) -> Result<Self, SourceError> {
        let host = url.clone().unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut builder = Octocrab::builder().personal_token(token);
        if let Some(url) = &url {
            builder = builder
                .base_uri(url.as_str())
                .map_err(|e| SourceError::client_initialization(&host, e))?;
        }
        let client = builder
            .build()
            .map_err(|e| SourceError::client_initialization(&host, e))?;

        Ok(Self {
            client,
            owner,
            repo,
            labels,
        })
    }

    fn list_error(&self, source: octocrab::Error) -> SourceError {
        SourceError::list(&self.owner, &self.repo, source)
    }
}

/// Query parameters for the pull request list endpoint.
#[derive(Serialize)]
struct ListParams {
    state: &'static str,
    per_page: u8,
}

#[async_trait]
impl PullRequestSource for GithubLister {
    async fn list(&self) -> Result<Vec<PullRequest>, SourceError> {
        let span = info_span!("list_pull_requests", owner = %self.owner, repo = %self.repo);

        async {
            let route = format!("/repos/{}/{}/pulls", self.owner, self.repo);
            let params = ListParams {
                state: "open",
                per_page: PAGE_SIZE,
            };

            let mut pull_requests = Vec::new();
            let mut page: Page<PullRequestItem> = self
                .client
                .get(&route, Some(&params))
                .await
                .map_err(|e| self.list_error(e))?;

            loop {
                debug!(fetched = page.items.len(), "Fetched page of pull requests");
                pull_requests.extend(matching_pull_requests(&self.labels, &page.items));

                match self
                    .client
                    .get_page::<PullRequestItem>(&page.next)
                    .await
                    .map_err(|e| self.list_error(e))?
                {
                    Some(next) => page = next,
                    None => break,
                }
            }

            info!(count = pull_requests.len(), "Pull request listing complete");
            Ok(pull_requests)
        }
        .instrument(span)
        .await
    }
}

/// Filters a page down to the pull requests carrying every required label.
fn matching_pull_requests(required: &[String], items: &[PullRequestItem]) -> Vec<PullRequest> {
    items
        .iter()
        .filter(|item| has_required_labels(required, &item.labels))
        .map(|item| PullRequest {
            number: item.number,
            branch: item.head.branch.clone(),
            head_sha: item.head.sha.clone(),
        })
        .collect()
}

/// Returns true when `labels` contains every name in `required`.
///
/// An empty required set matches everything. Unnamed labels are skipped as
/// match candidates rather than treated as an error.
fn has_required_labels(required: &[String], labels: &[Label]) -> bool {
    required.iter().all(|name| {
        labels
            .iter()
            .any(|label| label.name.as_deref() == Some(name.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Label {
        Label {
            name: Some(name.to_string()),
        }
    }

    fn unnamed() -> Label {
        Label { name: None }
    }

    fn required(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn matches_when_labels_are_a_superset() {
        let labels = vec![named("preview"), named("bug")];

        assert!(has_required_labels(&required(&["preview"]), &labels));
        assert!(has_required_labels(&required(&["preview", "bug"]), &labels));
    }

    #[test]
    fn rejects_when_a_required_label_is_missing() {
        let labels = vec![named("bug")];

        assert!(!has_required_labels(&required(&["preview"]), &labels));
        assert!(!has_required_labels(&required(&["bug", "preview"]), &labels));
    }

    #[test]
    fn empty_required_set_matches_everything() {
        assert!(has_required_labels(&[], &[]));
        assert!(has_required_labels(&[], &[named("anything")]));
        assert!(has_required_labels(&[], &[unnamed()]));
    }

    #[test]
    fn unnamed_labels_are_skipped_not_matched() {
        let labels = vec![unnamed(), named("preview")];

        assert!(has_required_labels(&required(&["preview"]), &labels));
        assert!(!has_required_labels(&required(&["bug"]), &labels));
    }

    #[test]
    fn maps_surviving_items_to_output_records() {
        let items = vec![
            PullRequestItem {
                number: 1,
                head: HeadRef {
                    branch: "feature/one".to_string(),
                    sha: "abc123".to_string(),
                },
                labels: vec![named("preview"), named("bug")],
            },
            PullRequestItem {
                number: 2,
                head: HeadRef {
                    branch: "feature/two".to_string(),
                    sha: "def456".to_string(),
                },
                labels: vec![named("bug")],
            },
        ];

        let matches = matching_pull_requests(&required(&["preview"]), &items);

        assert_eq!(
            matches,
            vec![PullRequest {
                number: 1,
                branch: "feature/one".to_string(),
                head_sha: "abc123".to_string(),
            }]
        );
    }

    #[test]
    fn deserializes_items_with_null_label_names() {
        let item: PullRequestItem = serde_json::from_value(serde_json::json!({
            "number": 9,
            "state": "open",
            "head": { "ref": "feature/nine", "sha": "9999999", "label": "acme:feature/nine" },
            "labels": [{ "name": null, "color": "ededed" }, { "name": "preview" }],
        }))
        .unwrap();

        assert_eq!(item.number, 9);
        assert_eq!(item.head.branch, "feature/nine");
        assert_eq!(item.labels[0].name, None);
        assert_eq!(item.labels[1].name.as_deref(), Some("preview"));
    }

    #[test]
    fn deserializes_items_without_labels() {
        let item: PullRequestItem = serde_json::from_value(serde_json::json!({
            "number": 5,
            "head": { "ref": "chore/cleanup", "sha": "5555555" },
        }))
        .unwrap();

        assert!(item.labels.is_empty());
    }

    #[test]
    fn rejects_malformed_host_url() {
        let err = GithubLister::new(
            Some("not a url".to_string()),
            "token".to_string(),
            "acme".to_string(),
            "widgets".to_string(),
            Vec::new(),
        )
        .unwrap_err();

        assert!(matches!(err, SourceError::ClientInitialization { .. }));
        assert!(err.to_string().contains("not a url"));
    }
}

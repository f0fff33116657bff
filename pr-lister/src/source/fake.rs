//! In-memory pull request source.

use async_trait::async_trait;

use super::{PullRequest, PullRequestSource, SourceError};

/// A canned source that serves a fixed result set, or fails every call.
///
/// Stands in for a hosting platform in tests of the consuming pipeline.
#[derive(Debug, Clone, Default)]
pub struct FakeSource {
    pull_requests: Vec<PullRequest>,
    failure: Option<Failure>,
}

#[derive(Debug, Clone)]
struct Failure {
    owner: String,
    repo: String,
    message: String,
}

impl FakeSource {
    /// Creates a source that yields the given pull requests on every call.
    pub fn new(pull_requests: Vec<PullRequest>) -> Self {
        Self {
            pull_requests,
            failure: None,
        }
    }

    /// Creates a source that fails every listing with the given message.
    pub fn failing(owner: impl Into<String>, repo: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pull_requests: Vec::new(),
            failure: Some(Failure {
                owner: owner.into(),
                repo: repo.into(),
                message: message.into(),
            }),
        }
    }
}

#[async_trait]
impl PullRequestSource for FakeSource {
    async fn list(&self) -> Result<Vec<PullRequest>, SourceError> {
        if let Some(failure) = &self.failure {
            return Err(SourceError::list(
                &failure.owner,
                &failure.repo,
                std::io::Error::other(failure.message.clone()),
            ));
        }
        Ok(self.pull_requests.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pull_request() -> PullRequest {
        PullRequest {
            number: 7,
            branch: "feature/login".to_string(),
            head_sha: "0a1b2c3d".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_canned_results_through_trait_object() {
        let source: Box<dyn PullRequestSource> =
            Box::new(FakeSource::new(vec![sample_pull_request()]));

        let listed = source.list().await.unwrap();

        assert_eq!(listed, vec![sample_pull_request()]);
    }

    #[tokio::test]
    async fn failing_source_reports_repository_context() {
        let source = FakeSource::failing("acme", "widgets", "boom");

        let err = source.list().await.unwrap_err();

        assert!(matches!(err, SourceError::List { .. }));
        assert!(err.to_string().contains("acme/widgets"));
    }
}

//! The pull request source capability.
//!
//! A source produces the current set of open pull requests for one
//! configured repository, filtered to those carrying a required set of
//! labels. The GitHub-backed implementation lives in [`crate::github`];
//! other hosting platforms implement the same trait and are driven by
//! callers interchangeably.

mod error;
mod fake;
mod pull_request;

pub use error::{BoxError, SourceError};
pub use fake::FakeSource;
pub use pull_request::PullRequest;

use async_trait::async_trait;

/// A provider of labeled open pull requests for one repository.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Lists the open pull requests whose labels contain every required label.
    ///
    /// Results are returned in the order the hosting platform yields them.
    /// The listing is all-or-nothing: a failed page fetch aborts the call
    /// and no partial results are returned alongside the error.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::List`] when any page request fails.
    async fn list(&self) -> Result<Vec<PullRequest>, SourceError>;
}

//! Source error types.

use thiserror::Error;

/// Underlying cause carried by a [`SourceError`].
///
/// Boxed so that every backend can wrap its own client error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while constructing or querying a pull request source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Client construction failed. Retrying with the same configuration
    /// will not help.
    #[error("failed to initialize client for {url}: {source}")]
    ClientInitialization {
        url: String,
        #[source]
        source: BoxError,
    },

    /// A page request failed while listing pull requests.
    #[error("error listing pull requests for {owner}/{repo}: {source}")]
    List {
        owner: String,
        repo: String,
        #[source]
        source: BoxError,
    },
}

impl SourceError {
    /// Wraps a client construction failure with the host it was aimed at.
    pub fn client_initialization(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::ClientInitialization {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Wraps a listing failure with the repository it occurred on.
    pub fn list(owner: impl Into<String>, repo: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::List {
            owner: owner.into(),
            repo: repo.into(),
            source: source.into(),
        }
    }
}

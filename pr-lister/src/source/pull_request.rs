//! Pull request records produced by a source.

use serde::Serialize;

/// An open pull request that matched the configured label filter.
///
/// A plain value object: created fresh on every listing and handed to the
/// application generation pipeline, which derives one deployment unit per
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    /// Number assigned by the hosting platform, unique per repository.
    pub number: u64,

    /// Name of the source branch the pull request originates from.
    pub branch: String,

    /// Commit hash of the latest commit on the source branch at fetch time.
    pub head_sha: String,
}

//! Wire types for the pull request list endpoint.
//!
//! Only the fields consumed by the lister are modeled; the rest of the
//! response payload is ignored during deserialization.

use serde::Deserialize;

/// One pull request as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestItem {
    /// Number assigned by the hosting platform, unique per repository.
    pub number: u64,

    /// Tip of the source branch.
    pub head: HeadRef,

    /// Labels currently attached to the pull request.
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// Branch tip information for a pull request head.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadRef {
    /// Source branch name.
    #[serde(rename = "ref")]
    pub branch: String,

    /// Commit hash of the branch tip at fetch time.
    pub sha: String,
}

/// A label attached to a pull request.
///
/// The name can be absent in the payload; unnamed labels are never
/// considered as filter matches.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: Option<String>,
}

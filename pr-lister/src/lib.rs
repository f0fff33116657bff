//! Lists open pull requests matching a required set of labels.
//!
//! The listing feeds an application generation pipeline that creates one
//! deployment unit per matching pull request. Backends implement the
//! [`PullRequestSource`] trait; [`GithubLister`] is the GitHub-backed
//! implementation and [`FakeSource`] serves canned data for tests.

pub mod github;
pub mod source;

pub use github::GithubLister;
pub use source::{BoxError, FakeSource, PullRequest, PullRequestSource, SourceError};

//! GitHub API data types.
//!
//! Responses declare only the handful of fields the migration reads back;
//! request bodies are serialized structs so the exact JSON shape is visible
//! at the call site.

use serde::{Deserialize, Serialize};

/// The authenticated user, from `GET /user`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
}

/// An organization, from `GET /orgs/{org}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubOrg {
    pub login: String,
    pub id: u64,
}

/// A created repository.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoHandle {
    pub name: String,
    pub full_name: String,
}

/// A created issue.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueHandle {
    pub number: u64,
    pub title: String,
}

/// A created pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct PullHandle {
    pub number: u64,
    pub title: String,
}

/// Body of `POST /orgs/{org}/repos`.
#[derive(Debug, Serialize)]
pub struct CreateRepoBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub private: bool,
}

/// Body of `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Serialize)]
pub struct CreateIssueBody<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub labels: Vec<&'a str>,
}

/// Body of `POST /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Serialize)]
pub struct CreatePullBody<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub head: &'a str,
    pub base: &'a str,
}

/// Body of `POST /repos/{owner}/{repo}/issues/{number}/comments`.
#[derive(Debug, Serialize)]
pub struct CreateCommentBody<'a> {
    pub body: &'a str,
}

/// Body of `POST /repos/{owner}/{repo}/pulls/{number}/requested_reviewers`.
#[derive(Debug, Serialize)]
pub struct RequestReviewersBody<'a> {
    pub reviewers: &'a [String],
}

/// Body of `PATCH .../issues/{number}` and `PATCH .../pulls/{number}`.
#[derive(Debug, Serialize)]
pub struct EditStateBody<'a> {
    pub state: &'a str,
}

use serde::Deserialize;

/// The subset of a `pull_request` event payload this action consumes.
/// Every field is optional; validation happens once in `resolve_context()`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    pub pull_request: Option<PullRequestPayload>,
    pub repository: Option<RepositoryPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestPayload {
    pub head: Option<HeadPayload>,
    pub html_url: Option<String>,
    pub number: Option<IssueNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadPayload {
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryPayload {
    pub full_name: Option<String>,
}

/// A pull request number as it appears in the payload.
/// GitHub sends a JSON number, but string-typed numbers are accepted too.
/// Any JSON number parses, so an odd value is reported by the resolver
/// instead of failing the whole event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IssueNumber {
    Number(serde_json::Number),
    Text(String),
}

impl IssueNumber {
    /// Zero and the empty string carry no usable number.
    pub fn is_missing(&self) -> bool {
        match self {
            IssueNumber::Number(n) => n.as_f64() == Some(0.0),
            IssueNumber::Text(s) => s.is_empty(),
        }
    }
}

impl std::fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueNumber::Number(n) => write!(f, "{n}"),
            IssueNumber::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Validated pull request details needed by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    /// Source branch name (e.g., "some-new-feature/1234567891234567")
    pub git_ref: String,
    /// Browser URL of the pull request
    pub pr_url: String,
    /// PR number, used as the issue number for comments
    pub issue_number: IssueNumber,
    /// Repository in "owner/repo" form
    pub repo_full_name: String,
}

/// A 16-digit Asana task identifier extracted from a branch name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGid(String);

impl TaskGid {
    pub(super) fn new(gid: String) -> Self {
        Self(gid)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskGid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

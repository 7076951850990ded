use serde::{Deserialize, Serialize};

/// Asana wraps every request and response body in a `data` object.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// An Asana task, reduced to the fields this action reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub gid: String,
    /// Public URL of the task in the Asana UI
    #[serde(default)]
    pub permalink_url: Option<String>,
}

/// Acknowledgement for a story (comment) added to a task.
#[derive(Debug, Clone, Deserialize)]
pub struct Story {
    pub gid: String,
}

#[derive(Debug, Serialize)]
pub struct NewStory<'a> {
    pub text: &'a str,
}

/// Acknowledgement for a comment posted on a GitHub issue or pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewIssueComment<'a> {
    pub body: &'a str,
}

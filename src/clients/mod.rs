pub mod asana;
pub mod github;
pub mod types;

pub use asana::AsanaClient;
pub use github::GitHubClient;
pub use types::{IssueComment, Story, Task};

use async_trait::async_trait;
use thiserror::Error;

use crate::context::{IssueNumber, TaskGid};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Token for {service} is not a valid header value")]
    InvalidHeader { service: &'static str },
}

/// Task-tracking service operations used by the workflow.
#[async_trait]
pub trait TaskTracker: Send + Sync {
    /// Fetch a task. `Ok(None)` means the service has no task with this gid.
    async fn get_task(&self, gid: &TaskGid) -> Result<Option<Task>, ClientError>;

    /// Attach a comment (story) to a task.
    async fn create_story(&self, gid: &TaskGid, text: &str) -> Result<Story, ClientError>;
}

/// Where an issue comment goes.
#[derive(Debug, Clone, Copy)]
pub struct IssueTarget<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub issue_number: &'a IssueNumber,
}

/// Source-hosting service operations used by the workflow.
#[async_trait]
pub trait SourceHost: Send + Sync {
    async fn create_issue_comment(
        &self,
        target: IssueTarget<'_>,
        body: &str,
    ) -> Result<IssueComment, ClientError>;
}

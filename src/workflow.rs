use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::clients::{AsanaClient, ClientError, GitHubClient, IssueTarget, SourceHost, TaskTracker};
use crate::config::Config;
use crate::context::{self, ContextError, PullRequestContext, TaskGid};
use crate::runner::TaskLinkOutcome;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Context(#[from] ContextError),

    #[error("Failed to create API client: {0}")]
    Client(#[from] ClientError),

    #[error("Repository name is not of the form owner/repo: {0}")]
    InvalidRepoName(String),

    #[error("Failed to add PR link to task {gid}: {source}")]
    TaskUpdate { gid: TaskGid, source: ClientError },

    #[error("Failed to fetch task {gid}: {source}")]
    TaskLookup { gid: TaskGid, source: ClientError },

    #[error("Task not found with gid: {0}")]
    TaskNotFound(TaskGid),

    #[error("Task URL not found for gid: {0}")]
    TaskUrlMissing(TaskGid),

    #[error("Failed to comment on pull request: {0}")]
    Comment(#[source] ClientError),
}

/// Build both clients from the configured tokens, read the triggering event
/// and link the pull request to its task.
pub async fn run(config: &Config) -> Result<TaskLinkOutcome, WorkflowError> {
    let asana = AsanaClient::new(&config.asana_token, &config.asana_api_url)?;
    let github = GitHubClient::new(&config.github_token, &config.github_api_url)?;

    let event = context::load_event(&config.event_path)?;
    let ctx = context::resolve_context(&event)?;
    debug!(git_ref = %ctx.git_ref, repo = %ctx.repo_full_name, issue = %ctx.issue_number, "resolved pull request context");

    link_pull_request(&ctx, &asana, &github).await
}

/// Post the PR URL on the task, then the task permalink on the PR.
///
/// Calls run strictly in order. A story that was posted stays posted even if
/// a later step fails.
#[instrument(skip_all, fields(git_ref = %ctx.git_ref))]
pub async fn link_pull_request(
    ctx: &PullRequestContext,
    tracker: &dyn TaskTracker,
    host: &dyn SourceHost,
) -> Result<TaskLinkOutcome, WorkflowError> {
    let Some(gid) = context::extract_task_gid(&ctx.git_ref) else {
        warn!("no task gid found in branch name");
        return Ok(TaskLinkOutcome::NoTaskId {
            git_ref: ctx.git_ref.clone(),
        });
    };
    info!(gid = %gid, "found task gid in branch name");

    let (owner, repo) = ctx
        .repo_full_name
        .split_once('/')
        .ok_or_else(|| WorkflowError::InvalidRepoName(ctx.repo_full_name.clone()))?;

    let story = tracker
        .create_story(&gid, &format!("GitHub PR: {}", ctx.pr_url))
        .await
        .map_err(|source| WorkflowError::TaskUpdate {
            gid: gid.clone(),
            source,
        })?;
    info!(story = %story.gid, "linked pull request on task");

    let task = tracker
        .get_task(&gid)
        .await
        .map_err(|source| WorkflowError::TaskLookup {
            gid: gid.clone(),
            source,
        })?
        .ok_or_else(|| WorkflowError::TaskNotFound(gid.clone()))?;

    let permalink_url = task
        .permalink_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| WorkflowError::TaskUrlMissing(gid.clone()))?;

    let target = IssueTarget {
        owner,
        repo,
        issue_number: &ctx.issue_number,
    };
    let comment = host
        .create_issue_comment(target, &format!("Asana Task: {permalink_url}"))
        .await
        .map_err(WorkflowError::Comment)?;
    info!(
        comment_id = comment.id,
        comment_url = comment.html_url.as_deref().unwrap_or_default(),
        permalink = %permalink_url,
        "linked task on pull request"
    );

    Ok(TaskLinkOutcome::Linked { permalink_url })
}

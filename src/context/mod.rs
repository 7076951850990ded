pub mod branch;
pub mod types;

pub use branch::extract_task_gid;
pub use types::{EventPayload, IssueNumber, PullRequestContext, TaskGid};

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Cannot find the following properties: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Failed to read event payload: {0}")]
    EventRead(#[from] std::io::Error),

    #[error("Failed to parse event payload: {0}")]
    EventParse(#[from] serde_json::Error),
}

/// Read the webhook event that triggered this run.
#[instrument]
pub fn load_event(path: &Path) -> Result<EventPayload, ContextError> {
    let contents = fs::read_to_string(path)?;
    debug!(bytes = contents.len(), "read event payload");
    let payload = serde_json::from_str(&contents)?;
    Ok(payload)
}

/// Pull the four required pull request fields out of the event payload.
///
/// Every missing field is reported, in the order
/// `pr ref, pr url, issue number, repo name`.
pub fn resolve_context(payload: &EventPayload) -> Result<PullRequestContext, ContextError> {
    let pull_request = payload.pull_request.as_ref();

    let git_ref = pull_request
        .and_then(|pr| pr.head.as_ref())
        .and_then(|head| non_empty(head.git_ref.as_deref()));
    let pr_url = pull_request.and_then(|pr| non_empty(pr.html_url.as_deref()));
    let issue_number = pull_request
        .and_then(|pr| pr.number.as_ref())
        .filter(|n| !n.is_missing());
    let repo_full_name = payload
        .repository
        .as_ref()
        .and_then(|repo| non_empty(repo.full_name.as_deref()));

    match (git_ref, pr_url, issue_number, repo_full_name) {
        (Some(git_ref), Some(pr_url), Some(issue_number), Some(repo_full_name)) => {
            Ok(PullRequestContext {
                git_ref: git_ref.to_string(),
                pr_url: pr_url.to_string(),
                issue_number: issue_number.clone(),
                repo_full_name: repo_full_name.to_string(),
            })
        }
        (git_ref, pr_url, issue_number, repo_full_name) => {
            let missing = [
                ("pr ref", git_ref.is_none()),
                ("pr url", pr_url.is_none()),
                ("issue number", issue_number.is_none()),
                ("repo name", repo_full_name.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            Err(ContextError::MissingFields(missing))
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::types::{HeadPayload, PullRequestPayload, RepositoryPayload};
    use super::*;
    use std::io::Write;

    const REF: &str = "some-new-feature/1234567891234567";
    const PR_URL: &str = "https://github.com/cool-owner/cool-asana-repo/pull/10";
    const FULL_NAME: &str = "cool-owner/cool-asana-repo";

    fn payload(git_ref: &str, pr_url: &str, number: IssueNumber, full_name: &str) -> EventPayload {
        EventPayload {
            pull_request: Some(PullRequestPayload {
                head: Some(HeadPayload {
                    git_ref: Some(git_ref.to_string()),
                }),
                html_url: Some(pr_url.to_string()),
                number: Some(number),
            }),
            repository: Some(RepositoryPayload {
                full_name: Some(full_name.to_string()),
            }),
        }
    }

    #[test]
    fn test_resolves_complete_payload() {
        let event = payload(REF, PR_URL, IssueNumber::Text("10".to_string()), FULL_NAME);
        let ctx = resolve_context(&event).unwrap();
        assert_eq!(ctx.git_ref, REF);
        assert_eq!(ctx.pr_url, PR_URL);
        assert_eq!(ctx.issue_number, IssueNumber::Text("10".to_string()));
        assert_eq!(ctx.repo_full_name, FULL_NAME);

        // payload left intact
        let pr = event.pull_request.as_ref().unwrap();
        assert_eq!(pr.head.as_ref().unwrap().git_ref.as_deref(), Some(REF));
    }

    #[test]
    fn test_lists_only_missing_fields_in_order() {
        let event = payload("", PR_URL, IssueNumber::Number(10u64.into()), "");
        let err = resolve_context(&event).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot find the following properties: pr ref, repo name"
        );
    }

    #[test]
    fn test_zero_issue_number_is_missing() {
        let event = payload(REF, PR_URL, IssueNumber::Number(0u64.into()), FULL_NAME);
        let err = resolve_context(&event).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot find the following properties: issue number"
        );
    }

    #[test]
    fn test_empty_payload_lists_every_field() {
        let err = resolve_context(&EventPayload::default()).unwrap_err();
        match err {
            ContextError::MissingFields(fields) => assert_eq!(
                fields,
                vec!["pr ref", "pr url", "issue number", "repo name"]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_fields_are_missing() {
        let json = r#"{
            "pull_request": { "head": { "ref": null }, "html_url": null, "number": 7 },
            "repository": { "full_name": "o/r" }
        }"#;
        let event: EventPayload = serde_json::from_str(json).unwrap();
        let err = resolve_context(&event).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot find the following properties: pr ref, pr url"
        );
    }

    #[test]
    fn test_negative_number_reaches_resolver() {
        let json = r#"{
            "pull_request": { "head": { "ref": "a/b" }, "html_url": "https://x", "number": 0 },
            "repository": { "full_name": "o/r" }
        }"#;
        let event: EventPayload = serde_json::from_str(json).unwrap();
        assert_eq!(
            resolve_context(&event).unwrap_err().to_string(),
            "Cannot find the following properties: issue number"
        );

        let json = json.replace("\"number\": 0", "\"number\": -1");
        let event: EventPayload = serde_json::from_str(&json).unwrap();
        let ctx = resolve_context(&event).unwrap();
        assert_eq!(ctx.issue_number.to_string(), "-1");
    }

    #[test]
    fn test_load_event_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pull_request":{{"head":{{"ref":"{REF}"}},"html_url":"{PR_URL}","number":10}},"repository":{{"full_name":"{FULL_NAME}"}}}}"#
        )
        .unwrap();

        let event = load_event(file.path()).unwrap();
        let ctx = resolve_context(&event).unwrap();
        assert_eq!(ctx.issue_number, IssueNumber::Number(10u64.into()));
        assert_eq!(ctx.repo_full_name, FULL_NAME);
    }

    #[test]
    fn test_load_event_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_event(file.path()),
            Err(ContextError::EventParse(_))
        ));
    }

    #[test]
    fn test_load_event_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_event(&dir.path().join("event.json")),
            Err(ContextError::EventRead(_))
        ));
    }
}

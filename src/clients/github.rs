use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::{debug, instrument};

use super::types::{IssueComment, NewIssueComment};
use super::{ClientError, IssueTarget, SourceHost};

pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub REST client authenticated with the workflow token.
pub struct GitHubClient {
    http: reqwest::Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(token: &str, api_base: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| ClientError::InvalidHeader { service: "GitHub" })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .user_agent(concat!("asana-pr-link/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SourceHost for GitHubClient {
    #[instrument(skip(self, target, body), fields(owner = %target.owner, repo = %target.repo, issue = %target.issue_number))]
    async fn create_issue_comment(
        &self,
        target: IssueTarget<'_>,
        body: &str,
    ) -> Result<IssueComment, ClientError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_base, target.owner, target.repo, target.issue_number
        );
        debug!("posting comment to GitHub");
        let comment = self
            .http
            .post(&url)
            .json(&NewIssueComment { body })
            .send()
            .await?
            .error_for_status()?
            .json::<IssueComment>()
            .await?;
        debug!(comment_id = comment.id, "comment created");
        Ok(comment)
    }
}

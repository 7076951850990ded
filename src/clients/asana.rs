use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use super::types::{Envelope, NewStory, Story, Task};
use super::{ClientError, TaskTracker};
use crate::context::TaskGid;

pub const ASANA_API_URL: &str = "https://app.asana.com/api/1.0";

/// Asana REST client authenticated with a personal access token.
pub struct AsanaClient {
    http: reqwest::Client,
    api_base: String,
}

impl AsanaClient {
    pub fn new(token: &str, api_base: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| ClientError::InvalidHeader { service: "Asana" })?;
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
impl TaskTracker for AsanaClient {
    #[instrument(skip(self, gid), fields(gid = %gid))]
    async fn get_task(&self, gid: &TaskGid) -> Result<Option<Task>, ClientError> {
        let url = format!("{}/tasks/{}", self.api_base, gid);
        debug!("fetching task from Asana");
        let response = self
            .http
            .get(&url)
            .query(&[("opt_fields", "permalink_url")])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Asana reported task not found");
            return Ok(None);
        }

        let envelope = response
            .error_for_status()?
            .json::<Envelope<Option<Task>>>()
            .await?;
        if let Some(task) = &envelope.data {
            debug!(task = %task.gid, has_permalink = task.permalink_url.is_some(), "received task");
        }
        Ok(envelope.data)
    }

    #[instrument(skip(self, gid, text), fields(gid = %gid))]
    async fn create_story(&self, gid: &TaskGid, text: &str) -> Result<Story, ClientError> {
        let url = format!("{}/tasks/{}/stories", self.api_base, gid);
        debug!("posting story to Asana task");
        let envelope = self
            .http
            .post(&url)
            .json(&Envelope {
                data: NewStory { text },
            })
            .send()
            .await?
            .error_for_status()?
            .json::<Envelope<Story>>()
            .await?;
        debug!(story = %envelope.data.gid, "story created");
        Ok(envelope.data)
    }
}

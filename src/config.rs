use clap::Args;
use std::path::PathBuf;
use thiserror::Error;

use crate::clients::asana::ASANA_API_URL;
use crate::clients::github::GITHUB_API_URL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set; is this running inside a GitHub Actions job?")]
    MissingEnv(&'static str),
}

/// Action inputs and runner environment as handed over by the Actions runner.
///
/// The runner exposes `with:` inputs as `INPUT_<NAME>` variables, keeping
/// dashes in the name.
#[derive(Debug, Clone, Default, Args)]
pub struct RunnerInputs {
    /// Asana personal access token
    #[arg(long, env = "INPUT_ASANA-TOKEN", hide_env_values = true)]
    pub asana_token: Option<String>,

    /// GitHub token used to comment on the pull request
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path of the webhook event JSON
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// File that step outputs are appended to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output: Option<PathBuf>,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    pub github_api_url: String,
}

/// Everything one run needs to know, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub asana_token: String,
    pub github_token: String,
    pub event_path: PathBuf,
    /// None falls back to the legacy `::set-output` command
    pub output_path: Option<PathBuf>,
    pub github_api_url: String,
    /// Fixed to the public Asana API outside of tests
    pub asana_api_url: String,
}

impl Config {
    pub fn from_inputs(inputs: RunnerInputs) -> Result<Config, ConfigError> {
        let asana_token = input_value(inputs.asana_token);
        let github_token = input_value(inputs.github_token);
        let event_path = inputs
            .event_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingEnv("GITHUB_EVENT_PATH"))?;
        let output_path = inputs.output.filter(|p| !p.as_os_str().is_empty());
        let github_api_url = if inputs.github_api_url.trim().is_empty() {
            GITHUB_API_URL.to_string()
        } else {
            inputs.github_api_url
        };

        Ok(Config {
            asana_token,
            github_token,
            event_path,
            output_path,
            github_api_url,
            asana_api_url: ASANA_API_URL.to_string(),
        })
    }
}

/// Inputs are optional; an unset input reads as the empty string.
/// Fork pull requests get empty secrets and must still reach the
/// no-task-id outcome.
fn input_value(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

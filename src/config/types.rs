use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Instruction sent as the system message of every validation request.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"You are an AI aviation compliance assistant.
Your task is to analyze pre-flight checklists according to FAA/ICAO regulations and determine whether the checklist is compliant.
Return the result **only** as a JSON object with the following structure:

{
  "compliance_status": "Compliant" or "Needs Review",
  "detected_issues": ["List of detected issues or violations"],
  "improvement_suggestions": ["List of improvements or safety recommendations"]
}"#;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Explicit credential. When absent it is read from `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    /// Fills in `llm.api_key` from the environment when the file did not set one.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a closure.
    pub fn resolve_api_key<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = self
            .llm
            .api_key
            .take()
            .filter(|key| !key.trim().is_empty());

        let key = match explicit {
            Some(key) => key,
            None => lookup(&self.llm.api_key_env)
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| {
                    Error::config(format!(
                        "Missing API key. Please set your {} as an environment variable.",
                        self.llm.api_key_env
                    ))
                })?,
        };

        self.llm.api_key = Some(key);
        Ok(())
    }
}

impl LlmConfig {
    pub fn system_prompt(&self) -> &str {
        self.system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_PROMPT)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            model: default_model(),
            temperature: default_temperature(),
            system_prompt: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    2 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

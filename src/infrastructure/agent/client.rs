use derive_more::Display;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use uuid::Uuid;

use crate::{errors::AppError, settings::AppConfig};

/// Event types understood by the agent's unified `/api/agent/run` endpoint.
#[derive(Debug, Clone, Copy, Display)]
pub enum AgentEvent {
    #[display("feedback")]
    Feedback,
    #[display("profile_updated")]
    ProfileUpdated,
}

/// HTTP client for the external agent service. All generative/AI reasoning
/// lives behind this boundary; the backend only forwards requests and maps
/// failures to `AppError::AgentUnavailable`.
#[derive(Clone)]
pub struct AgentClient {
    http: Client,
    base_url: String,
}

impl AgentClient {
    pub fn new(config: &AppConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.agent_timeout_secs))
            .build()
            .expect("Failed to build agent HTTP client");

        AgentClient {
            http,
            base_url: config.agent_service_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, AppError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            return Err(AppError::AgentUnavailable(format!(
                "agent returned {}",
                response.status()
            )));
        }

        Ok(response.json::<Value>().await?)
    }

    async fn get(&self, endpoint: &str) -> Result<Value, AppError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::AgentUnavailable(format!(
                "agent returned {}",
                response.status()
            )));
        }

        Ok(response.json::<Value>().await?)
    }

    /// Unified agent call: `{user_id, event_type, payload}` in, free-form
    /// JSON out.
    pub async fn run(&self, user_id: &Uuid, event: AgentEvent, payload: Value) -> Result<Value, AppError> {
        let result = self
            .post(
                "/api/agent/run",
                &json!({
                    "user_id": user_id,
                    "event_type": event.to_string(),
                    "payload": payload,
                }),
            )
            .await?;

        // Unwrap the inner result if the agent wrapped it
        match result {
            Value::Object(mut map) if map.contains_key("result") => {
                Ok(map.remove("result").unwrap_or(Value::Null))
            }
            other => Ok(other),
        }
    }

    pub async fn ping(&self) -> Result<Value, AppError> {
        self.get("/health").await
    }

    pub async fn dashboard(&self, user_id: &Uuid) -> Result<Value, AppError> {
        self.get(&format!("/api/agent/dashboard/{}", user_id)).await
    }

    pub async fn analyze_skill_gaps(&self, skills: &Value, target_role: &str) -> Result<Value, AppError> {
        self.post(
            "/api/agent/skills/gaps",
            &json!({
                "skills": skills,
                "target_role": target_role,
            }),
        )
        .await
    }

    pub async fn create_roadmap(&self, target_role: &str, timeline: &str) -> Result<Value, AppError> {
        self.post(
            "/api/agent/planner/roadmap",
            &json!({
                "target_role": target_role,
                "timeline": timeline,
            }),
        )
        .await
    }

    pub async fn opportunities(&self, user_id: &Uuid) -> Result<Value, AppError> {
        self.get(&format!("/api/agent/opportunities/{}", user_id))
            .await
    }

    pub async fn suggest_projects(&self, user_id: &Uuid, count: u32) -> Result<Value, AppError> {
        self.post(
            "/api/projects/suggest",
            &json!({
                "user_id": user_id,
                "count": count,
            }),
        )
        .await
    }

    pub async fn chat(&self, user_id: &Uuid, message: &str) -> Result<Value, AppError> {
        self.post(
            "/api/agent/chat",
            &json!({
                "user_id": user_id,
                "message": message,
            }),
        )
        .await
    }

    pub async fn chat_history(&self, user_id: &Uuid) -> Result<Value, AppError> {
        self.get(&format!("/api/agent/chat/history?user_id={}", user_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_events_serialize_to_wire_names() {
        assert_eq!(AgentEvent::Feedback.to_string(), "feedback");
        assert_eq!(AgentEvent::ProfileUpdated.to_string(), "profile_updated");
    }

    #[test]
    fn trailing_slash_in_base_url_is_trimmed() {
        let config = AppConfig {
            env: crate::settings::AppEnvironment::Testing,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "postgres://localhost/test".into(),
            agent_service_url: "http://localhost:5000/".into(),
            agent_timeout_secs: 30,
            cors_allowed_origins: vec!["*".into()],
        };

        let client = AgentClient::new(&config);
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}

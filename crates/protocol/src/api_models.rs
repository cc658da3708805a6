//! HTTP bodies for the dispatch API.
//!
//! These are the wire shapes exchanged with the web client:
//! - `GET /config` returns a [`ConfigResponse`]
//! - `POST /chat` takes a [`ChatRequest`] and returns a [`ChatResponse`]
//! - non-2xx responses carry an [`ErrorBody`]

use crate::agent_models::AgentDescriptor;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of `POST /chat`.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct ChatRequest {
    /// Target agent: bare name, or `framework/name` when the bare name is
    /// shared by several frameworks.
    pub agent_name: String,

    /// Model the agent should use for this turn.
    pub model: String,

    /// The user's message.
    pub user_prompt: String,

    /// Opaque conversation identifier chosen by the client; history storage
    /// is the client's responsibility.
    pub conversation_id: String,
}

/// Successful response of `POST /chat`.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct ChatResponse {
    /// The agent's textual reply.
    pub response: String,
}

/// Error body returned with any non-2xx status.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct ErrorBody {
    /// Human-readable failure description, never empty.
    pub detail: String,
}

/// One framework and the agents discovered under it.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct FrameworkConfig {
    /// Framework name as reported by its agents.
    pub name: String,

    /// Agents of this framework, in discovery order.
    pub agents: Vec<AgentDescriptor>,
}

/// Response of `GET /config`.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct ConfigResponse {
    /// Discovered frameworks in discovery order.
    pub frameworks: Vec<FrameworkConfig>,

    /// Externally configured model catalog, passed through verbatim.
    pub models: Vec<String>,
}

/// Response of `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct HealthResponse {
    /// Constant liveness signal.
    pub status: String,
}

impl HealthResponse {
    /// The liveness body served by `GET /health`.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_roundtrip() {
        let request = ChatRequest {
            agent_name: "echo".to_string(),
            model: "deepseek-chat".to_string(),
            user_prompt: "hi".to_string(),
            conversation_id: "conv-1".to_string(),
        };

        let json = serde_json::to_string(&request).expect("serialize ChatRequest");
        let back: ChatRequest = serde_json::from_str(&json).expect("deserialize ChatRequest");
        assert_eq!(back.agent_name, "echo");
        assert_eq!(back.user_prompt, "hi");
        assert_eq!(back.conversation_id, "conv-1");
    }

    #[test]
    fn test_health_response_shape() {
        let json = serde_json::to_value(HealthResponse::ok()).expect("serialize health");
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }
}

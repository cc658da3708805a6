//! Chat dispatch endpoint.

use crate::error::ApiError;
use crate::state::AppState;
use arena_core::agents::InvokeRequest;
use arena_protocol::{ChatRequest, ChatResponse};
use axum::extract::State;
use axum::Json;
use uuid::Uuid;

/// `POST /chat`: dispatch one chat turn to the requested agent.
///
/// Looks the agent up by name, forwards the prompt to its `invoke`
/// operation, and returns the reply text. Lookup failures are client
/// errors; invocation failures map to server errors with the failure kind
/// surfaced.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let agent = state.registry.get(&request.agent_name)?;

    tracing::info!(
        %request_id,
        agent = %request.agent_name,
        model = %request.model,
        conversation = %request.conversation_id,
        "dispatching chat request"
    );

    let invoke = InvokeRequest::new(request.user_prompt)
        .with_model(request.model)
        .with_conversation_id(request.conversation_id);

    match agent.invoke(&invoke).await {
        Ok(response) => {
            tracing::info!(%request_id, "chat request completed");
            Ok(Json(ChatResponse { response }))
        }
        Err(error) => {
            tracing::warn!(%request_id, kind = error.kind(), "chat request failed: {}", error);
            Err(ApiError::from(error))
        }
    }
}

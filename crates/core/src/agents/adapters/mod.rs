//! Agent adapter implementations.
//!
//! One adapter per supported framework. The subprocess-backed adapters
//! (LangChain, LangGraph, CrewAI, AutoGen) wrap each framework's runner
//! process and differ in the event stream they parse; `echo` and `mock`
//! are built-in and need no runner.

mod autogen;
mod crewai;
mod echo;
mod langchain;
mod langgraph;
pub mod mock;

pub use autogen::AutoGenAdapter;
pub use crewai::CrewAiAdapter;
pub use echo::EchoAdapter;
pub use langchain::LangChainAdapter;
pub use langgraph::LangGraphAdapter;
pub use mock::MockAdapter;

use crate::agents::base::AdapterError;

/// Map a runner-reported error event to a typed failure.
///
/// Runners tag error events with a `kind`; anything unrecognized is an
/// upstream failure.
pub(crate) fn runner_error(kind: Option<String>, message: String) -> AdapterError {
    match kind.as_deref() {
        Some("invalid-model") => AdapterError::InvalidModel(message),
        Some("timeout") => AdapterError::Timeout,
        _ => AdapterError::Upstream(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_error_mapping() {
        assert_eq!(
            runner_error(Some("invalid-model".to_string()), "bad".to_string()),
            AdapterError::InvalidModel("bad".to_string())
        );
        assert_eq!(
            runner_error(Some("timeout".to_string()), "slow".to_string()),
            AdapterError::Timeout
        );
        assert_eq!(
            runner_error(None, "boom".to_string()),
            AdapterError::Upstream("boom".to_string())
        );
        assert_eq!(
            runner_error(Some("weird".to_string()), "boom".to_string()),
            AdapterError::Upstream("boom".to_string())
        );
    }
}

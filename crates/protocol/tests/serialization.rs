use arena_protocol::*;
use serde_json;
use serde_yaml;

#[test]
fn test_manifest_deserialization_from_front_matter_yaml() {
    // Front matter as it appears in an agent manifest file
    let yaml_str = r#"
framework: langgraph
name: multi_tool_agent
display_name: Multi-Tool Agent
description: Talks to math and weather tools over MCP
command: python3
args:
  - "agent.py"
models:
  - "deepseek-chat"
timeout_secs: 120
settings:
  mcp_servers:
    weather:
      url: "http://localhost:8005/mcp/"
      transport: streamable_http
"#;

    let manifest: AgentManifest =
        serde_yaml::from_str(yaml_str).expect("Failed to deserialize AgentManifest");

    assert_eq!(manifest.framework, "langgraph");
    assert_eq!(manifest.name, "multi_tool_agent");
    assert_eq!(manifest.display_name, "Multi-Tool Agent");
    assert_eq!(manifest.command.as_deref(), Some("python3"));
    assert_eq!(manifest.args, vec!["agent.py".to_string()]);
    assert_eq!(manifest.models, vec!["deepseek-chat".to_string()]);
    assert_eq!(manifest.timeout_secs, Some(120));
    assert!(manifest.settings.contains_key("mcp_servers"));
    // The body is attached separately by the loader, never via front matter
    assert_eq!(manifest.system_prompt, "");
}

#[test]
fn test_manifest_minimal_front_matter() {
    // Built-in frameworks need no runner settings
    let yaml_str = r#"
framework: echo
name: echo
display_name: Echo
description: Repeats the prompt back
"#;

    let manifest: AgentManifest =
        serde_yaml::from_str(yaml_str).expect("Failed to deserialize minimal AgentManifest");

    assert!(manifest.command.is_none());
    assert!(manifest.args.is_empty());
    assert!(manifest.models.is_empty());
    assert!(manifest.timeout_secs.is_none());
    assert!(manifest.settings.is_empty());
}

#[test]
fn test_chat_request_deserialization() {
    let json = r#"{
        "agent_name": "langchain/research_assistant",
        "model": "deepseek-chat",
        "user_prompt": "What is Rust?",
        "conversation_id": "9a1b"
    }"#;

    let request: ChatRequest = serde_json::from_str(json).expect("Failed to deserialize ChatRequest");
    assert_eq!(request.agent_name, "langchain/research_assistant");
    assert_eq!(request.model, "deepseek-chat");
    assert_eq!(request.user_prompt, "What is Rust?");
    assert_eq!(request.conversation_id, "9a1b");
}

#[test]
fn test_config_response_serialization() {
    let response = ConfigResponse {
        frameworks: vec![FrameworkConfig {
            name: "langchain".to_string(),
            agents: vec![AgentDescriptor {
                framework: "langchain".to_string(),
                name: "research_assistant".to_string(),
                display_name: "Research Assistant".to_string(),
                description: "Answers questions".to_string(),
            }],
        }],
        models: vec!["deepseek-chat".to_string()],
    };

    let json = serde_json::to_value(&response).expect("Failed to serialize ConfigResponse");
    assert_eq!(json["frameworks"][0]["name"], "langchain");
    assert_eq!(
        json["frameworks"][0]["agents"][0]["display_name"],
        "Research Assistant"
    );
    assert_eq!(json["models"][0], "deepseek-chat");
}

#[test]
fn test_error_body_serialization() {
    let body = ErrorBody {
        detail: "Agent 'missing' not found.".to_string(),
    };

    let json = serde_json::to_value(&body).expect("Failed to serialize ErrorBody");
    assert_eq!(json, serde_json::json!({"detail": "Agent 'missing' not found."}));
}

#[test]
fn test_global_config_from_toml_via_json() {
    // The loader parses TOML; here we only check the serde field mapping
    let json = serde_json::json!({
        "agent_roots": ["agents", "/srv/extra"],
        "models": ["deepseek-chat"],
        "server": {"host": "0.0.0.0", "port": 9000}
    });

    let config: GlobalConfig = serde_json::from_value(json).expect("Failed to deserialize GlobalConfig");
    assert_eq!(config.agent_roots.len(), 2);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
}

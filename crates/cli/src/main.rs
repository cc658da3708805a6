//! `arena` CLI: discover agents and serve the dispatch API.

mod logging;

use arena_core::agents::AgentRegistry;
use arena_core::config::loader::load_config;
use arena_core::init::{generate_arena_structure, InitOptions};
use arena_protocol::ConfigResponse;
use arena_server::AppState;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "arena", version, about = "Multi-framework AI agent comparison platform")]
struct Cli {
    /// Project root containing the .agent-arena/ directory
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover agents and serve the dispatch API
    Serve {
        /// Bind address override (e.g. 0.0.0.0:9000); defaults to config.toml
        #[arg(long)]
        listen: Option<String>,
    },

    /// List all discoverable agents
    Agents {
        /// Print the listing as JSON (the GET /config shape)
        #[arg(long)]
        json: bool,
    },

    /// Scaffold a new .agent-arena/ directory
    Init {
        /// Overwrite an existing .agent-arena/ directory
        #[arg(long)]
        force: bool,

        /// Create only the echo smoke-test agent
        #[arg(long)]
        minimal: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { listen } => serve(&cli.project_root, listen).await,
        Commands::Agents { json } => list_agents(&cli.project_root, json).await,
        Commands::Init { force, minimal } => init(&cli.project_root, force, minimal).await,
    }
}

/// Build the registry and run the dispatch API until shutdown.
async fn serve(project_root: &Path, listen: Option<String>) -> color_eyre::Result<()> {
    let config = load_config(project_root).await?;
    let registry = AgentRegistry::discover(&config.agent_roots)?;

    if registry.is_empty() {
        tracing::warn!("no agents discovered; POST /chat will only return 404");
    }

    // Startup diagnostics only: unavailable agents stay listed and fail at
    // invocation time instead.
    for adapter in registry.iter() {
        if !adapter.check_availability().await {
            tracing::warn!(
                agent = %adapter.descriptor().qualified_name(),
                "agent tooling unavailable"
            );
        }
    }

    let addr = listen.unwrap_or_else(|| config.bind_addr());
    let state = AppState::new(registry, config.global.models.clone());
    arena_server::serve(&addr, state).await?;
    Ok(())
}

/// Print every discoverable agent, grouped by framework.
async fn list_agents(project_root: &Path, json: bool) -> color_eyre::Result<()> {
    let config = load_config(project_root).await?;
    let registry = AgentRegistry::discover(&config.agent_roots)?;

    if json {
        let listing = ConfigResponse {
            frameworks: registry.list(),
            models: config.global.models.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if registry.is_empty() {
        println!("No agents discovered under {:?}", config.agent_roots);
        return Ok(());
    }

    for group in registry.list() {
        println!("{}", group.name.bold());
        for agent in &group.agents {
            println!(
                "  {:<24} {:<28} {}",
                agent.name,
                agent.display_name,
                agent.description.dimmed()
            );
        }
    }

    Ok(())
}

/// Scaffold a `.agent-arena/` directory.
async fn init(project_root: &Path, force: bool, minimal: bool) -> color_eyre::Result<()> {
    let options = InitOptions {
        target_dir: project_root.to_path_buf(),
        force,
        minimal,
    };

    generate_arena_structure(options).await?;
    println!(
        "Initialized {}",
        project_root.join(".agent-arena").display()
    );
    Ok(())
}

//! MCP server exposing an Anki collection via AnkiConnect.
//!
//! Each tool maps to a handler in the `ankilink_mcp` library crate; this
//! binary only parses arguments, wires the transport, and adapts handler
//! output (ordered text blocks) to MCP content.

use std::collections::HashMap;
use std::sync::Arc;

use ankilink::AnkiClient;
use ankilink_mcp::handlers::{
    cards, notes, overview, review_stats, stats::{self, StatsRequest}, suspend,
    upsert::{self, NoteUpsert},
};
use clap::Parser;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_handler, tool_router,
};
use tracing::{info, warn};

// ============================================================================
// CLI Arguments
// ============================================================================

/// MCP server exposing an Anki collection via AnkiConnect.
#[derive(Parser, Debug)]
#[command(name = "ankilink-mcp")]
#[command(version, about, long_about = None)]
struct Args {
    /// AnkiConnect host address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// AnkiConnect port
    #[arg(long, default_value_t = 8765)]
    port: u16,

    /// Read-only mode (disables write operations)
    #[arg(long, default_value_t = false)]
    read_only: bool,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Transport mode: stdio (default) or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value_t = 3000)]
    http_port: u16,

    /// HTTP server bind address (only used with --transport http)
    #[arg(long, default_value = "127.0.0.1")]
    http_host: String,
}

/// Transport mode for the MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Transport {
    /// Standard I/O transport (default, for CLI integration)
    #[default]
    Stdio,
    /// HTTP transport (for remote connections)
    Http,
}

impl std::str::FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdio" => Ok(Transport::Stdio),
            "http" => Ok(Transport::Http),
            _ => Err(format!("Invalid transport: {}. Use 'stdio' or 'http'", s)),
        }
    }
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
struct FindNotesParams {
    /// Anki search query (e.g., "deck:Japanese tag:verb")
    query: String,
    /// Maximum number of notes to render
    #[serde(default = "default_note_limit")]
    limit: usize,
}

fn default_note_limit() -> usize {
    notes::DEFAULT_LIMIT
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
struct FindCardsParams {
    /// Anki search query (e.g., "deck:Default", "is:suspended")
    query: String,
    /// Maximum number of card IDs to render
    #[serde(default = "default_card_limit")]
    limit: usize,
}

fn default_card_limit() -> usize {
    cards::DEFAULT_LIMIT
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
struct NoteSpec {
    /// Deck name to add the note to
    deck_name: String,
    /// Note type (model) name
    model_name: String,
    /// Field values (field_name -> value)
    fields: HashMap<String, String>,
    /// Optional tags
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
struct AddOrUpdateNotesParams {
    /// Notes to create or update
    notes: Vec<NoteSpec>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
struct CardIdsParams {
    /// Card IDs to operate on
    card_ids: Vec<i64>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
struct ReviewStatsParams {
    /// Time range: day, week, month, year, or all
    #[serde(default = "default_time_range")]
    time_range: String,
}

fn default_time_range() -> String {
    "month".to_string()
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
struct GetStatsParams {
    /// Type of statistics: reviews, difficulty, due, retention, or all
    #[serde(default = "default_stat_type")]
    stat_type: String,
    /// Optional deck name to filter statistics
    #[serde(default)]
    deck_name: Option<String>,
    /// Whether to include card-level details (difficulty only)
    #[serde(default)]
    include_cards: bool,
}

fn default_stat_type() -> String {
    "reviews".to_string()
}

// ============================================================================
// Server Implementation
// ============================================================================

#[derive(Clone)]
struct AnkiServer {
    client: Arc<AnkiClient>,
    tool_router: ToolRouter<AnkiServer>,
    read_only: bool,
}

impl AnkiServer {
    fn new(url: &str, read_only: bool) -> Self {
        let client = AnkiClient::builder().url(url).build();
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
            read_only,
        }
    }

    fn check_write(&self, operation: &str) -> Result<(), McpError> {
        if self.read_only {
            warn!("Blocked write operation in read-only mode: {}", operation);
            Err(McpError::invalid_request(
                format!(
                    "Write operation '{}' is not allowed in read-only mode",
                    operation
                ),
                None,
            ))
        } else {
            Ok(())
        }
    }
}

/// Wrap handler text blocks as MCP content, preserving block order.
fn blocks_to_result(blocks: Vec<String>) -> CallToolResult {
    CallToolResult::success(blocks.into_iter().map(Content::text).collect())
}

#[tool_router]
impl AnkiServer {
    #[tool(
        name = "get-collection-overview",
        description = "Get comprehensive information about the Anki collection including decks, models, and fields"
    )]
    async fn get_collection_overview(&self) -> Result<CallToolResult, McpError> {
        let blocks = overview::collection_overview(&self.client).await;
        Ok(blocks_to_result(blocks))
    }

    #[tool(
        name = "find-notes",
        description = "Find notes matching a query in Anki"
    )]
    async fn find_notes(
        &self,
        Parameters(params): Parameters<FindNotesParams>,
    ) -> Result<CallToolResult, McpError> {
        let blocks = notes::find_notes(&self.client, &params.query, params.limit).await;
        Ok(blocks_to_result(blocks))
    }

    #[tool(
        name = "find-cards",
        description = "Find card IDs matching a query in Anki"
    )]
    async fn find_cards(
        &self,
        Parameters(params): Parameters<FindCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        let blocks = cards::find_cards(&self.client, &params.query, params.limit).await;
        Ok(blocks_to_result(blocks))
    }

    #[tool(
        name = "add-or-update-notes",
        description = "Add new notes or update existing ones in Anki"
    )]
    async fn add_or_update_notes(
        &self,
        Parameters(params): Parameters<AddOrUpdateNotesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_write("add-or-update-notes")?;

        let requests: Vec<NoteUpsert> = params
            .notes
            .into_iter()
            .map(|n| NoteUpsert {
                deck_name: n.deck_name,
                model_name: n.model_name,
                fields: n.fields,
                tags: n.tags,
            })
            .collect();

        let blocks = upsert::add_or_update_notes(&self.client, &requests).await;
        Ok(blocks_to_result(blocks))
    }

    #[tool(name = "suspend-cards", description = "Suspend cards by their card IDs")]
    async fn suspend_cards(
        &self,
        Parameters(params): Parameters<CardIdsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_write("suspend-cards")?;
        let blocks = suspend::suspend_cards(&self.client, &params.card_ids).await;
        Ok(blocks_to_result(blocks))
    }

    #[tool(
        name = "unsuspend-cards",
        description = "Unsuspend cards by their card IDs"
    )]
    async fn unsuspend_cards(
        &self,
        Parameters(params): Parameters<CardIdsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_write("unsuspend-cards")?;
        let blocks = suspend::unsuspend_cards(&self.client, &params.card_ids).await;
        Ok(blocks_to_result(blocks))
    }

    #[tool(
        name = "get-review-stats",
        description = "Get review statistics from Anki showing cards reviewed per day, with optional time range filtering"
    )]
    async fn get_review_stats(
        &self,
        Parameters(params): Parameters<ReviewStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        let blocks = review_stats::review_stats(&self.client, &params.time_range).await;
        Ok(blocks_to_result(blocks))
    }

    #[tool(
        name = "get-stats",
        description = "Get combined statistics from Anki: reviews, difficulty, due counts, and retention"
    )]
    async fn get_stats(
        &self,
        Parameters(params): Parameters<GetStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = StatsRequest {
            stat_type: params.stat_type,
            deck_name: params.deck_name,
            include_cards: params.include_cards,
        };
        let blocks = stats::get_stats(&self.client, &request).await;
        Ok(blocks_to_result(blocks))
    }
}

#[tool_handler]
impl ServerHandler for AnkiServer {
    fn get_info(&self) -> ServerInfo {
        let mode = if self.read_only { " (read-only)" } else { "" };
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Query and manage an Anki collection via AnkiConnect{}. \
                 Requires Anki to be running with the AnkiConnect add-on installed. \
                 Tools: get-collection-overview, find-notes, find-cards, \
                 add-or-update-notes, suspend-cards, unsuspend-cards, \
                 get-review-stats, get-stats.",
                mode
            )),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let url = format!("http://{}:{}", args.host, args.port);
    info!(
        anki_url = %url,
        read_only = args.read_only,
        transport = ?args.transport,
        "Starting ankilink-mcp server"
    );

    let server = AnkiServer::new(&url, args.read_only);

    match args.transport {
        Transport::Stdio => {
            let transport = (tokio::io::stdin(), tokio::io::stdout());
            let mcp_server = server.serve(transport).await?;
            mcp_server.waiting().await?;
        }
        Transport::Http => {
            use rmcp::transport::streamable_http_server::{
                StreamableHttpServerConfig, StreamableHttpService,
                session::local::LocalSessionManager,
            };

            let bind_addr = format!("{}:{}", args.http_host, args.http_port);
            info!(bind_addr = %bind_addr, "Starting HTTP transport");

            let service: StreamableHttpService<AnkiServer, LocalSessionManager> =
                StreamableHttpService::new(
                    move || Ok(server.clone()),
                    Arc::new(LocalSessionManager::default()),
                    StreamableHttpServerConfig::default(),
                );

            let router = axum::Router::new().nest_service("/mcp", service);
            let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
            info!(bind_addr = %bind_addr, "MCP server listening on HTTP");

            axum::serve(listener, router).await?;
        }
    }

    Ok(())
}

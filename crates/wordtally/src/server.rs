//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analyzer over stdio so assistants can request the same
//! reports the CLI prints. Each `#[tool]` method delegates to
//! `wordtally-core` and returns the report serialized as JSON.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use wordtally_core::analyze::{self, AnalyzerOptions};
use wordtally_core::{Category, stats};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Minimum trimmed length in characters (default 500).
    pub min_chars: Option<usize>,
}

/// Parameters for the `basic_stats` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BasicStatsParams {
    /// The text to count.
    pub text: String,
}

/// Parameters for the `tally_category` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TallyCategoryParams {
    /// The text to count.
    pub text: String,
    /// Category to rank: "pronouns", "prepositions", or "articles".
    pub category: String,
    /// Maximum ranked entries. Omit for the category default.
    pub limit: Option<usize>,
}

/// MCP server exposing the text analyzer.
#[derive(Clone)]
pub struct TallyServer {
    options: AnalyzerOptions,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for TallyServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl TallyServer {
    /// Create a server with default analyzer options and no input limit.
    pub fn new() -> Self {
        Self::with_options(AnalyzerOptions::default(), None)
    }

    /// Create a server using configured analyzer options and input limit.
    pub fn with_options(options: AnalyzerOptions, max_input_bytes: Option<usize>) -> Self {
        Self {
            options,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_input(&self, text: &str) -> Result<(), McpError> {
        if let Some(max) = self.max_input_bytes
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    text.len()
                ),
                None,
            ));
        }
        Ok(())
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full analysis: basic stats plus ranked pronouns, prepositions, and articles.
    #[tool(
        description = "Analyze text: letter, word, whitespace, newline, and symbol counts plus ranked pronouns, prepositions, and articles. Short input is rejected with an advisory."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", min_chars = ?params.min_chars, "executing MCP tool");
        self.check_input(&params.text)?;

        let options = params
            .min_chars
            .map_or(self.options, |min| self.options.with_min_chars(min));
        let analysis = analyze::analyze(&params.text, &options);
        let json = to_json(&analysis)?;

        tracing::info!(
            tool = "analyze_text",
            rejected = analysis.rejection().is_some(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Basic statistics only. No minimum length applies.
    #[tool(description = "Count letters, words, whitespace, newlines, and special symbols in text.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn basic_stats(
        &self,
        Parameters(params): Parameters<BasicStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "basic_stats", "executing MCP tool");
        self.check_input(&params.text)?;

        let report = stats::basic_stats(&params.text);
        let json = to_json(&report)?;

        tracing::info!(tool = "basic_stats", words = report.words, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Ranked frequency table for one category.
    #[tool(
        description = "Rank the pronouns, prepositions, or articles in text by count, most frequent first."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", category = %params.category))]
    fn tally_category(
        &self,
        Parameters(params): Parameters<TallyCategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "tally_category", limit = ?params.limit, "executing MCP tool");
        self.check_input(&params.text)?;

        let category: Category = params
            .category
            .parse()
            .map_err(|e: wordtally_core::AnalysisError| McpError::invalid_params(e.to_string(), None))?;
        let limit = params.limit.or_else(|| self.options.limit_for(category));
        let result = analyze::tally(&params.text, category, limit);
        let json = to_json(&result)?;

        tracing::info!(
            tool = "tally_category",
            entries = result.entries().len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for TallyServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for a full report, or basic_stats and tally_category for single parts.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes question analysis over the MCP protocol so AI assistants can rank
//! the words of quiz questions via stdio transport.
//!
//! # Architecture
//!
//! The server is a presentation layer over the same core library the CLI
//! commands use. Each `#[tool]` method resolves its settings against the loaded
//! [`Config`] and delegates to [`quiz_lens_core`].

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use quiz_lens_core::analysis::{self, AnalysisOptions};
use quiz_lens_core::config::Config;
use quiz_lens_core::frequency::count_words;
use quiz_lens_core::question::QuizQuestion;
use quiz_lens_core::ranking::{Preset, top_words};

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

/// Parameters for the `analyze_questions` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeQuestionsParams {
    /// Questions to analyze, each with `text` and `percent_correct` (0.0-1.0).
    pub questions: Vec<QuizQuestion>,
    /// Correctness rate at or above which a question is well answered.
    pub threshold: Option<f64>,
    /// Selection preset: "compact" or "detailed".
    pub preset: Option<Preset>,
    /// Minimum occurrences for a word to be listed.
    pub min_frequency: Option<usize>,
    /// Maximum words listed per group.
    pub limit: Option<usize>,
}

/// Parameters for the `top_words` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TopWordsParams {
    /// The text to rank.
    pub text: String,
    /// Minimum occurrences for a word to be listed.
    pub min_frequency: Option<usize>,
    /// Maximum words listed.
    pub limit: Option<usize>,
}

/// MCP server exposing question analysis to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    config: Config,
    max_input: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with default settings.
    pub fn new() -> Self {
        let config = Config::default();
        let max_input = config.input_limit();
        Self::from_config(&config, max_input)
    }

    /// Create a server that analyzes with the given configuration.
    pub fn from_config(config: &Config, max_input: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config: config.clone(),
            max_input,
        }
    }

    fn check_input_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn resolve_options(&self, params: &AnalyzeQuestionsParams) -> AnalysisOptions {
        let preset = params.preset.unwrap_or(self.config.preset);
        AnalysisOptions {
            threshold: params.threshold.unwrap_or(self.config.threshold),
            selection: preset
                .options()
                .overridden(self.config.min_frequency, self.config.limit)
                .overridden(params.min_frequency, params.limit),
        }
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
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
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

    /// Rank the words of well- and wrong-answered questions.
    #[tool(
        description = "Split quiz questions by correctness rate and return the most frequent words of each group with a summary."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_questions(
        &self,
        Parameters(params): Parameters<AnalyzeQuestionsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_questions",
            questions = params.questions.len(),
            "executing MCP tool"
        );

        let text_len = params.questions.iter().map(|q| q.text.len()).sum();
        self.check_input_size(text_len)?;

        let options = self.resolve_options(&params);
        options
            .validate()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let tokenizer = self.config.tokenizer();
        let report = analysis::analyze_questions(&params.questions, &tokenizer, &options);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_questions",
            well = report.well_answered.len(),
            wrong = report.wrong_answered.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Rank the words of a single text.
    #[tool(description = "Return the most frequent non-stop words of a text with their counts.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn top_words(
        &self,
        Parameters(params): Parameters<TopWordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "top_words", "executing MCP tool");
        self.check_input_size(params.text.len())?;

        let selection = self
            .config
            .analysis_options()
            .selection
            .overridden(params.min_frequency, params.limit);
        let words = self.config.tokenizer().tokenize(&params.text);
        let ranked = top_words(&count_words(&words), selection);

        let json = serde_json::to_string_pretty(&ranked)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "top_words", listed = ranked.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
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
                "{} MCP server. Use analyze_questions to compare the vocabulary of \
                 well-answered and wrong-answered quiz questions.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

//! MCP server implementation for Migmate
//!
//! This module implements the Model Context Protocol server for Migmate,
//! providing a standardized interface for AI models to read and adjust
//! the user's migration plan.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use migmate_core::Planner;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{ListTasks, McpResult, ResetCompletion, TaskRef, UpdateProfile};

/// MCP server for Migmate
#[derive(Clone)]
pub struct MigmateMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MigmateMcpServer {
    /// Create a new Migmate MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "show_plan",
        description = "Show the complete derived migration plan: every applicable stage with its date window, the scheduled tasks with due dates and done markers, and overall progress. The plan is re-derived from the current profile on every call."
    )]
    async fn show_plan(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.show_plan().await
    }

    #[tool(
        name = "show_profile",
        description = "Show the planning profile: visa stream, pace, start date, destination state, English test choice, and whether a partner or children are included."
    )]
    async fn show_profile(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.show_profile().await
    }

    #[tool(
        name = "update_profile",
        description = "Update one or more profile fields; omitted fields keep their value. Accepted values: visa_stream '189'|'190'|'491'|'partner'|'graduate', pace 'accelerated'|'standard'|'relaxed', start_date 'YYYY-MM-DD' (empty string clears it), relocating_state a state code or 'national', english_test 'ielts'|'pte'|'toefl'|'cambridge'|'none', plus boolean has_partner, needs_english_exam, has_children. The plan re-derives immediately from the new profile."
    )]
    async fn update_profile(&self, params: Parameters<UpdateProfile>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.update_profile(params).await
    }

    #[tool(
        name = "list_tasks",
        description = "List every scheduled task with its stage, suggested due date and completion status. Pass stage (a stage id such as 'foundations') to restrict the list to one stage."
    )]
    async fn list_tasks(&self, params: Parameters<ListTasks>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.list_tasks(params).await
    }

    #[tool(
        name = "complete_task",
        description = "Mark a task as done by its catalogue id (shown in task listings, e.g. 'settle-tfn'). Returns the task and updated progress figures. Fails if the id is not part of the current plan."
    )]
    async fn complete_task(&self, params: Parameters<TaskRef>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.complete_task(params).await
    }

    #[tool(
        name = "reopen_task",
        description = "Reopen a previously completed task by its catalogue id, marking it incomplete again. Returns the task and updated progress figures."
    )]
    async fn reopen_task(&self, params: Parameters<TaskRef>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.reopen_task(params).await
    }

    #[tool(
        name = "next_steps",
        description = "Show the next incomplete tasks in plan order (at most four). An empty result means every planned task is done. Completing a task immediately promotes the next incomplete one into this list."
    )]
    async fn next_steps(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.next_steps().await
    }

    #[tool(
        name = "show_progress",
        description = "Show completion figures: total and completed task counts, overall percentage, and a per-stage breakdown."
    )]
    async fn show_progress(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.show_progress().await
    }

    #[tool(
        name = "list_resources",
        description = "List the reference resources (official sites, calculators, document checklists) attached to the stages of the current plan, deduplicated by URL."
    )]
    async fn list_resources(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.list_resources().await
    }

    #[tool(
        name = "reset_completion",
        description = "Clear every completed-task record, returning the plan to an untouched state. This cannot be undone; 'confirmed' must be true for the reset to proceed. The profile is not affected."
    )]
    async fn reset_completion(&self, params: Parameters<ResetCompletion>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.reset_completion(params).await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.get_prompt(request, context).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MigmateMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "migmate".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Migmate is a personal migration planner that derives a staged checklist and timeline from a small user profile.

## Core Concepts
- **Profile**: the user's situation (visa stream, pace, start date, destination, family flags). The only configuration there is.
- **Plan**: a derived, read-only view. Stages applicable to the profile are laid back-to-back from the start date; each stage's tasks get suggested due dates spread across its window.
- **Completion**: which task ids the user has ticked off. The one other piece of durable state.

## Workflow Examples

### Setting up
1. Call `show_profile` to see the current configuration
2. Adjust it with `update_profile` (e.g. visa_stream '190', start_date '2026-03-02')
3. Review the resulting timeline with `show_plan`

### Working the checklist
1. `next_steps` surfaces the next few incomplete tasks in order
2. `complete_task` ticks one off; progress updates immediately
3. `show_progress` gives overall and per-stage percentages

## Things to Know
- The plan is never edited directly: to change it, change the profile. Every read re-derives the plan, so results are always current.
- Task ids are stable; completion is keyed by them and survives profile changes. A task filtered out by a profile change simply disappears from the plan and its record lies dormant.
- Due dates are suggestions from an even spread over each stage window, not hard deadlines.

## Tool Categories
- **Reading**: show_plan, show_profile, list_tasks, next_steps, show_progress, list_resources
- **Mutating**: update_profile, complete_task, reopen_task, reset_completion"#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: MigmateMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Migmate MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

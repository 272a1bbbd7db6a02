//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use migmate_core::{params as core, Planner};
use rmcp::{
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// This generic wrapper struct implements the parameter wrapper pattern by:
// 1. Wrapping any core parameter type in a transparent serde container
// 2. Adding MCP-specific derives (Deserialize, JsonSchema) for JSON handling
// 3. Keeping the core types clean of framework dependencies
//
// The #[serde(transparent)] attribute ensures that deserialization passes
// through directly to the wrapped core type.

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for any parameter
/// type, eliminating the need for individual wrapper structs while
/// maintaining the same functionality and type safety.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type UpdateProfile = McpParams<core::UpdateProfile>;
pub type TaskRef = McpParams<core::TaskRef>;
pub type ListTasks = McpParams<core::ListTasks>;
pub type ResetCompletion = McpParams<core::ResetCompletion>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn show_plan(&self) -> McpResult {
        debug!("show_plan");

        let view = self
            .planner
            .lock()
            .await
            .plan()
            .await
            .map_err(|e| to_mcp_error("Failed to derive plan", &e))?;

        text_result(view.to_string())
    }

    pub async fn show_profile(&self) -> McpResult {
        debug!("show_profile");

        let profile = self
            .planner
            .lock()
            .await
            .profile()
            .await
            .map_err(|e| to_mcp_error("Failed to load profile", &e))?;

        text_result(profile.to_string())
    }

    pub async fn update_profile(&self, Parameters(params): Parameters<UpdateProfile>) -> McpResult {
        debug!("update_profile: {:?}", params);

        let outcome = self
            .planner
            .lock()
            .await
            .update_profile(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update profile", &e))?;

        text_result(outcome.to_string())
    }

    pub async fn list_tasks(&self, Parameters(params): Parameters<ListTasks>) -> McpResult {
        debug!("list_tasks: {:?}", params);

        let planner = self.planner.lock().await;
        let inner_params = params.as_ref();
        let tasks = planner
            .tasks(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;

        let title = match &inner_params.stage {
            Some(stage) => format!("Tasks in stage '{stage}'"),
            None => "All planned tasks".to_string(),
        };

        text_result(format!("# {title}\n\n{tasks}"))
    }

    pub async fn complete_task(&self, Parameters(params): Parameters<TaskRef>) -> McpResult {
        debug!("complete_task: {:?}", params);

        let outcome = self
            .planner
            .lock()
            .await
            .complete_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to complete task", &e))?;

        text_result(outcome.to_string())
    }

    pub async fn reopen_task(&self, Parameters(params): Parameters<TaskRef>) -> McpResult {
        debug!("reopen_task: {:?}", params);

        let outcome = self
            .planner
            .lock()
            .await
            .reopen_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to reopen task", &e))?;

        text_result(outcome.to_string())
    }

    pub async fn next_steps(&self) -> McpResult {
        debug!("next_steps");

        let next = self
            .planner
            .lock()
            .await
            .next_steps()
            .await
            .map_err(|e| to_mcp_error("Failed to read next steps", &e))?;

        text_result(next.to_string())
    }

    pub async fn show_progress(&self) -> McpResult {
        debug!("show_progress");

        let report = self
            .planner
            .lock()
            .await
            .progress()
            .await
            .map_err(|e| to_mcp_error("Failed to read progress", &e))?;

        text_result(format!("# Progress\n\n{report}"))
    }

    pub async fn list_resources(&self) -> McpResult {
        debug!("list_resources");

        let resources = self
            .planner
            .lock()
            .await
            .resources()
            .await
            .map_err(|e| to_mcp_error("Failed to list resources", &e))?;

        text_result(resources.to_string())
    }

    pub async fn reset_completion(
        &self,
        Parameters(params): Parameters<ResetCompletion>,
    ) -> McpResult {
        debug!("reset_completion: {:?}", params);

        let outcome = self
            .planner
            .lock()
            .await
            .reset_completion(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to reset completion", &e))?;

        text_result(outcome.to_string())
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let mut prompt_text = template.template.clone();

        // Apply argument substitution if arguments are provided
        if let Some(args) = &request.arguments {
            for arg_def in &template.arguments {
                if let Some(arg_value) = args.get(&arg_def.name) {
                    if let Some(arg_str) = arg_value.as_str() {
                        let placeholder = format!("{{{}}}", arg_def.name);
                        prompt_text = prompt_text.replace(&placeholder, arg_str);
                    } else if arg_def.required {
                        return Err(McpError::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    }
                } else if arg_def.required {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
            }
        } else {
            // Check if any required arguments are missing
            let required_args: Vec<_> = template
                .arguments
                .iter()
                .filter(|arg| arg.required)
                .map(|arg| arg.name.as_str())
                .collect();
            if !required_args.is_empty() {
                return Err(McpError::invalid_params(
                    format!("Required arguments missing: {}", required_args.join(", ")),
                    None,
                ));
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}

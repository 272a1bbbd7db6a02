//! Error handling utilities for MCP server

use migmate_core::PlannerError;
use rmcp::ErrorData;

/// Helper to convert planner errors to MCP errors
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    match error {
        // The caller supplied something wrong; report it as such
        PlannerError::InvalidInput { .. }
        | PlannerError::TaskNotFound { .. }
        | PlannerError::StageNotFound { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Get predefined prompt templates for migration planning
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "checkin".to_string(),
        description: "Review migration progress and plan the week ahead using Migmate's MCP tools"
            .to_string(),
        template: r#"You are a pragmatic migration planning assistant working with Migmate's MCP tools.

# Focus
{focus}

# Your Task
Run a progress check-in on the user's migration plan and help them decide what to do next.

# Step 1: Read the Current State
- Call `show_profile` to understand the user's situation (visa stream, pace, start date)
- Call `show_progress` for overall and per-stage completion
- Call `next_steps` for the tasks currently waiting

# Step 2: Assess the Timeline
- Call `show_plan` and compare today's date against the stage windows
- Point out stages whose window has passed with incomplete tasks
- If the user is consistently behind, suggest `update_profile` with pace 'relaxed' (or a later start_date) rather than letting the plan drift into fiction; if they are ahead, 'accelerated' tightens it

# Step 3: Recommend Actions
For each of the next steps, give a one-line recommendation:
- What the task involves and roughly how long it takes
- Which resource from `list_resources` helps with it, if any
- Whether anything blocks it (e.g. an English test result gating an EOI)

# Guidelines
- Only mark tasks done with `complete_task` when the user says they are done
- Keep the summary short: progress line, timeline verdict, then at most four recommended actions
- Due dates are suggestions from an even spread, not official deadlines; say so if the user worries about a missed one"#
            .to_string(),
        arguments: vec![PromptTemplateArg {
            name: "focus".to_string(),
            description: "Optional area to focus the check-in on (e.g. 'english test', 'timeline')"
                .to_string(),
            required: false,
        }],
    }]
}

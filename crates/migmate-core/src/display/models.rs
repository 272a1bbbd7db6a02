//! Display implementations for domain models.
//!
//! All Display trait implementations for the core domain models live here,
//! separated from the model definitions to keep data structures free of
//! presentation logic.
//!
//! The implementations produce markdown with status icons and structured
//! sections, matching the terminal renderer's expectations.

use std::fmt;

use super::datetime::CalendarDay;
use crate::models::{
    PlanView, PlannedStage, PlannedTask, Profile, ProgressReport, Resource, StageProgress,
};

impl PlannedTask {
    /// Status icon and word, shared between checklist and detail views.
    pub fn status_icon(&self) -> &'static str {
        if self.done {
            "✓ Done"
        } else {
            "○ Open"
        }
    }

    /// One-line checklist entry with checkbox and due date.
    fn fmt_checklist_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- [{}] {} (due {})",
            if self.done { "x" } else { " " },
            self.title,
            CalendarDay(&self.due_on)
        )
    }
}

impl fmt::Display for PlannedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status_icon())?;
        writeln!(f)?;
        writeln!(f, "- Id: `{}`", self.id)?;
        writeln!(f, "- Stage: {}", self.stage_title)?;
        writeln!(f, "- Due: {}", CalendarDay(&self.due_on))?;

        if let Some(detail) = self.detail {
            writeln!(f)?;
            writeln!(f, "{detail}")?;
        }

        if let Some(link) = self.link {
            writeln!(f)?;
            writeln!(f, "- [{}]({})", link.label, link.url)?;
        }

        Ok(())
    }
}

impl fmt::Display for PlannedStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({} weeks: {} to {})",
            self.title,
            self.duration_weeks,
            CalendarDay(&self.starts_on),
            CalendarDay(&self.ends_on)
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "- Milestone: {}", self.milestone)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Profile")?;
        writeln!(f)?;
        writeln!(f, "- Visa stream: {}", self.visa_stream.label())?;
        writeln!(f, "- Pace: {}", self.pace.as_str())?;
        match &self.start_date {
            Some(day) => writeln!(f, "- Start date: {}", CalendarDay(day))?,
            None => writeln!(f, "- Start date: not set (planning from today)")?,
        }
        writeln!(f, "- Destination: {}", self.relocating_state.label())?;
        if self.needs_english_exam {
            writeln!(f, "- English test: {} (exam still needed)", self.english_test.label())?;
        } else {
            writeln!(f, "- English test: not needed")?;
        }
        writeln!(f, "- Partner included: {}", yes_no(self.has_partner))?;
        writeln!(f, "- Children included: {}", yes_no(self.has_children))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for StageProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}: {}/{} ({}%)",
            self.title, self.completed, self.total, self.percent
        )
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**{}/{} tasks complete ({}%)**",
            self.completed, self.total, self.percent
        )?;

        if !self.stages.is_empty() {
            writeln!(f)?;
            for stage in &self.stages {
                write!(f, "{stage}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- [{}]({}) ({}): {}",
            self.title, self.url, self.category, self.description
        )
    }
}

impl fmt::Display for PlanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Migration plan")?;
        writeln!(f)?;

        if self.stages.is_empty() {
            return writeln!(f, "No stages apply to the current profile.");
        }

        let first = &self.stages[0];
        let last = &self.stages[self.stages.len() - 1];
        writeln!(
            f,
            "- Timeline: {} weeks across {} stages ({} to {})",
            self.total_weeks,
            self.stages.len(),
            CalendarDay(&first.starts_on),
            CalendarDay(&last.ends_on)
        )?;
        writeln!(
            f,
            "- Progress: {}/{} tasks complete ({}%)",
            self.progress.completed, self.progress.total, self.progress.percent
        )?;
        writeln!(f)?;

        for stage in &self.stages {
            write!(f, "{stage}")?;
            writeln!(f)?;

            let mut any = false;
            for task in self.tasks.iter().filter(|t| t.stage_id == stage.id) {
                task.fmt_checklist_line(f)?;
                any = true;
            }
            if !any {
                writeln!(f, "No tasks apply to this stage.")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::{CompletionMap, Pace, Profile, VisaStream};
    use crate::{catalogue, derive_plan};

    fn dated_profile() -> Profile {
        Profile {
            start_date: Some(date(2024, 1, 1)),
            ..Profile::default()
        }
    }

    #[test]
    fn test_profile_display() {
        let output = format!("{}", dated_profile());
        assert!(output.contains("# Profile"));
        assert!(output.contains("- Visa stream: Skilled Independent (189)"));
        assert!(output.contains("- Start date: 01 Jan 2024"));
        assert!(output.contains("- Partner included: no"));
    }

    #[test]
    fn test_profile_display_unset_start_date() {
        let output = format!("{}", Profile::default());
        assert!(output.contains("not set (planning from today)"));
    }

    #[test]
    fn test_plan_view_display() {
        let view = derive_plan(&dated_profile(), &CompletionMap::new(), &catalogue::stages());
        let output = format!("{view}");

        assert!(output.contains("# Migration plan"));
        assert!(output.contains("27 weeks across 6 stages"));
        assert!(output.contains("## Foundations (2 weeks: 01 Jan 2024 to 15 Jan 2024)"));
        assert!(output.contains("- [ ] Check passport validity"));
    }

    #[test]
    fn test_plan_view_display_marks_done_tasks() {
        let mut completion = CompletionMap::new();
        completion.set("foundation-passport-check", true);
        let view = derive_plan(&dated_profile(), &completion, &catalogue::stages());
        let output = format!("{view}");

        assert!(output.contains("- [x] Check passport validity"));
    }

    #[test]
    fn test_planned_task_display() {
        let view = derive_plan(&dated_profile(), &CompletionMap::new(), &catalogue::stages());
        let task = view.task("foundation-visa-research").expect("task missing");
        let output = format!("{task}");

        assert!(output.contains("### Confirm your visa stream (○ Open)"));
        assert!(output.contains("- Id: `foundation-visa-research`"));
        assert!(output.contains("- Stage: Foundations"));
        assert!(output.contains("[Visa finder]("));
    }

    #[test]
    fn test_progress_report_display() {
        let mut profile = dated_profile();
        profile.visa_stream = VisaStream::StateNominated;
        profile.pace = Pace::Accelerated;
        let view = derive_plan(&profile, &CompletionMap::new(), &catalogue::stages());
        let output = format!("{}", view.progress);

        assert!(output.contains("tasks complete (0%)"));
        assert!(output.contains("- Foundations: 0/"));
    }
}

//! Tests for the planning derivation.

use jiff::civil::date;

use super::*;
use crate::catalogue;
use crate::models::{
    CompletionMap, EnglishTest, Pace, Profile, Resource, StageBlueprint, State, TaskBlueprint,
    VisaStream,
};

/// The skilled-independent profile the acceptance scenarios are pinned to.
fn scenario_profile() -> Profile {
    Profile {
        visa_stream: VisaStream::Independent,
        has_partner: false,
        needs_english_exam: true,
        has_children: false,
        pace: Pace::Standard,
        start_date: Some(date(2024, 1, 1)),
        relocating_state: State::National,
        english_test: EnglishTest::None,
    }
}

fn test_task(id: &'static str) -> TaskBlueprint {
    TaskBlueprint {
        id,
        title: id,
        detail: None,
        link: None,
        applies: None,
    }
}

fn test_stage(id: &'static str, weeks: u32, tasks: Vec<TaskBlueprint>) -> StageBlueprint {
    StageBlueprint {
        id,
        title: id,
        summary: "synthetic stage",
        duration_weeks: weeks,
        milestone: "done",
        applies: |_profile| true,
        tasks,
        resources: vec![],
    }
}

#[test]
fn test_scenario_standard_pace_stage_layout() {
    let stages = plan_stages(&scenario_profile(), &catalogue::stages());

    let ids: Vec<&str> = stages.iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        vec![
            "foundations",
            "english-prep",
            "skills-assessment",
            "expression-of-interest",
            "visa-lodgement",
            "settlement",
        ]
    );

    // Pinned windows for the first two stages
    assert_eq!(stages[0].duration_weeks, 2);
    assert_eq!(stages[0].starts_on, date(2024, 1, 1));
    assert_eq!(stages[0].ends_on, date(2024, 1, 15));
    assert_eq!(stages[1].duration_weeks, 4);
    assert_eq!(stages[1].starts_on, date(2024, 1, 15));
    assert_eq!(stages[1].ends_on, date(2024, 2, 12));

    // Remaining durations and the grand total
    assert_eq!(stages[2].duration_weeks, 8);
    assert_eq!(stages[3].duration_weeks, 3);
    assert_eq!(stages[4].duration_weeks, 4);
    assert_eq!(stages[5].duration_weeks, 6);
    let total: u32 = stages.iter().map(|s| s.duration_weeks).sum();
    assert_eq!(total, 27);
    assert_eq!(stages[5].ends_on, date(2024, 7, 8));
}

#[test]
fn test_scenario_accelerated_pace_rounding() {
    let mut profile = scenario_profile();
    profile.pace = Pace::Accelerated;
    let stages = plan_stages(&profile, &catalogue::stages());

    // round(2 * 0.75) = 2: the one-week floor is not triggered
    assert_eq!(stages[0].id, "foundations");
    assert_eq!(stages[0].duration_weeks, 2);
    // round(4 * 0.75) = 3
    assert_eq!(stages[1].id, "english-prep");
    assert_eq!(stages[1].duration_weeks, 3);
}

#[test]
fn test_pace_total_duration_monotonic() {
    let mut totals = Vec::new();
    for pace in [Pace::Accelerated, Pace::Standard, Pace::Relaxed] {
        let mut profile = scenario_profile();
        profile.pace = pace;
        let total: u32 = plan_stages(&profile, &catalogue::stages())
            .iter()
            .map(|s| s.duration_weeks)
            .sum();
        totals.push(total);
    }
    assert!(totals[0] <= totals[1]);
    assert!(totals[1] <= totals[2]);
}

#[test]
fn test_adjusted_duration_floors_at_one_week() {
    let mut profile = scenario_profile();
    profile.pace = Pace::Accelerated;
    let stages = plan_stages(&profile, &[test_stage("tiny", 0, vec![test_task("tiny-a")])]);

    assert_eq!(stages[0].duration_weeks, 1);
    assert_eq!(stages[0].ends_on, stages[0].starts_on + jiff::Span::new().days(7));
}

#[test]
fn test_windows_are_contiguous() {
    let mut profile = scenario_profile();
    profile.visa_stream = VisaStream::StateNominated;
    profile.has_partner = true;
    profile.has_children = true;
    let stages = plan_stages(&profile, &catalogue::stages());

    assert_eq!(stages[0].starts_on, date(2024, 1, 1));
    for pair in stages.windows(2) {
        assert_eq!(pair[1].starts_on, pair[0].ends_on);
    }
}

#[test]
fn test_derivation_is_deterministic() {
    let profile = scenario_profile();
    let completion = CompletionMap::new();

    let first = derive_plan(&profile, &completion, &catalogue::stages());
    let second = derive_plan(&profile, &completion, &catalogue::stages());
    assert_eq!(first, second);
}

#[test]
fn test_stage_exclusion_suppresses_tasks() {
    let stages = plan_stages(&scenario_profile(), &catalogue::stages());
    let tasks = schedule_tasks(&stages);

    // Stage-gated out entirely
    assert!(tasks.iter().all(|t| t.stage_id != "state-nomination"));
    assert!(tasks.iter().all(|t| t.stage_id != "partner-evidence"));
    // Task-gated within included stages
    assert!(tasks.iter().all(|t| t.id != "foundation-state-intent"));
    assert!(tasks.iter().all(|t| t.id != "skills-partner-assessment"));
    // Ungated task in an included stage survives
    assert!(tasks.iter().any(|t| t.id == "foundation-passport-check"));
}

#[test]
fn test_task_predicates_follow_profile() {
    let mut profile = scenario_profile();
    profile.has_partner = true;
    profile.english_test = EnglishTest::Pte;

    let tasks = schedule_tasks(&plan_stages(&profile, &catalogue::stages()));
    assert!(tasks.iter().any(|t| t.id == "skills-partner-assessment"));
    // Already chose a test, so the chooser task drops out
    assert!(tasks.iter().all(|t| t.id != "english-choose-test"));
}

#[test]
fn test_due_dates_within_windows() {
    let mut profile = scenario_profile();
    profile.pace = Pace::Relaxed;
    let tasks = schedule_tasks(&plan_stages(&profile, &catalogue::stages()));

    assert!(!tasks.is_empty());
    for task in &tasks {
        assert!(
            task.window_starts <= task.due_on && task.due_on <= task.window_ends,
            "task {} due {} outside window {}..{}",
            task.id,
            task.due_on,
            task.window_starts,
            task.window_ends
        );
    }
}

#[test]
fn test_due_dates_spread_evenly() {
    let profile = scenario_profile();
    let stages = plan_stages(
        &profile,
        &[test_stage(
            "spread",
            1,
            vec![
                test_task("spread-1"),
                test_task("spread-2"),
                test_task("spread-3"),
                test_task("spread-4"),
                test_task("spread-5"),
                test_task("spread-6"),
                test_task("spread-7"),
            ],
        )],
    );
    let tasks = schedule_tasks(&stages);

    // Seven tasks across a seven-day window: one per day, last one the
    // day before the window closes
    let due: Vec<_> = tasks.iter().map(|t| t.due_on).collect();
    let expected: Vec<_> = (0..7).map(|d| date(2024, 1, 1) + jiff::Span::new().days(d)).collect();
    assert_eq!(due, expected);
}

#[test]
fn test_single_task_lands_at_window_end() {
    let profile = scenario_profile();
    let stages = plan_stages(&profile, &[test_stage("solo", 2, vec![test_task("solo-a")])]);
    let tasks = schedule_tasks(&stages);

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].due_on, date(2024, 1, 14));
    assert_eq!(tasks[0].window_ends, date(2024, 1, 15));
}

#[test]
fn test_flat_order_preserves_stage_then_task_order() {
    let profile = scenario_profile();
    let stages = plan_stages(
        &profile,
        &[
            test_stage("one", 1, vec![test_task("one-a"), test_task("one-b")]),
            test_stage("two", 1, vec![test_task("two-a")]),
        ],
    );
    let tasks = schedule_tasks(&stages);

    let ids: Vec<&str> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["one-a", "one-b", "two-a"]);
    assert_eq!(tasks[0].stage_index, 0);
    assert_eq!(tasks[2].stage_index, 1);
}

fn ten_task_catalogue() -> Vec<StageBlueprint> {
    vec![
        test_stage(
            "first",
            2,
            vec![
                test_task("t-01"),
                test_task("t-02"),
                test_task("t-03"),
                test_task("t-04"),
                test_task("t-05"),
            ],
        ),
        test_stage(
            "second",
            2,
            vec![
                test_task("t-06"),
                test_task("t-07"),
                test_task("t-08"),
                test_task("t-09"),
                test_task("t-10"),
            ],
        ),
    ]
}

#[test]
fn test_empty_completion_yields_first_four_next_steps() {
    let view = derive_plan(
        &scenario_profile(),
        &CompletionMap::new(),
        &ten_task_catalogue(),
    );

    assert_eq!(view.progress.total, 10);
    assert_eq!(view.progress.completed, 0);
    assert_eq!(view.progress.percent, 0);
    let next: Vec<&str> = view.progress.next_steps.iter().map(|t| t.id).collect();
    assert_eq!(next, vec!["t-01", "t-02", "t-03", "t-04"]);
}

#[test]
fn test_all_complete_yields_full_percent_and_no_next_steps() {
    let mut completion = CompletionMap::new();
    for n in 1..=10 {
        completion.set(format!("t-{n:02}"), true);
    }
    let view = derive_plan(&scenario_profile(), &completion, &ten_task_catalogue());

    assert_eq!(view.progress.completed, 10);
    assert_eq!(view.progress.percent, 100);
    assert!(view.progress.next_steps.is_empty());
}

#[test]
fn test_completing_early_task_promotes_next() {
    let mut completion = CompletionMap::new();
    completion.set("t-01", true);
    let view = derive_plan(&scenario_profile(), &completion, &ten_task_catalogue());

    let next: Vec<&str> = view.progress.next_steps.iter().map(|t| t.id).collect();
    assert_eq!(next, vec!["t-02", "t-03", "t-04", "t-05"]);
}

#[test]
fn test_completion_toggle_round_trip_is_invariant() {
    let catalogue = ten_task_catalogue();
    let mut completion = CompletionMap::new();
    completion.set("t-03", true);

    let before = derive_plan(&scenario_profile(), &completion, &catalogue);

    completion.set("t-07", true);
    completion.set("t-07", false);
    let after = derive_plan(&scenario_profile(), &completion, &catalogue);

    assert_eq!(before.progress.percent, after.progress.percent);
    assert_eq!(before.progress.completed, after.progress.completed);
    let next_before: Vec<&str> = before.progress.next_steps.iter().map(|t| t.id).collect();
    let next_after: Vec<&str> = after.progress.next_steps.iter().map(|t| t.id).collect();
    assert_eq!(next_before, next_after);
}

#[test]
fn test_percent_rounds_to_nearest() {
    let tasks = schedule_tasks(&plan_stages(
        &scenario_profile(),
        &[test_stage(
            "thirds",
            1,
            vec![test_task("a-1"), test_task("a-2"), test_task("a-3")],
        )],
    ));

    let mut completion = CompletionMap::new();
    completion.set("a-1", true);
    assert_eq!(aggregate(&tasks, &completion).percent, 33);
    completion.set("a-2", true);
    assert_eq!(aggregate(&tasks, &completion).percent, 67);
}

#[test]
fn test_percent_of_empty_plan_is_zero() {
    let report = aggregate(&[], &CompletionMap::new());
    assert_eq!(report.total, 0);
    assert_eq!(report.percent, 0);
    assert!(report.next_steps.is_empty());
    assert!(report.stages.is_empty());
}

#[test]
fn test_stage_rollups_restricted_to_each_stage() {
    let catalogue = ten_task_catalogue();
    let mut completion = CompletionMap::new();
    completion.set("t-01", true);
    completion.set("t-02", true);
    completion.set("t-06", true);

    let view = derive_plan(&scenario_profile(), &completion, &catalogue);
    assert_eq!(view.progress.stages.len(), 2);
    assert_eq!(view.progress.stages[0].stage_id, "first");
    assert_eq!(view.progress.stages[0].completed, 2);
    assert_eq!(view.progress.stages[0].total, 5);
    assert_eq!(view.progress.stages[0].percent, 40);
    assert_eq!(view.progress.stages[1].completed, 1);
    assert_eq!(view.progress.stages[1].percent, 20);
}

#[test]
fn test_stage_with_no_surviving_tasks_gets_zero_rollup() {
    let mut gated = test_stage("gated", 1, vec![test_task("gated-a")]);
    gated.tasks[0].applies = Some(|profile| profile.has_children);
    let catalogue = vec![gated, test_stage("open", 1, vec![test_task("open-a")])];

    let view = derive_plan(&scenario_profile(), &CompletionMap::new(), &catalogue);

    // The gated stage is still planned, just empty
    assert_eq!(view.stages.len(), 2);
    assert!(view.stages[0].tasks.is_empty());
    assert_eq!(view.progress.stages.len(), 2);
    assert_eq!(view.progress.stages[0].stage_id, "gated");
    assert_eq!(view.progress.stages[0].total, 0);
    assert_eq!(view.progress.stages[0].percent, 0);
}

#[test]
fn test_resource_dedup_first_occurrence_wins() {
    let shared = "https://example.com/shared";
    let mut first = test_stage("first", 1, vec![test_task("f-a")]);
    first.resources = vec![Resource {
        title: "First copy",
        description: "kept",
        url: shared,
        category: "official",
    }];
    let mut second = test_stage("second", 1, vec![test_task("s-a")]);
    second.resources = vec![
        Resource {
            title: "Second copy",
            description: "dropped",
            url: shared,
            category: "official",
        },
        Resource {
            title: "Unique",
            description: "kept",
            url: "https://example.com/unique",
            category: "official",
        },
    ];

    let stages = plan_stages(&scenario_profile(), &[first, second]);
    let resources = collect_resources(&stages);

    assert_eq!(resources.len(), 2);
    assert_eq!(resources[0].title, "First copy");
    assert_eq!(resources[1].title, "Unique");
}

#[test]
fn test_catalogue_shared_urls_collapse_in_real_plan() {
    let view = derive_plan(
        &scenario_profile(),
        &CompletionMap::new(),
        &catalogue::stages(),
    );

    let calculator = "https://immi.homeaffairs.gov.au/help-support/tools/points-calculator";
    let hits = view.resources.iter().filter(|r| r.url == calculator).count();
    assert_eq!(hits, 1);
    // First-wins keeps the foundations wording
    let kept = view.resources.iter().find(|r| r.url == calculator);
    assert_eq!(
        kept.map(|r| r.description),
        Some("Estimate your skilled migration points score")
    );
}

#[test]
fn test_derive_plan_stamps_done_flags() {
    let mut completion = CompletionMap::new();
    completion.set("foundation-passport-check", true);

    let view = derive_plan(&scenario_profile(), &completion, &catalogue::stages());
    assert_eq!(
        view.task("foundation-passport-check").map(|t| t.done),
        Some(true)
    );
    assert_eq!(
        view.task("foundation-visa-research").map(|t| t.done),
        Some(false)
    );
    assert!(view.task("skills-partner-assessment").is_none());
}

#[test]
fn test_total_weeks_matches_stage_sum() {
    let view = derive_plan(
        &scenario_profile(),
        &CompletionMap::new(),
        &catalogue::stages(),
    );
    assert_eq!(view.total_weeks, 27);
    let sum: u32 = view.stages.iter().map(|s| s.duration_weeks).sum();
    assert_eq!(view.total_weeks, sum);
}

//! End-to-end planner workflow tests against a real store file.

mod common;

use common::create_test_environment;
use migmate_core::params::{ListTasks, ResetCompletion, TaskRef, UpdateProfile};
use migmate_core::{Pace, PlannerBuilder, VisaStream};

#[tokio::test]
async fn test_complete_planning_workflow() {
    let (_temp_dir, store_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_store_path(Some(store_path))
        .build()
        .await
        .expect("Failed to create planner");

    // Configure the profile for the pinned scenario
    let outcome = planner
        .update_profile(&UpdateProfile {
            visa_stream: Some("189".to_string()),
            pace: Some("standard".to_string()),
            start_date: Some("2024-01-01".to_string()),
            needs_english_exam: Some(true),
            ..UpdateProfile::default()
        })
        .await
        .expect("Failed to update profile");
    assert_eq!(outcome.profile.visa_stream, VisaStream::Independent);

    // Derive the plan and verify the pinned layout
    let view = planner.plan().await.expect("Failed to derive plan");
    let stage_ids: Vec<&str> = view.stages.iter().map(|s| s.id).collect();
    assert_eq!(
        stage_ids,
        vec![
            "foundations",
            "english-prep",
            "skills-assessment",
            "expression-of-interest",
            "visa-lodgement",
            "settlement",
        ]
    );
    assert_eq!(view.total_weeks, 27);

    // Work through the first next step
    let next = planner.next_steps().await.expect("Failed to read next steps");
    assert_eq!(next.len(), 4);
    let first_id = next[0].id.to_string();

    let toggle = planner
        .complete_task(&TaskRef { id: first_id.clone() })
        .await
        .expect("Failed to complete task");
    assert!(toggle.task.done);

    // Completing it promoted a new task into the visible set
    let next = planner.next_steps().await.expect("Failed to re-read next steps");
    assert_eq!(next.len(), 4);
    assert!(next.iter().all(|t| t.id != first_id));

    // Finish everything
    let all_ids: Vec<String> = view.tasks.iter().map(|t| t.id.to_string()).collect();
    for id in &all_ids {
        planner
            .complete_task(&TaskRef { id: id.clone() })
            .await
            .expect("Failed to complete task");
    }

    let progress = planner.progress().await.expect("Failed to read progress");
    assert_eq!(progress.percent, 100);
    assert!(progress.next_steps.is_empty());

    // Reset and verify a clean slate
    let reset = planner
        .reset_completion(&ResetCompletion { confirmed: true })
        .await
        .expect("Failed to reset completion");
    assert_eq!(reset.cleared, all_ids.len());

    let progress = planner.progress().await.expect("Failed to re-read progress");
    assert_eq!(progress.completed, 0);
    assert_eq!(progress.percent, 0);
}

#[tokio::test]
async fn test_state_survives_planner_recreation() {
    let (_temp_dir, store_path) = create_test_environment();

    {
        let planner = PlannerBuilder::new()
            .with_store_path(Some(&store_path))
            .build()
            .await
            .expect("Failed to create planner");

        planner
            .update_profile(&UpdateProfile {
                pace: Some("relaxed".to_string()),
                start_date: Some("2025-06-02".to_string()),
                ..UpdateProfile::default()
            })
            .await
            .expect("Failed to update profile");

        planner
            .complete_task(&TaskRef {
                id: "foundation-budget".to_string(),
            })
            .await
            .expect("Failed to complete task");
    }

    // A fresh planner over the same file sees the same state
    let planner = PlannerBuilder::new()
        .with_store_path(Some(&store_path))
        .build()
        .await
        .expect("Failed to recreate planner");

    let profile = planner.profile().await.expect("Failed to load profile");
    assert_eq!(profile.pace, Pace::Relaxed);

    let progress = planner.progress().await.expect("Failed to read progress");
    assert_eq!(progress.completed, 1);
}

#[tokio::test]
async fn test_profile_change_reshapes_task_list() {
    let (_temp_dir, store_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_store_path(Some(store_path))
        .build()
        .await
        .expect("Failed to create planner");

    planner
        .update_profile(&UpdateProfile {
            start_date: Some("2024-01-01".to_string()),
            ..UpdateProfile::default()
        })
        .await
        .expect("Failed to set start date");

    let tasks = planner
        .tasks(&ListTasks::default())
        .await
        .expect("Failed to list tasks");
    assert!(tasks.iter().all(|t| t.id != "skills-partner-assessment"));
    let solo_count = tasks.len();

    planner
        .update_profile(&UpdateProfile {
            has_partner: Some(true),
            ..UpdateProfile::default()
        })
        .await
        .expect("Failed to add partner");

    let tasks = planner
        .tasks(&ListTasks::default())
        .await
        .expect("Failed to re-list tasks");
    assert!(tasks.iter().any(|t| t.id == "skills-partner-assessment"));
    assert!(tasks.len() > solo_count);

    // The partner-evidence stage is gated on the partner visa stream, so
    // its tasks stay out no matter what the partner flag says
    assert!(tasks.iter().all(|t| t.id != "partner-joint-finances"));
}

#[tokio::test]
async fn test_completion_survives_profile_changes() {
    let (_temp_dir, store_path) = create_test_environment();

    let planner = PlannerBuilder::new()
        .with_store_path(Some(store_path))
        .build()
        .await
        .expect("Failed to create planner");

    planner
        .complete_task(&TaskRef {
            id: "foundation-passport-check".to_string(),
        })
        .await
        .expect("Failed to complete task");

    // Stream change redraws the plan, but the ticked task stays ticked
    planner
        .update_profile(&UpdateProfile {
            visa_stream: Some("190".to_string()),
            ..UpdateProfile::default()
        })
        .await
        .expect("Failed to switch stream");

    let view = planner.plan().await.expect("Failed to derive plan");
    let task = view
        .task("foundation-passport-check")
        .expect("Task must still be planned");
    assert!(task.done);
}

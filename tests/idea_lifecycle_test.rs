//! Lifecycle tests — status overwrites with the feedback side effect, the
//! terminal reward grant, and the full submit→approve→reward flow.

mod common;

use common::*;
use ideahub::errors::AppError;
use ideahub::models::feedback::{self, FeedbackType};
use ideahub::models::idea::*;
use ideahub::models::reward;
use ideahub::models::user::Role;

#[test]
fn test_set_status_records_updater() {
    let (_dir, conn) = setup_test_db();
    let employee = create_test_user(&conn, "employee@example.com", Role::Employee);
    let manager = create_test_user(&conn, "manager@example.com", Role::InnovationManager);
    let idea_id = create_test_idea(&conn, employee);

    set_status(&conn, idea_id, IdeaStatus::InProgress, manager, None)
        .expect("Failed to set status");

    let updated = find_by_id(&conn, idea_id)
        .expect("Query failed")
        .expect("Idea not found");
    assert_eq!(updated.status, IdeaStatus::InProgress);
    assert_eq!(updated.updated_by, Some(manager));
}

#[test]
fn test_set_status_with_suggestions_files_feedback() {
    let (_dir, conn) = setup_test_db();
    let employee = create_test_user(&conn, "employee@example.com", Role::Employee);
    let manager = create_test_user(&conn, "manager@example.com", Role::InnovationManager);
    let idea_id = create_test_idea(&conn, employee);

    set_status(&conn, idea_id, IdeaStatus::Approved, manager, Some("try Y"))
        .expect("Failed to set status");

    let notes = feedback::find_by_idea(&conn, idea_id).expect("Query failed");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].feedback_type, FeedbackType::Actionable);
    assert_eq!(notes[0].comments, "try Y");
    assert_eq!(notes[0].provided_by, manager);

    // The idea document embeds the feedback reference
    let updated = find_by_id(&conn, idea_id)
        .expect("Query failed")
        .expect("Idea not found");
    assert_eq!(updated.feedback, vec![notes[0].id]);
}

#[test]
fn test_set_status_without_suggestions_files_nothing() {
    let (_dir, conn) = setup_test_db();
    let employee = create_test_user(&conn, "employee@example.com", Role::Employee);
    let manager = create_test_user(&conn, "manager@example.com", Role::InnovationManager);
    let idea_id = create_test_idea(&conn, employee);

    set_status(&conn, idea_id, IdeaStatus::Rejected, manager, None).expect("set status");
    set_status(&conn, idea_id, IdeaStatus::InProgress, manager, Some("   "))
        .expect("set status");

    let notes = feedback::find_by_idea(&conn, idea_id).expect("Query failed");
    assert!(notes.is_empty(), "Blank suggestions file no feedback");
}

#[test]
fn test_grant_reward_completes_idea() {
    let (_dir, conn) = setup_test_db();
    let employee = create_test_user(&conn, "employee@example.com", Role::Employee);
    let maker = create_test_user(&conn, "maker@example.com", Role::DecisionMaker);
    let idea_id = create_test_idea(&conn, employee);

    grant_reward(&conn, idea_id, 50, maker, Some("Great work"))
        .expect("Failed to grant reward");

    let updated = find_by_id(&conn, idea_id)
        .expect("Query failed")
        .expect("Idea not found");
    assert_eq!(updated.status, IdeaStatus::Completed);

    let embedded = updated.reward.expect("Reward embedded on idea");
    assert_eq!(embedded.points, 50);
    assert_eq!(embedded.given_by, maker);
    assert_eq!(embedded.comment.as_deref(), Some("Great work"));

    // The ledger row credits the submitter
    let entries = reward::find_by_user(&conn, employee).expect("Query failed");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].points, 50);
    assert_eq!(entries[0].idea_id, idea_id);
}

#[test]
fn test_second_grant_fails_already_completed() {
    let (_dir, conn) = setup_test_db();
    let employee = create_test_user(&conn, "employee@example.com", Role::Employee);
    let maker = create_test_user(&conn, "maker@example.com", Role::DecisionMaker);
    let idea_id = create_test_idea(&conn, employee);

    grant_reward(&conn, idea_id, 50, maker, None).expect("First grant succeeds");

    let second = grant_reward(&conn, idea_id, 25, maker, None);
    assert!(matches!(
        second,
        Err(AppError::Policy(ref msg)) if msg == "Idea is already completed."
    ));

    // First grant untouched
    let idea = find_by_id(&conn, idea_id)
        .expect("Query failed")
        .expect("Idea not found");
    assert_eq!(idea.reward.expect("reward").points, 50);
    assert_eq!(
        reward::total_points_for_user(&conn, employee).expect("sum"),
        50
    );
}

#[test]
fn test_reward_accepted_from_any_prior_status() {
    let (_dir, conn) = setup_test_db();
    let employee = create_test_user(&conn, "employee@example.com", Role::Employee);
    let maker = create_test_user(&conn, "maker@example.com", Role::DecisionMaker);

    // Straight from Submitted — no Approved prerequisite
    let from_submitted = create_test_idea(&conn, employee);
    grant_reward(&conn, from_submitted, 10, maker, None).expect("grant from Submitted");

    // Even from Rejected
    let from_rejected = create_test_idea(&conn, employee);
    set_status(&conn, from_rejected, IdeaStatus::Rejected, maker, None).expect("set status");
    grant_reward(&conn, from_rejected, 5, maker, None).expect("grant from Rejected");

    // Point positivity is not validated
    let zero_points = create_test_idea(&conn, employee);
    grant_reward(&conn, zero_points, 0, maker, None).expect("grant zero points");
}

#[test]
fn test_full_lifecycle_flow() {
    let (_dir, conn) = setup_test_db();
    let employee = create_test_user(&conn, "u1@example.com", Role::Employee);
    let manager = create_test_user(&conn, "manager@example.com", Role::InnovationManager);

    // Create: status starts Submitted
    let new_idea = NewIdea {
        title: "X".to_string(),
        description: "An idea".to_string(),
        category: IdeaCategory::Innovation,
        submitted_by: employee,
        files: Vec::new(),
    };
    let idea_id = create(&conn, &new_idea).expect("create");
    let created = find_by_id(&conn, idea_id).expect("query").expect("found");
    assert_eq!(created.status, IdeaStatus::Submitted);

    // Approve with a suggestion: status changes and Actionable feedback lands
    set_status(&conn, idea_id, IdeaStatus::Approved, manager, Some("try Y"))
        .expect("approve");
    let approved = find_by_id(&conn, idea_id).expect("query").expect("found");
    assert_eq!(approved.status, IdeaStatus::Approved);

    let notes = feedback::find_by_idea(&conn, idea_id).expect("query");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].feedback_type, FeedbackType::Actionable);
    assert_eq!(notes[0].comments, "try Y");

    // Reward: idea completes, second grant fails
    grant_reward(&conn, idea_id, 50, manager, None).expect("reward");
    let completed = find_by_id(&conn, idea_id).expect("query").expect("found");
    assert_eq!(completed.status, IdeaStatus::Completed);
    assert_eq!(completed.reward.expect("reward").points, 50);

    assert!(grant_reward(&conn, idea_id, 50, manager, None).is_err());
}

//! Like/unlike set semantics and comment appends.

mod common;

use common::*;
use ideahub::errors::AppError;
use ideahub::models::idea::*;
use ideahub::models::user::Role;

#[test]
fn test_like_increments_count() {
    let (_dir, conn) = setup_test_db();
    let alice = create_test_user(&conn, "alice@example.com", Role::Employee);
    let bob = create_test_user(&conn, "bob@example.com", Role::Employee);
    let idea_id = create_test_idea(&conn, alice);

    assert_eq!(like(&conn, idea_id, alice).expect("like"), 1);
    assert_eq!(like(&conn, idea_id, bob).expect("like"), 2);

    let idea = find_by_id(&conn, idea_id).expect("query").expect("found");
    assert_eq!(idea.likes, vec![alice, bob]);
}

#[test]
fn test_like_twice_fails() {
    let (_dir, conn) = setup_test_db();
    let alice = create_test_user(&conn, "alice@example.com", Role::Employee);
    let idea_id = create_test_idea(&conn, alice);

    like(&conn, idea_id, alice).expect("First like succeeds");

    let second = like(&conn, idea_id, alice);
    assert!(matches!(
        second,
        Err(AppError::Policy(ref msg)) if msg == "You already voted this idea"
    ));

    assert_eq!(like_count(&conn, idea_id).expect("count"), 1);
}

#[test]
fn test_unlike_never_liked_fails() {
    let (_dir, conn) = setup_test_db();
    let alice = create_test_user(&conn, "alice@example.com", Role::Employee);
    let idea_id = create_test_idea(&conn, alice);

    let result = unlike(&conn, idea_id, alice);
    assert!(matches!(
        result,
        Err(AppError::Policy(ref msg)) if msg == "You haven't voted this idea"
    ));
}

#[test]
fn test_like_then_unlike_restores_count() {
    let (_dir, conn) = setup_test_db();
    let alice = create_test_user(&conn, "alice@example.com", Role::Employee);
    let bob = create_test_user(&conn, "bob@example.com", Role::Employee);
    let idea_id = create_test_idea(&conn, alice);

    like(&conn, idea_id, bob).expect("like");
    let before = like_count(&conn, idea_id).expect("count");

    like(&conn, idea_id, alice).expect("like");
    assert_eq!(unlike(&conn, idea_id, alice).expect("unlike"), before);

    // A fresh like is accepted again after an unlike
    assert_eq!(like(&conn, idea_id, alice).expect("re-like"), before + 1);
}

#[test]
fn test_like_missing_idea_is_not_found() {
    let (_dir, conn) = setup_test_db();
    let alice = create_test_user(&conn, "alice@example.com", Role::Employee);

    let result = like(&conn, 9999, alice);
    assert!(matches!(
        result,
        Err(AppError::NotFound(ref msg)) if msg == "Idea not found"
    ));
}

#[test]
fn test_comments_append_in_order() {
    let (_dir, conn) = setup_test_db();
    let alice = create_test_user(&conn, "alice@example.com", Role::Employee);
    let bob = create_test_user(&conn, "bob@example.com", Role::Employee);
    let idea_id = create_test_idea(&conn, alice);

    add_comment(&conn, idea_id, bob, "First").expect("comment");
    let comments = add_comment(&conn, idea_id, alice, "Second").expect("comment");

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text, "First");
    assert_eq!(comments[0].created_by, bob);
    assert_eq!(comments[1].text, "Second");
    assert!(!comments[1].created_at.is_empty(), "Server assigns the timestamp");
}

#[test]
fn test_comments_not_gated_by_status() {
    let (_dir, conn) = setup_test_db();
    let alice = create_test_user(&conn, "alice@example.com", Role::Employee);
    let maker = create_test_user(&conn, "maker@example.com", Role::DecisionMaker);
    let idea_id = create_test_idea(&conn, alice);

    grant_reward(&conn, idea_id, 10, maker, None).expect("complete the idea");

    let comments =
        add_comment(&conn, idea_id, alice, "Still commentable").expect("comment");
    assert_eq!(comments.len(), 1);
}

//! Shared test infrastructure for model layer tests.
//!
//! `setup_test_db()` creates a temporary SQLite database with the full
//! schema; the returned TempDir must be kept alive for the Connection to
//! remain valid.

use rusqlite::Connection;
use tempfile::TempDir;

use ideahub::auth::password;
use ideahub::db::MIGRATIONS;
use ideahub::models::idea::{self, IdeaCategory, NewIdea};
use ideahub::models::user::{self, NewUser, Role};

pub const TEST_PASSWORD: &str = "password123";

pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");

    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");

    (dir, conn)
}

/// Create a user with a hashed password and the given role.
pub fn create_test_user(conn: &Connection, email: &str, role: Role) -> i64 {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");
    let new_user = NewUser {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        profile_image: None,
        email: email.to_string(),
        role,
        mobile: "555-0100".to_string(),
        password: hash,
    };
    user::create(conn, &new_user).expect("Failed to create test user")
}

/// Create an idea in the default Submitted state.
pub fn create_test_idea(conn: &Connection, submitted_by: i64) -> i64 {
    let new_idea = NewIdea {
        title: "Faster onboarding".to_string(),
        description: "Streamline the new-hire checklist".to_string(),
        category: IdeaCategory::Productivity,
        submitted_by,
        files: Vec::new(),
    };
    idea::create(conn, &new_idea).expect("Failed to create test idea")
}

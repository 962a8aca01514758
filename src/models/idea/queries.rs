use rusqlite::{Connection, OptionalExtension, params};

use super::status::{self, IdeaStatus, LifecycleAction};
use super::types::*;
use crate::errors::AppError;
use crate::models::{feedback, reward, user};

const SELECT_IDEA: &str = "\
    SELECT id, title, description, category, submitted_by, status, updated_by, \
           reward_points, reward_given_by, reward_comment, created_at, updated_at \
    FROM ideas";

struct IdeaRow {
    id: i64,
    title: String,
    description: String,
    category: IdeaCategory,
    submitted_by: i64,
    status: IdeaStatus,
    updated_by: Option<i64>,
    reward: Option<IdeaReward>,
    created_at: String,
    updated_at: String,
}

fn row_to_idea_row(row: &rusqlite::Row) -> rusqlite::Result<IdeaRow> {
    let category: String = row.get("category")?;
    let status: String = row.get("status")?;
    let reward_points: Option<i64> = row.get("reward_points")?;
    let reward_given_by: Option<i64> = row.get("reward_given_by")?;
    let reward_comment: Option<String> = row.get("reward_comment")?;

    let reward = reward_points.map(|points| IdeaReward {
        points,
        given_by: reward_given_by.unwrap_or(0),
        comment: reward_comment,
    });

    Ok(IdeaRow {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        category: IdeaCategory::parse(&category).unwrap_or(IdeaCategory::Innovation),
        submitted_by: row.get("submitted_by")?,
        status: IdeaStatus::parse(&status).unwrap_or(IdeaStatus::Submitted),
        updated_by: row.get("updated_by")?,
        reward,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn assemble(conn: &Connection, row: IdeaRow) -> rusqlite::Result<Idea> {
    let files = files_for(conn, row.id)?;
    let likes = likes_for(conn, row.id)?;
    let comments = comments_for(conn, row.id)?;
    let feedback = feedback::ids_for_idea(conn, row.id)?;

    Ok(Idea {
        id: row.id,
        title: row.title,
        description: row.description,
        category: row.category,
        submitted_by: row.submitted_by,
        status: row.status,
        files,
        likes,
        comments,
        feedback,
        reward: row.reward,
        updated_by: row.updated_by,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn files_for(conn: &Connection, idea_id: i64) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT url FROM idea_files WHERE idea_id = ?1 ORDER BY id")?;
    stmt.query_map(params![idea_id], |row| row.get(0))?
        .collect()
}

fn likes_for(conn: &Connection, idea_id: i64) -> rusqlite::Result<Vec<i64>> {
    let mut stmt =
        conn.prepare("SELECT user_id FROM idea_likes WHERE idea_id = ?1 ORDER BY rowid")?;
    stmt.query_map(params![idea_id], |row| row.get(0))?
        .collect()
}

pub fn comments_for(conn: &Connection, idea_id: i64) -> rusqlite::Result<Vec<Comment>> {
    let mut stmt = conn.prepare(
        "SELECT id, text, created_by, created_at FROM idea_comments \
         WHERE idea_id = ?1 ORDER BY id",
    )?;
    stmt.query_map(params![idea_id], |row| {
        Ok(Comment {
            id: row.get("id")?,
            text: row.get("text")?,
            created_by: row.get("created_by")?,
            created_at: row.get("created_at")?,
        })
    })?
    .collect()
}

/// Current lifecycle state, or NotFound for a missing idea.
pub fn current_status(conn: &Connection, id: i64) -> Result<IdeaStatus, AppError> {
    let status: Option<String> = conn
        .query_row("SELECT status FROM ideas WHERE id = ?1", params![id], |row| {
            row.get(0)
        })
        .optional()?;
    match status {
        Some(s) => Ok(IdeaStatus::parse(&s).unwrap_or(IdeaStatus::Submitted)),
        None => Err(AppError::NotFound("Idea not found".to_string())),
    }
}

pub fn create(conn: &Connection, new: &NewIdea) -> Result<i64, AppError> {
    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO ideas (title, description, category, submitted_by) \
         VALUES (?1, ?2, ?3, ?4)",
        params![new.title, new.description, new.category.as_str(), new.submitted_by],
    )?;
    let idea_id = tx.last_insert_rowid();

    for url in &new.files {
        tx.execute(
            "INSERT INTO idea_files (idea_id, url) VALUES (?1, ?2)",
            params![idea_id, url],
        )?;
    }

    tx.commit()?;
    Ok(idea_id)
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Idea>, AppError> {
    let sql = format!("{SELECT_IDEA} WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let row = stmt.query_row(params![id], row_to_idea_row).optional()?;
    match row {
        Some(r) => Ok(Some(assemble(conn, r)?)),
        None => Ok(None),
    }
}

/// All ideas, most recently updated first.
pub fn find_all(conn: &Connection) -> Result<Vec<Idea>, AppError> {
    let sql = format!("{SELECT_IDEA} ORDER BY updated_at DESC, id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], row_to_idea_row)?
        .collect::<Result<Vec<_>, _>>()?;
    let mut ideas = Vec::with_capacity(rows.len());
    for row in rows {
        ideas.push(assemble(conn, row)?);
    }
    Ok(ideas)
}

pub fn find_by_submitter(conn: &Connection, user_id: i64) -> Result<Vec<Idea>, AppError> {
    let sql = format!("{SELECT_IDEA} WHERE submitted_by = ?1 ORDER BY updated_at DESC, id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![user_id], row_to_idea_row)?
        .collect::<Result<Vec<_>, _>>()?;
    let mut ideas = Vec::with_capacity(rows.len());
    for row in rows {
        ideas.push(assemble(conn, row)?);
    }
    Ok(ideas)
}

/// Joined listing: submitter details plus comment authors, newest first.
pub fn find_all_detailed(conn: &Connection) -> Result<Vec<IdeaWithUsers>, AppError> {
    let sql = format!("{SELECT_IDEA} ORDER BY updated_at DESC, id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], row_to_idea_row)?
        .collect::<Result<Vec<_>, _>>()?;

    let mut ideas = Vec::with_capacity(rows.len());
    for row in rows {
        let submitted_by = user::find_brief_by_id(conn, row.submitted_by)?;
        let files = files_for(conn, row.id)?;
        let likes = likes_for(conn, row.id)?;
        let comments = comments_for(conn, row.id)?
            .into_iter()
            .map(|c| {
                let created_by_user = user::find_brief_by_id(conn, c.created_by)?;
                Ok(CommentWithUser {
                    id: c.id,
                    text: c.text,
                    created_by: c.created_by,
                    created_at: c.created_at,
                    created_by_user,
                })
            })
            .collect::<Result<Vec<_>, rusqlite::Error>>()?;

        ideas.push(IdeaWithUsers {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            status: row.status,
            submitted_by,
            files,
            likes,
            comments,
            created_at: row.created_at,
        });
    }
    Ok(ideas)
}

/// Guarded edit: permitted only while Submitted. Absent fields keep their
/// current value.
pub fn update(
    conn: &Connection,
    id: i64,
    title: Option<&str>,
    description: Option<&str>,
    category: Option<IdeaCategory>,
) -> Result<(), AppError> {
    let current = current_status(conn, id)?;
    status::check(current, LifecycleAction::Edit)?;

    conn.execute(
        "UPDATE ideas SET \
             title = COALESCE(?1, title), \
             description = COALESCE(?2, description), \
             category = COALESCE(?3, category), \
             updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?4",
        params![title, description, category.map(|c| c.as_str()), id],
    )?;
    Ok(())
}

/// Guarded delete: permitted only while Submitted.
pub fn delete(conn: &Connection, id: i64) -> Result<(), AppError> {
    let current = current_status(conn, id)?;
    status::check(current, LifecycleAction::Delete)?;

    conn.execute("DELETE FROM ideas WHERE id = ?1", params![id])?;
    Ok(())
}

/// Overwrite the status and updatedBy. A non-empty `suggestions` string
/// additionally files Actionable feedback; both writes share one transaction.
pub fn set_status(
    conn: &Connection,
    id: i64,
    new_status: IdeaStatus,
    updated_by: i64,
    suggestions: Option<&str>,
) -> Result<(), AppError> {
    let tx = conn.unchecked_transaction()?;

    let current = current_status(&tx, id)?;
    status::check(current, LifecycleAction::SetStatus(new_status))?;

    tx.execute(
        "UPDATE ideas SET status = ?1, updated_by = ?2, \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?3",
        params![new_status.as_str(), updated_by, id],
    )?;

    if let Some(text) = suggestions.map(str::trim).filter(|s| !s.is_empty()) {
        feedback::create(&tx, id, updated_by, feedback::FeedbackType::Actionable, text)?;
    }

    tx.commit()?;
    Ok(())
}

/// Terminal reward grant: denormalizes the reward onto the idea, forces
/// Completed, and appends to the rewards ledger for the submitter.
pub fn grant_reward(
    conn: &Connection,
    id: i64,
    points: i64,
    given_by: i64,
    comment: Option<&str>,
) -> Result<(), AppError> {
    let tx = conn.unchecked_transaction()?;

    let current = current_status(&tx, id)?;
    status::check(current, LifecycleAction::GrantReward)?;

    let submitted_by: i64 = tx.query_row(
        "SELECT submitted_by FROM ideas WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;

    tx.execute(
        "UPDATE ideas SET reward_points = ?1, reward_given_by = ?2, reward_comment = ?3, \
         status = ?4, updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?5",
        params![points, given_by, comment, IdeaStatus::Completed.as_str(), id],
    )?;

    reward::create(&tx, submitted_by, points, id)?;

    tx.commit()?;
    Ok(())
}

pub fn like_count(conn: &Connection, idea_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM idea_likes WHERE idea_id = ?1",
        params![idea_id],
        |row| row.get(0),
    )
}

/// Add the user to the likes set. The insert is the duplicate check: zero
/// affected rows means the user already voted. Returns the new like count.
pub fn like(conn: &Connection, idea_id: i64, user_id: i64) -> Result<i64, AppError> {
    current_status(conn, idea_id)?;

    let inserted = conn.execute(
        "INSERT OR IGNORE INTO idea_likes (idea_id, user_id) VALUES (?1, ?2)",
        params![idea_id, user_id],
    )?;
    if inserted == 0 {
        return Err(AppError::Policy("You already voted this idea".to_string()));
    }

    Ok(like_count(conn, idea_id)?)
}

/// Remove the user from the likes set; zero affected rows means the user
/// never voted. Returns the new like count.
pub fn unlike(conn: &Connection, idea_id: i64, user_id: i64) -> Result<i64, AppError> {
    current_status(conn, idea_id)?;

    let removed = conn.execute(
        "DELETE FROM idea_likes WHERE idea_id = ?1 AND user_id = ?2",
        params![idea_id, user_id],
    )?;
    if removed == 0 {
        return Err(AppError::Policy("You haven't voted this idea".to_string()));
    }

    Ok(like_count(conn, idea_id)?)
}

/// Append a comment with a server-assigned timestamp; no status gating.
/// Returns the idea's full comment list.
pub fn add_comment(
    conn: &Connection,
    idea_id: i64,
    user_id: i64,
    text: &str,
) -> Result<Vec<Comment>, AppError> {
    current_status(conn, idea_id)?;

    conn.execute(
        "INSERT INTO idea_comments (idea_id, text, created_by) VALUES (?1, ?2, ?3)",
        params![idea_id, text, user_id],
    )?;

    Ok(comments_for(conn, idea_id)?)
}

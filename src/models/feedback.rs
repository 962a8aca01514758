use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackType {
    Actionable,
    General,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Actionable => "Actionable",
            FeedbackType::General => "General",
        }
    }

    pub fn parse(s: &str) -> Option<FeedbackType> {
        match s {
            "Actionable" => Some(FeedbackType::Actionable),
            "General" => Some(FeedbackType::General),
            _ => None,
        }
    }
}

/// A review note tied to one idea and one provider.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub idea_id: i64,
    pub provided_by: i64,
    pub feedback_type: FeedbackType,
    pub comments: String,
    pub created_at: String,
    pub updated_at: String,
}

fn row_to_feedback(row: &rusqlite::Row) -> rusqlite::Result<Feedback> {
    let feedback_type: String = row.get("feedback_type")?;
    Ok(Feedback {
        id: row.get("id")?,
        idea_id: row.get("idea_id")?,
        provided_by: row.get("provided_by")?,
        feedback_type: FeedbackType::parse(&feedback_type).unwrap_or(FeedbackType::General),
        comments: row.get("comments")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn create(
    conn: &Connection,
    idea_id: i64,
    provided_by: i64,
    feedback_type: FeedbackType,
    comments: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO feedback (idea_id, provided_by, feedback_type, comments) \
         VALUES (?1, ?2, ?3, ?4)",
        params![idea_id, provided_by, feedback_type.as_str(), comments],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_idea(conn: &Connection, idea_id: i64) -> rusqlite::Result<Vec<Feedback>> {
    let mut stmt = conn.prepare(
        "SELECT id, idea_id, provided_by, feedback_type, comments, created_at, updated_at \
         FROM feedback WHERE idea_id = ?1 ORDER BY id",
    )?;
    stmt.query_map(params![idea_id], row_to_feedback)?.collect()
}

/// Ordered feedback ids for embedding in the idea document.
pub fn ids_for_idea(conn: &Connection, idea_id: i64) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare("SELECT id FROM feedback WHERE idea_id = ?1 ORDER BY id")?;
    stmt.query_map(params![idea_id], |row| row.get(0))?.collect()
}

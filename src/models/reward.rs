use rusqlite::{Connection, params};
use serde::Serialize;

/// One point grant in the ledger; the idea row carries the denormalized copy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardEntry {
    pub id: i64,
    pub user_id: i64,
    pub points: i64,
    pub idea_id: i64,
    pub awarded_at: String,
}

pub fn create(conn: &Connection, user_id: i64, points: i64, idea_id: i64) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO rewards (user_id, points, idea_id) VALUES (?1, ?2, ?3)",
        params![user_id, points, idea_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_user(conn: &Connection, user_id: i64) -> rusqlite::Result<Vec<RewardEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, points, idea_id, awarded_at FROM rewards \
         WHERE user_id = ?1 ORDER BY id",
    )?;
    stmt.query_map(params![user_id], |row| {
        Ok(RewardEntry {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            points: row.get("points")?,
            idea_id: row.get("idea_id")?,
            awarded_at: row.get("awarded_at")?,
        })
    })?
    .collect()
}

pub fn total_points_for_user(conn: &Connection, user_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COALESCE(SUM(points), 0) FROM rewards WHERE user_id = ?1",
        params![user_id],
        |row| row.get(0),
    )
}

use rusqlite::{Connection, OptionalExtension, params};

use super::types::{AccountStatus, NewUser, Role, User, UserBrief, UserDisplay};

const SELECT_USER: &str = "\
    SELECT id, first_name, last_name, profile_image, email, role, mobile, \
           password, status, created_at, updated_at \
    FROM users";

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    let role: String = row.get("role")?;
    let status: String = row.get("status")?;
    Ok(User {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        profile_image: row.get("profile_image")?,
        email: row.get("email")?,
        role: Role::parse(&role).unwrap_or(Role::Employee),
        mobile: row.get("mobile")?,
        password: row.get("password")?,
        status: AccountStatus::parse(&status).unwrap_or(AccountStatus::Active),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<UserDisplay>> {
    let sql = format!("{SELECT_USER} ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let users = stmt
        .query_map([], row_to_user)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(users.into_iter().map(UserDisplay::from).collect())
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<User>> {
    let sql = format!("{SELECT_USER} WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    stmt.query_row(params![id], row_to_user).optional()
}

pub fn find_display_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<UserDisplay>> {
    Ok(find_by_id(conn, id)?.map(UserDisplay::from))
}

/// Find user by email for authentication. Returns internal User with hash.
pub fn find_by_email(conn: &Connection, email: &str) -> rusqlite::Result<Option<User>> {
    let sql = format!("{SELECT_USER} WHERE email = ?1");
    let mut stmt = conn.prepare(&sql)?;
    stmt.query_row(params![email], row_to_user).optional()
}

pub fn find_brief_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<UserBrief>> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, email, mobile, profile_image \
         FROM users WHERE id = ?1",
    )?;
    stmt.query_row(params![id], |row| {
        Ok(UserBrief {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            email: row.get("email")?,
            mobile: row.get("mobile")?,
            profile_image: row.get("profile_image")?,
        })
    })
    .optional()
}

/// True when another user already holds this email. `exclude_id` skips the
/// record being updated so a user can keep their own address.
pub fn email_exists(
    conn: &Connection,
    email: &str,
    exclude_id: Option<i64>,
) -> rusqlite::Result<bool> {
    match exclude_id {
        Some(id) => conn.query_row(
            "SELECT COUNT(*) > 0 FROM users WHERE email = ?1 AND id != ?2",
            params![email, id],
            |row| row.get(0),
        ),
        None => conn.query_row(
            "SELECT COUNT(*) > 0 FROM users WHERE email = ?1",
            params![email],
            |row| row.get(0),
        ),
    }
}

pub fn create(conn: &Connection, new: &NewUser) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO users (first_name, last_name, profile_image, email, role, mobile, password) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            new.first_name,
            new.last_name,
            new.profile_image,
            new.email,
            new.role.as_str(),
            new.mobile,
            new.password,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

#[allow(clippy::too_many_arguments)]
pub fn update(
    conn: &Connection,
    id: i64,
    first_name: &str,
    last_name: &str,
    profile_image: Option<&str>,
    email: &str,
    role: Role,
    mobile: &str,
    password: Option<&str>,
) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE users SET first_name = ?1, last_name = ?2, profile_image = ?3, email = ?4, \
         role = ?5, mobile = ?6, \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?7",
        params![first_name, last_name, profile_image, email, role.as_str(), mobile, id],
    )?;

    if let Some(hash) = password {
        conn.execute(
            "UPDATE users SET password = ?1 WHERE id = ?2",
            params![hash, id],
        )?;
    }

    Ok(())
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM users WHERE id = ?1", params![id])?;
    Ok(())
}

pub fn set_status(conn: &Connection, id: i64, status: AccountStatus) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE users SET status = ?1, updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?2",
        params![status.as_str(), id],
    )?;
    Ok(())
}

pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
}

pub fn count_by_role(conn: &Connection, role: Role) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM users WHERE role = ?1",
        params![role.as_str()],
        |row| row.get(0),
    )
}

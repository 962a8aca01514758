use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

/// Metadata for one uploaded file; the bytes live on disk at `filepath`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub id: i64,
    pub filename: String,
    pub filepath: String,
    pub content_type: String,
    pub uploaded_at: String,
}

/// Unique on-disk name: millisecond timestamp prefix plus the original name
/// with path separators stripped.
pub fn storage_name(original: &str, now_millis: i64) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();
    let base = if base.is_empty() { "upload" } else { base };
    format!("{now_millis}-{base}")
}

fn row_to_file(row: &rusqlite::Row) -> rusqlite::Result<StoredFile> {
    Ok(StoredFile {
        id: row.get("id")?,
        filename: row.get("filename")?,
        filepath: row.get("filepath")?,
        content_type: row.get("content_type")?,
        uploaded_at: row.get("uploaded_at")?,
    })
}

pub fn create(
    conn: &Connection,
    filename: &str,
    filepath: &str,
    content_type: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO files (filename, filepath, content_type) VALUES (?1, ?2, ?3)",
        params![filename, filepath, content_type],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<StoredFile>> {
    let mut stmt = conn.prepare(
        "SELECT id, filename, filepath, content_type, uploaded_at FROM files WHERE id = ?1",
    )?;
    stmt.query_row(params![id], row_to_file).optional()
}

pub fn find_by_filename(conn: &Connection, filename: &str) -> rusqlite::Result<Option<StoredFile>> {
    let mut stmt = conn.prepare(
        "SELECT id, filename, filepath, content_type, uploaded_at FROM files \
         WHERE filename = ?1",
    )?;
    stmt.query_row(params![filename], row_to_file).optional()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_name_prefixes_timestamp() {
        assert_eq!(storage_name("report.pdf", 1700000000000), "1700000000000-report.pdf");
    }

    #[test]
    fn storage_name_strips_client_paths() {
        assert_eq!(storage_name("C:\\docs\\plan.txt", 42), "42-plan.txt");
        assert_eq!(storage_name("/tmp/notes.md", 42), "42-notes.md");
    }

    #[test]
    fn storage_name_handles_empty_names() {
        assert_eq!(storage_name("", 42), "42-upload");
    }
}

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use futures_util::StreamExt;
use std::path::PathBuf;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::file::{self, StoredFile};

/// Directory uploaded bytes are persisted under; also served at /uploads.
#[derive(Debug, Clone)]
pub struct UploadDir(pub PathBuf);

fn file_json(record: &StoredFile) -> serde_json::Value {
    serde_json::json!({
        "id": record.id,
        "filename": record.filename,
        "filepath": record.filepath,
        "contentType": record.content_type,
        "uploadedAt": record.uploaded_at,
        "url": format!("/uploads/{}", record.filename),
    })
}

/// POST /api/files/upload — multipart, single field. Bytes are stored under
/// a timestamp-prefixed name and a metadata record is kept.
pub async fn upload(
    pool: web::Data<DbPool>,
    upload_dir: web::Data<UploadDir>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| AppError::Upload(e.to_string()))?;

        let original_name = field
            .content_disposition()
            .get_filename()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| "upload".to_string());
        let content_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes = web::BytesMut::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| AppError::Upload(e.to_string()))?;
            bytes.extend_from_slice(&data);
        }

        let stored_name = file::storage_name(&original_name, Utc::now().timestamp_millis());
        let path = upload_dir.0.join(&stored_name);
        std::fs::write(&path, &bytes)?;

        let conn = pool.get()?;
        let id = file::create(&conn, &stored_name, &path.to_string_lossy(), &content_type)?;
        let record = file::find_by_id(&conn, id)?
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

        // Single field per request.
        return Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "File uploaded successfully",
            "file": file_json(&record),
        })));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

fn stream_file(record: StoredFile) -> Result<HttpResponse, AppError> {
    let bytes = std::fs::read(&record.filepath)?;
    Ok(HttpResponse::Ok()
        .content_type(record.content_type)
        .body(bytes))
}

/// GET /api/files/file/{id} — stream the bytes with the recorded content type.
pub async fn get_by_id(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let record = file::find_by_id(&conn, path.into_inner())?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;
    stream_file(record)
}

/// GET /api/files/name/{filename} — resolve by the stored unique name.
pub async fn get_by_name(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let record = file::find_by_filename(&conn, &path.into_inner())?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;
    stream_file(record)
}

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::idea::{self, CommentRequest, LikeRequest};

/// POST /api/ideas/{id}/like — fails if the user already voted.
pub async fn like(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<LikeRequest>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let likes = idea::like(&conn, path.into_inner(), body.user_id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Idea successfully voted",
        "likes": likes,
    })))
}

/// POST /api/ideas/{id}/unlike — fails if the user never voted.
pub async fn unlike(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<LikeRequest>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let likes = idea::unlike(&conn, path.into_inner(), body.user_id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Your vote successfully removed",
        "likes": likes,
    })))
}

/// POST /api/ideas/{id}/comment — no status gating.
pub async fn add_comment(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<CommentRequest>,
) -> Result<HttpResponse, AppError> {
    let text = body.text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Comment text is required".to_string()));
    }

    let conn = pool.get()?;
    let comments = idea::add_comment(&conn, path.into_inner(), body.user_id, text)?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Comment added successfully",
        "comments": comments,
    })))
}

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::idea;

/// GET /api/ideas — all ideas, most recently updated first.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let ideas = idea::find_all(&conn)?;
    Ok(HttpResponse::Ok().json(ideas))
}

/// GET /api/ideas/{id}/user — all ideas by one submitter.
pub async fn by_user(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let ideas = idea::find_by_submitter(&conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(ideas))
}

/// GET /api/ideas/detailed — listing with submitter and comment-author
/// details joined in.
pub async fn detailed(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let ideas = idea::find_all_detailed(&conn)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": ideas,
    })))
}

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::idea::{self, IdeaStatus, RewardRequest, StatusUpdateRequest};

/// PUT /api/ideas/{id}/status
///
/// Overwrites the status and records who changed it. A non-empty
/// `suggestions` string additionally files Actionable feedback against the
/// idea.
pub async fn update_status(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<StatusUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let idea_id = path.into_inner();

    let new_status = IdeaStatus::parse(&body.status)
        .ok_or_else(|| AppError::Validation("Invalid status value".to_string()))?;

    let conn = pool.get()?;

    idea::set_status(
        &conn,
        idea_id,
        new_status,
        body.provided_by,
        body.suggestions.as_deref(),
    )?;

    let updated = idea::find_by_id(&conn, idea_id)?
        .ok_or_else(|| AppError::NotFound("Idea not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": updated,
    })))
}

/// PATCH /api/ideas/{id}/reward
///
/// Terminal grant: stores the reward, forces Completed, and fails once the
/// idea is already completed.
pub async fn grant_reward(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<RewardRequest>,
) -> Result<HttpResponse, AppError> {
    let idea_id = path.into_inner();
    let conn = pool.get()?;

    idea::grant_reward(
        &conn,
        idea_id,
        body.rewards_points,
        body.provided_by,
        body.comments.as_deref(),
    )?;

    let updated = idea::find_by_id(&conn, idea_id)?
        .ok_or_else(|| AppError::NotFound("Idea not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "updatedIdea": updated,
    })))
}

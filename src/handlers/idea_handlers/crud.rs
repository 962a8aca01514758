use actix_web::{HttpResponse, web};

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::idea::{self, CreateIdeaRequest, IdeaCategory, NewIdea, UpdateIdeaRequest};

/// POST /api/ideas — submit a new idea; status defaults to Submitted.
pub async fn create(
    pool: web::Data<DbPool>,
    body: web::Json<CreateIdeaRequest>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.title, "Title", 200));
    errors.extend(validate::validate_required(&body.description, "Description", 5000));

    let category = match IdeaCategory::parse(&body.category) {
        Some(category) => category,
        None => {
            errors.push("Invalid category value".to_string());
            IdeaCategory::Innovation
        }
    };

    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let conn = pool.get()?;

    let new_idea = NewIdea {
        title: body.title.trim().to_string(),
        description: body.description.trim().to_string(),
        category,
        submitted_by: body.submitted_by,
        files: body.files.clone().unwrap_or_default(),
    };

    let idea_id = idea::create(&conn, &new_idea)?;
    let created = idea::find_by_id(&conn, idea_id)?
        .ok_or_else(|| AppError::NotFound("Idea not found".to_string()))?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "data": created,
    })))
}

/// GET /api/ideas/{id}
pub async fn read(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let found = idea::find_by_id(&conn, path.into_inner())?
        .ok_or_else(|| AppError::NotFound("Idea not found".to_string()))?;
    Ok(HttpResponse::Ok().json(found))
}

/// PUT /api/ideas/{id} — permitted only while Submitted.
pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<UpdateIdeaRequest>,
) -> Result<HttpResponse, AppError> {
    let idea_id = path.into_inner();

    let category = match &body.category {
        Some(raw) => Some(
            IdeaCategory::parse(raw)
                .ok_or_else(|| AppError::Validation("Invalid category value".to_string()))?,
        ),
        None => None,
    };

    let conn = pool.get()?;

    idea::update(
        &conn,
        idea_id,
        body.title.as_deref().map(str::trim),
        body.description.as_deref().map(str::trim),
        category,
    )?;

    let updated = idea::find_by_id(&conn, idea_id)?
        .ok_or_else(|| AppError::NotFound("Idea not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": updated,
    })))
}

/// DELETE /api/ideas/{id} — permitted only while Submitted.
pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    idea::delete(&conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Idea deleted successfully",
    })))
}

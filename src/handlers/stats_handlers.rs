use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::stats;

/// GET /api/ideas/stats — aggregate counts and percentages over every idea
/// plus user totals partitioned by role.
pub async fn all_idea_count(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let stats = stats::overall(&conn)?;
    Ok(HttpResponse::Ok().json(stats))
}

/// GET /api/employees/{id}/stats — per-submitter aggregates plus the summed
/// reward points.
pub async fn employee_stats(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let stats = stats::for_employee(&conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(stats))
}

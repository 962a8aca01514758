use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::{password, session};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::user::{self, AccountStatus, LoginRequest, UserDisplay};

/// POST /api/users/login
///
/// Missing user and wrong password produce the same generic failure; a
/// disabled account with correct credentials is the one distinct case.
pub async fn login(
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;

    let found = user::find_by_email(&conn, body.email.trim())?;
    let u = match found {
        Some(u) => u,
        None => return Err(AppError::InvalidCredentials),
    };

    let verified = password::verify_password(&body.password, &u.password)
        .map_err(|e| AppError::Hash(e))?;
    if !verified {
        return Err(AppError::InvalidCredentials);
    }

    if u.status != AccountStatus::Active {
        return Err(AppError::AccountDisabled);
    }

    session::login(&session, u.id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Login successful",
        "user": UserDisplay::from(u),
    })))
}

/// GET /api/users/profile — resolve the session back to the full user record.
pub async fn profile(
    pool: web::Data<DbPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user_id = session::require_user_id(&session)?;

    let conn = pool.get()?;
    let u = user::find_display_by_id(&conn, user_id)?
        .ok_or_else(|| AppError::Session("Session user no longer exists".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "user": u,
    })))
}

/// GET /api/users/logout
pub async fn logout(session: Session) -> Result<HttpResponse, AppError> {
    session::logout(&session);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Logged out successfully",
    })))
}

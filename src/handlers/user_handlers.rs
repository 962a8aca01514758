use actix_web::{HttpResponse, web};

use crate::auth::{password, validate};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::user::{self, AccountStatus, NewUser, Role, StatusRequest, UserRequest};

fn validate_request(body: &UserRequest, password_required: bool) -> Result<Role, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.first_name, "First name", 100));
    errors.extend(validate::validate_required(&body.last_name, "Last name", 100));
    errors.extend(validate::validate_email(&body.email));
    match &body.password {
        Some(pwd) => errors.extend(validate::validate_password(pwd)),
        None if password_required => errors.push("Password is required".to_string()),
        None => {}
    }
    errors.extend(validate::validate_optional(&body.mobile, "Mobile", 30));

    let role = match Role::parse(&body.role) {
        Some(role) => role,
        None => {
            errors.push("Invalid role value".to_string());
            Role::Employee
        }
    };

    if errors.is_empty() {
        Ok(role)
    } else {
        Err(AppError::Validation(errors.join("; ")))
    }
}

/// POST /api/users
pub async fn create(
    pool: web::Data<DbPool>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let role = validate_request(&body, true)?;

    let conn = pool.get()?;

    if user::email_exists(&conn, body.email.trim(), None)? {
        return Err(AppError::Validation("Email already exists".to_string()));
    }

    let hashed = password::hash_password(body.password.as_deref().unwrap_or_default())
        .map_err(|_| AppError::Hash("Password hash failed".to_string()))?;

    let new_user = NewUser {
        first_name: body.first_name.trim().to_string(),
        last_name: body.last_name.trim().to_string(),
        profile_image: body.profile_image.clone(),
        email: body.email.trim().to_string(),
        role,
        mobile: body.mobile.trim().to_string(),
        password: hashed,
    };

    let created_id = user::create(&conn, &new_user)?;
    let created = user::find_display_by_id(&conn, created_id)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "data": created,
    })))
}

/// GET /api/users
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let users = user::find_all(&conn)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": users,
    })))
}

/// GET /api/users/{id}
pub async fn read(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let u = user::find_display_by_id(&conn, path.into_inner())?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": u,
    })))
}

/// PUT /api/users/{id} — password is re-hashed only when provided.
pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let role = validate_request(&body, false)?;

    let conn = pool.get()?;

    user::find_display_by_id(&conn, user_id)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if user::email_exists(&conn, body.email.trim(), Some(user_id))? {
        return Err(AppError::Validation("Email already exists".to_string()));
    }

    let hashed = match &body.password {
        Some(pwd) => Some(
            password::hash_password(pwd)
                .map_err(|_| AppError::Hash("Password hash failed".to_string()))?,
        ),
        None => None,
    };

    user::update(
        &conn,
        user_id,
        body.first_name.trim(),
        body.last_name.trim(),
        body.profile_image.as_deref(),
        body.email.trim(),
        role,
        body.mobile.trim(),
        hashed.as_deref(),
    )?;

    let updated = user::find_display_by_id(&conn, user_id)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": updated,
    })))
}

/// DELETE /api/users/{id}
pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let conn = pool.get()?;

    user::find_display_by_id(&conn, user_id)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    user::delete(&conn, user_id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "User deleted successfully",
    })))
}

/// PUT /api/users/{id}/status — Active/Disabled toggle.
pub async fn set_status(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<StatusRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    let status = AccountStatus::parse(&body.status)
        .ok_or_else(|| AppError::Validation("Invalid status value".to_string()))?;

    let conn = pool.get()?;

    user::find_display_by_id(&conn, user_id)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    user::set_status(&conn, user_id, status)?;

    let updated = user::find_display_by_id(&conn, user_id)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "User status updated successfully",
        "user": updated,
    })))
}

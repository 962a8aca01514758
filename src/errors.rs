use actix_web::{HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Db(rusqlite::Error),
    Pool(r2d2::Error),
    Io(std::io::Error),
    Hash(String),
    /// No session, or the session no longer resolves to a user.
    Session(String),
    /// Missing record; message names the resource ("Idea not found").
    NotFound(String),
    /// Lifecycle or business-rule guard failure; message names the rule.
    Policy(String),
    /// Bad input: field validation, invalid enum value, duplicate email.
    Validation(String),
    /// Bad email/password pair — deliberately cause-agnostic.
    InvalidCredentials,
    /// Correct credentials, but the account status is Disabled.
    AccountDisabled,
    /// Broken multipart payload.
    Upload(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Pool(e) => write!(f, "Pool error: {e}"),
            AppError::Io(e) => write!(f, "IO error: {e}"),
            AppError::Hash(e) => write!(f, "Hash error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::NotFound(msg) => write!(f, "{msg}"),
            AppError::Policy(msg) => write!(f, "{msg}"),
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::InvalidCredentials => write!(f, "Invalid email or password"),
            AppError::AccountDisabled => {
                write!(f, "Your account is disabled. Please contact support.")
            }
            AppError::Upload(e) => write!(f, "File upload failed: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => {
                HttpResponse::NotFound().json(serde_json::json!({ "message": msg }))
            }
            AppError::Policy(msg) | AppError::Validation(msg) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "message": msg }))
            }
            AppError::InvalidCredentials => HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "message": self.to_string(),
            })),
            AppError::AccountDisabled => HttpResponse::Forbidden().json(serde_json::json!({
                "success": false,
                "message": self.to_string(),
            })),
            AppError::Session(_) => HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "message": "Not authenticated",
            })),
            AppError::Upload(e) => HttpResponse::BadRequest().json(serde_json::json!({
                "message": "File upload failed",
                "error": e,
            })),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": "Internal server error",
                    "error": self.to_string(),
                }))
            }
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e)
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Pool(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

use actix_session::Session;

use crate::errors::AppError;

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

/// The authenticated user id, or a session error for anonymous requests.
pub fn require_user_id(session: &Session) -> Result<i64, AppError> {
    get_user_id(session).ok_or_else(|| AppError::Session("No user in session".to_string()))
}

pub fn login(session: &Session, user_id: i64) -> Result<(), AppError> {
    session
        .insert("user_id", user_id)
        .map_err(|e| AppError::Session(format!("Failed to store session: {e}")))
}

pub fn logout(session: &Session) {
    session.purge();
}

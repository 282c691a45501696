use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    storage::SessionStore,
};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

/// Session item whose presence unlocks the admin surface.
pub const ADMIN_FLAG: &str = "isAdmin";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Try admin/admin";

pub fn credentials_match(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

pub fn login_admin(
    sessions: &SessionStore,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { username, password } = payload;
    if !credentials_match(&username, &password) {
        tracing::info!(username = %username, "admin login rejected");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let mut session = sessions.open();
    session.set_item(ADMIN_FLAG, "true");
    let token = session.id().to_string();
    sessions.put(session);
    tracing::info!("admin logged in");

    Ok(ApiResponse::success(
        "Logged in",
        LoginResponse {
            token: format!("Bearer {}", token),
        },
        Some(Meta::empty()),
    ))
}

pub fn is_admin(sessions: &SessionStore, token: &str) -> bool {
    sessions
        .get(token)
        .is_some_and(|session| session.has_item(ADMIN_FLAG))
}

/// End the session, dropping the admin flag with it.
pub fn logout_admin(
    sessions: &SessionStore,
    token: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if sessions.end(token) {
        tracing::info!("admin logged out");
    }

    Ok(ApiResponse::success(
        "Logged out",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

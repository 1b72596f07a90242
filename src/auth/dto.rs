use serde::Serialize;

/// Public part of the user returned to clients.
#[derive(Debug, Serialize)]
pub struct UserPublic {
    pub id: i64,
    pub username: String,
}

/// Successful login body. Token and user sit at the top level next to the
/// envelope fields, not under `data`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: UserPublic,
}

use serde::{Deserialize, Serialize};

/// Request body for customer registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response carrying a status message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response returned after a successful login. The token is opaque and
/// issued per call; nothing validates it on later requests.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub sessionid: String,
}
